//! Gemini `generateContent` client used by the on-screen assistant.
//!
//! Each call is stateless: only the visitor's text is sent, alongside the
//! fixed storefront system instruction and a short output cap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KioskError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MAX_OUTPUT_TOKENS: u32 = 150;

const SYSTEM_INSTRUCTION: &str = "\
You are \"TypingBot\", a helpful, professional, and friendly AI assistant for \"Excellent Typing & Travels\", a typing centre in the UAE.
Your goal is to assist customers with queries related to:
- UAE Visas (Golden Visa, Tourist Visa, Family Visa, Residence Visa)
- Emirates ID applications and renewals
- Medical test typing
- Flight tickets and travel insurance
- Business setup in Dubai/UAE

Guidelines:
1. Keep answers concise (under 80 words if possible) as this is displayed on a kiosk screen.
2. Be polite and professional.
3. If you don't know the exact current government fee, give a range or advise them to check with the counter staff.
4. Encourage them to speak to a human agent at the counter for complex cases.
5. Do not use markdown formatting like bold or lists extensively, keep it conversational text.
";

/// One request, one reply.
pub trait ChatBackend: Send + Sync {
    fn send(&self, text: &str) -> Result<String>;
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent?key={}", self.base_url, self.model, self.api_key)
    }

    fn request_body(text: &str) -> GenerateContentRequest<'_> {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: SYSTEM_INSTRUCTION }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

impl ChatBackend for GeminiClient {
    fn send(&self, text: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(KioskError::Chat("no API key configured".to_string()));
        }

        debug!("Sending {} chars to {}", text.len(), self.model);
        let response = minreq::post(self.endpoint())
            .with_json(&Self::request_body(text))?
            .send()?;

        if !(200..300).contains(&response.status_code) {
            let body = response.as_str().unwrap_or_default();
            return Err(KioskError::Chat(error_message(response.status_code, body)));
        }

        let parsed: GenerateContentResponse = response.json()?;
        Ok(extract_text(parsed))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Joins the text parts of the first candidate. Missing text gives an empty string.
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn error_message(status: i32, body: &str) -> String {
    match serde_json::from_str::<ErrorWrapper>(body) {
        Ok(wrapper) => {
            let message = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(s) if !s.is_empty() => format!("HTTP {}: {}: {}", status, s, message),
                _ => format!("HTTP {}: {}", status, message),
            }
        }
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let json = serde_json::to_value(GeminiClient::request_body("Golden visa fees?")).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Golden visa fees?");
        assert!(json["systemInstruction"].get("role").is_none());
        assert!(json["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("TypingBot"));
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 150);
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn endpoint_includes_model_and_key() {
        let client = GeminiClient::new("k123", DEFAULT_MODEL).with_base_url("http://localhost:9");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/gemini-2.5-flash:generateContent?key=k123"
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"there"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(parsed), "Hello there");

        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_text(parsed), "");
    }

    #[test]
    fn error_message_prefers_api_error_body() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            error_message(403, body),
            "HTTP 403: PERMISSION_DENIED: API key not valid"
        );
        assert_eq!(error_message(502, "bad gateway"), "HTTP 502: bad gateway");
    }

    #[test]
    fn missing_key_fails_without_network() {
        let client = GeminiClient::new("", DEFAULT_MODEL);
        assert!(!client.has_api_key());
        assert!(matches!(client.send("hi"), Err(KioskError::Chat(_))));
    }
}
