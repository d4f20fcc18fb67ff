use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::path::Path;

use crate::error::{KioskError, Result};

const FETCH_TIMEOUT_SECS: u64 = 20;

/// Where a media string points.
#[derive(Debug, PartialEq)]
pub enum MediaSource<'a> {
    Inline { mime: &'a str, payload: &'a str },
    Remote(&'a str),
    File(&'a Path),
}

impl<'a> MediaSource<'a> {
    pub fn parse(source: &'a str) -> Self {
        if let Some(rest) = source.strip_prefix("data:") {
            if let Some((meta, payload)) = rest.split_once(',') {
                let mime = meta.strip_suffix(";base64").unwrap_or(meta);
                return Self::Inline { mime, payload };
            }
        }
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Remote(source)
        } else {
            Self::File(Path::new(source.strip_prefix("file://").unwrap_or(source)))
        }
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// File extension hint for decoding images in memory, with the leading dot.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => ".jpg",
        "image/gif" => ".gif",
        "image/bmp" => ".bmp",
        "image/webp" => ".webp",
        "image/svg+xml" => ".svg",
        _ => ".png",
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

/// Decodes an inline `data:` URL into its mime type and bytes.
pub fn decode_data_url(source: &str) -> Result<(String, Vec<u8>)> {
    match MediaSource::parse(source) {
        MediaSource::Inline { mime, payload } => {
            let bytes = BASE64_STANDARD
                .decode(payload)
                .map_err(|e| KioskError::Media(format!("bad base64 payload: {}", e)))?;
            Ok((mime.to_string(), bytes))
        }
        _ => Err(KioskError::Media("not a data URL".to_string())),
    }
}

/// Loads raw bytes and an extension hint for any media string.
pub fn fetch_bytes(source: &str) -> Result<(Vec<u8>, String)> {
    match MediaSource::parse(source) {
        MediaSource::Inline { .. } => {
            let (mime, bytes) = decode_data_url(source)?;
            Ok((bytes, extension_for_mime(&mime).to_string()))
        }
        MediaSource::Remote(url) => {
            let response = minreq::get(url).with_timeout(FETCH_TIMEOUT_SECS).send()?;
            if !(200..300).contains(&response.status_code) {
                return Err(KioskError::Media(format!("HTTP {} for {}", response.status_code, url)));
            }
            let mime = response
                .headers
                .get("content-type")
                .map(|v| v.split(';').next().unwrap_or("").trim().to_string())
                .unwrap_or_default();
            Ok((response.into_bytes(), extension_for_mime(&mime).to_string()))
        }
        MediaSource::File(path) => {
            let bytes = std::fs::read(path)?;
            Ok((bytes, extension_for_mime(mime_for_path(path)).to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_kinds() {
        assert_eq!(
            MediaSource::parse("data:image/png;base64,AAAA"),
            MediaSource::Inline { mime: "image/png", payload: "AAAA" }
        );
        assert_eq!(
            MediaSource::parse("https://images.example/a.jpg"),
            MediaSource::Remote("https://images.example/a.jpg")
        );
        assert_eq!(
            MediaSource::parse("file:///srv/kiosk/bg.png"),
            MediaSource::File(Path::new("/srv/kiosk/bg.png"))
        );
    }

    #[test]
    fn data_url_round_trip() {
        let bytes = [0x89, b'P', b'N', b'G', 0, 1, 2, 3];
        let url = encode_data_url("image/png", &bytes);
        assert!(url.starts_with("data:image/png;base64,"));
        let (mime, decoded) = decode_data_url(&url).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn decode_rejects_non_data_urls() {
        assert!(decode_data_url("https://example.com/x.png").is_err());
        assert!(decode_data_url("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn mime_and_extension_lookup() {
        assert_eq!(mime_for_path(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("logo")), "application/octet-stream");
        assert_eq!(extension_for_mime("image/jpeg"), ".jpg");
        assert_eq!(extension_for_mime("text/html"), ".png");
    }

    #[test]
    fn local_files_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        let (bytes, ext) = fetch_bytes(path.to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"GIF89a");
        assert_eq!(ext, ".gif");
    }
}
