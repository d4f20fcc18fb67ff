//! The visitor-facing chat dialog.
//!
//! The message log only grows. A submitted question runs on its own worker
//! thread and the frame loop picks up the outcome with [`Assistant::poll`];
//! the request finishes even if the dialog is closed in the meantime.

use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

use crate::error::{KioskError, Result};
use crate::gemini::ChatBackend;

pub const GREETING: &str =
    "Hello! I am your virtual assistant. Ask me about our visa services or documents needed.";
pub const EMPTY_REPLY: &str = "I apologize, I couldn't process that request. Please ask the staff.";
pub const CONNECTION_APOLOGY: &str = "I am currently experiencing connection issues. \
     Please speak to one of our agents at the counter for immediate assistance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

pub struct Assistant {
    messages: Vec<ChatMessage>,
    input: String,
    loading: bool,
    next_id: u64,
    pending: Option<Receiver<Result<String>>>,
}

impl Assistant {
    pub fn new() -> Self {
        let mut assistant = Self {
            messages: Vec::new(),
            input: String::new(),
            loading: false,
            next_id: 1,
            pending: None,
        };
        assistant.push(ChatSender::Bot, GREETING.to_string());
        assistant
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    #[cfg(test)]
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Sends the current input. Returns false when there is nothing to send
    /// or a reply is still outstanding.
    pub fn submit(&mut self, backend: &Arc<dyn ChatBackend>) -> bool {
        if self.loading || self.input.trim().is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        let id = self.push(ChatSender::User, text.clone());
        self.loading = true;
        info!("Question #{} sent to the assistant", id);

        let (tx, rx) = mpsc::channel();
        let backend = Arc::clone(backend);
        thread::spawn(move || {
            // Receiver may be gone at shutdown
            let _ = tx.send(backend.send(&text));
        });
        self.pending = Some(rx);
        true
    }

    /// Picks up a finished reply, if any. Returns true when the log changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.finish(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.finish(Err(KioskError::Chat("worker exited without a reply".to_string())));
                true
            }
        }
    }

    fn finish(&mut self, outcome: Result<String>) {
        let text = match outcome {
            Ok(reply) if reply.trim_matches(|c: char| c.is_whitespace() || c == '\0').is_empty() => {
                EMPTY_REPLY.to_string()
            }
            Ok(mut reply) => {
                // Drawn through C strings
                reply.retain(|c| c != '\0');
                info!("Assistant replied with {} chars", reply.len());
                reply
            }
            Err(e) => {
                error!("Assistant request failed: {}", e);
                CONNECTION_APOLOGY.to_string()
            }
        };
        self.push(ChatSender::Bot, text);
        self.pending = None;
        self.loading = false;
    }

    fn push(&mut self, sender: ChatSender, text: String) -> u64 {
        let id = self.next_id;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp: Local::now(),
        });
        self.next_id += 1;
        id
    }

    /// Blocks until the outstanding reply lands.
    #[cfg(test)]
    fn settle(&mut self) {
        if let Some(rx) = self.pending.take() {
            let outcome = rx
                .recv()
                .unwrap_or_else(|_| Err(KioskError::Chat("worker vanished".to_string())));
            self.finish(outcome);
        }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Scripted {
        reply: Option<String>,
        seen: Mutex<Vec<String>>,
    }

    impl ChatBackend for Scripted {
        fn send(&self, text: &str) -> Result<String> {
            self.seen.lock().unwrap().push(text.to_string());
            self.reply
                .clone()
                .ok_or_else(|| KioskError::Chat("connection refused".to_string()))
        }
    }

    fn backend(reply: Option<&str>) -> (Arc<Scripted>, Arc<dyn ChatBackend>) {
        let scripted = Arc::new(Scripted {
            reply: reply.map(str::to_string),
            seen: Mutex::new(Vec::new()),
        });
        let dynamic: Arc<dyn ChatBackend> = scripted.clone();
        (scripted, dynamic)
    }

    #[test]
    fn starts_with_greeting() {
        let assistant = Assistant::new();
        assert_eq!(assistant.messages().len(), 1);
        assert_eq!(assistant.messages()[0].sender, ChatSender::Bot);
        assert_eq!(assistant.messages()[0].text, GREETING);
        assert!(!assistant.is_loading());
    }

    #[test]
    fn successful_reply_is_appended() {
        let (scripted, backend) = backend(Some("Family visas take 2-3 working days."));
        let mut assistant = Assistant::new();
        assistant.set_input("How long is a family visa?");

        assert!(assistant.submit(&backend));
        assert!(assistant.is_loading());
        assert_eq!(assistant.input(), "");

        assistant.settle();
        assert!(!assistant.is_loading());
        let texts: Vec<_> = assistant.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![GREETING, "How long is a family visa?", "Family visas take 2-3 working days."]
        );
        assert_eq!(*scripted.seen.lock().unwrap(), vec!["How long is a family visa?".to_string()]);
    }

    #[test]
    fn failure_appends_one_apology_and_clears_loading() {
        let (_, backend) = backend(None);
        let mut assistant = Assistant::new();
        assistant.set_input("hello");
        assistant.submit(&backend);
        assistant.settle();

        assert!(!assistant.is_loading());
        assert_eq!(assistant.messages().len(), 3);
        let last = assistant.messages().last().unwrap();
        assert_eq!(last.sender, ChatSender::Bot);
        assert_eq!(last.text, CONNECTION_APOLOGY);
    }

    #[test]
    fn empty_reply_becomes_apology() {
        let (_, backend) = backend(Some("  "));
        let mut assistant = Assistant::new();
        assistant.set_input("hello");
        assistant.submit(&backend);
        assistant.settle();
        assert_eq!(assistant.messages().last().unwrap().text, EMPTY_REPLY);
    }

    #[test]
    fn nul_characters_are_dropped_from_replies() {
        let (_, backend) = backend(Some("Visit\0 the counter"));
        let mut assistant = Assistant::new();
        assistant.set_input("hello");
        assistant.submit(&backend);
        assistant.settle();
        assert_eq!(assistant.messages().last().unwrap().text, "Visit the counter");
    }

    #[test]
    fn blank_input_and_busy_dialog_do_not_send() {
        let (scripted, backend) = backend(Some("ok"));
        let mut assistant = Assistant::new();
        assistant.set_input("   ");
        assert!(!assistant.submit(&backend));

        assistant.set_input("first");
        assert!(assistant.submit(&backend));
        assistant.set_input("second");
        assert!(!assistant.submit(&backend));

        assistant.settle();
        assert_eq!(scripted.seen.lock().unwrap().len(), 1);
        assert_eq!(assistant.input(), "second");
    }

    #[test]
    fn message_ids_increase() {
        let (_, backend) = backend(Some("ok"));
        let mut assistant = Assistant::new();
        assistant.set_input("a");
        assistant.submit(&backend);
        assistant.settle();
        let ids: Vec<_> = assistant.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
