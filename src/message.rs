//! Chat message structs, with optional attachment metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// File metadata attached to a message. The core never reads file contents;
/// the shell keeps the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// A single conversation entry. Immutable once created; ordering is carried
/// by position in the store, not by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    fn new(sender: Sender, content: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            attachments,
        }
    }

    pub fn user(content: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self::new(Sender::User, content, attachments)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Sender::Bot, content, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_sender() {
        let user = Message::user("hi", vec![Attachment::new("notes.txt", 128)]);
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.attachments.len(), 1);

        let bot = Message::bot("hello");
        assert_eq!(bot.sender, Sender::Bot);
        assert!(bot.attachments.is_empty());
    }

    #[test]
    fn ids_are_unique_within_a_session() {
        let a = Message::user("a", Vec::new());
        let b = Message::user("a", Vec::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_round_trip() {
        let msg = Message::user("hello", vec![Attachment::new("pic.png", 2048)]);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"user\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn empty_attachments_are_skipped_in_json() {
        let json = serde_json::to_string(&Message::bot("hi")).unwrap();
        assert!(!json.contains("attachments"));
    }
}
