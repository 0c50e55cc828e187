//! Transcript types — messages, roles, and provenance tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Short label for logging and display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A display-only provenance tag attached to an assistant answer.
///
/// Not verified against any document; carried verbatim from the answer bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Cited section title.
    pub citation: String,
    /// Page number in the RFP document.
    pub page: u32,
    /// Quoted passage.
    pub text: String,
}

impl SourceRef {
    pub fn new(citation: impl Into<String>, page: u32, text: impl Into<String>) -> Self {
        Self {
            citation: citation.into(),
            page,
            text: text.into(),
        }
    }
}

/// One entry in the append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique ID.
    pub id: Uuid,
    /// Author role.
    pub role: Role,
    /// Display text.
    pub content: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Provenance tags, ordered; empty for user and system messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

impl Message {
    /// Create a message with a fresh id and the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        }
    }

    /// A message from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// A message from the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// A system message (e.g. the session greeting).
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Builder: attach provenance tags.
    pub fn with_sources(mut self, sources: Vec<SourceRef>) -> Self {
        self.sources = sources;
        self
    }
}

/// Events broadcast to subscribers as the transcript grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// A message was appended to the transcript.
    MessageAppended { message: Message },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        assert_eq!(Message::user("q").role, Role::User);
        assert_eq!(Message::assistant("a").role, Role::Assistant);
        assert_eq!(Message::system("s").role, Role::System);
    }

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_sources_builder() {
        let msg = Message::assistant("answer")
            .with_sources(vec![SourceRef::new("Technical Requirements", 14, "quote")]);
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.sources[0].page, 14);
    }

    #[test]
    fn role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let parsed: Role = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, Role::System);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.label(), "user");
        assert_eq!(Role::Assistant.label(), "assistant");
        assert_eq!(Role::System.label(), "system");
    }

    #[test]
    fn empty_sources_omitted_from_json() {
        let json = serde_json::to_string(&Message::user("q")).unwrap();
        assert!(!json.contains("sources"));
    }

    #[test]
    fn message_serde_roundtrip() {
        let msg = Message::assistant("answer")
            .with_sources(vec![SourceRef::new("Evaluation Criteria", 23, "quote")]);
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn transcript_event_serde() {
        let event = TranscriptEvent::MessageAppended {
            message: Message::user("q"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"message_appended\""));
    }
}
