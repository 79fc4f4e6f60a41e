//! # Chat Messages
//!
//! The persisted chat model: sessions of timestamped messages whose parts
//! are text or file attachments. The serde layout matches the JSON the web
//! client keeps in browser storage, so exported history files load as-is.

pub mod history;
pub mod view;

use serde::{Deserialize, Serialize};

pub use history::{HistoryError, load_history, save_history};
pub use view::MessageView;

/// Title used when a session has neither user text nor an attachment name.
pub const FALLBACK_TITLE: &str = "Imported Chat";
/// Maximum characters of a derived session title.
pub const TITLE_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// An attached file. `data` (base64) is dropped when history is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub name: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    Text { text: String },
    File { file: FileAttachment },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
}

impl Message {
    pub fn text(role: Role, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role,
            parts: vec![Part::Text { text: text.into() }],
            timestamp,
        }
    }

    /// All text parts joined with newlines; this is what gets rendered.
    pub fn combined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::File { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn attachments(&self) -> impl Iterator<Item = &FileAttachment> {
        self.parts.iter().filter_map(|part| match part {
            Part::File { file } => Some(file),
            Part::Text { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
}

impl ChatSession {
    /// Builds a session titled after its first user message.
    pub fn new(id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            id: id.into(),
            title: Self::derive_title(&messages),
            messages,
        }
    }

    /// Title from the first user message: its first text part, else its
    /// first attachment's name, truncated to [`TITLE_LEN`] characters.
    /// Empty candidates are skipped.
    pub fn derive_title(messages: &[Message]) -> String {
        let Some(first) = messages.iter().find(|m| m.role == Role::User) else {
            return FALLBACK_TITLE.to_string();
        };

        let text = first.parts.iter().find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            Part::File { .. } => None,
        });
        let file = first.attachments().next().map(|f| f.name.as_str());

        [text, file]
            .into_iter()
            .flatten()
            .map(|s| s.chars().take(TITLE_LEN).collect::<String>())
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(name: &str) -> Part {
        Part::File {
            file: FileAttachment {
                name: name.into(),
                mime_type: "application/pdf".into(),
                data: Some("JVBERi0=".into()),
            },
        }
    }

    #[test]
    fn deserializes_browser_format() {
        let json = r#"{
            "role": "user",
            "parts": [
                {"type": "text", "text": "Check my rider"},
                {"type": "file", "file": {"name": "rider.pdf", "mimeType": "application/pdf"}}
            ],
            "timestamp": 1718000000000
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.combined_text(), "Check my rider");
        assert_eq!(message.attachments().next().unwrap().name, "rider.pdf");
        assert_eq!(message.timestamp, 1_718_000_000_000);
    }

    #[test]
    fn combined_text_joins_text_parts() {
        let message = Message {
            role: Role::Model,
            parts: vec![
                Part::Text { text: "one".into() },
                file("x.pdf"),
                Part::Text { text: "two".into() },
            ],
            timestamp: 0,
        };
        assert_eq!(message.combined_text(), "one\ntwo");
    }

    #[test]
    fn title_from_first_user_text() {
        let messages = vec![
            Message::text(Role::Model, "Welcome!", 1),
            Message::text(
                Role::User,
                "How do I register my songs with a PRO and get paid?",
                2,
            ),
        ];
        assert_eq!(
            ChatSession::derive_title(&messages),
            "How do I register my songs with a PRO an"
        );
    }

    #[test]
    fn title_falls_back_to_attachment_then_default() {
        let with_file = vec![Message {
            role: Role::User,
            parts: vec![Part::Text { text: String::new() }, file("budget.xlsx")],
            timestamp: 0,
        }];
        assert_eq!(ChatSession::derive_title(&with_file), "budget.xlsx");
        assert_eq!(ChatSession::derive_title(&[]), FALLBACK_TITLE);
        assert_eq!(
            ChatSession::derive_title(&[Message::text(Role::Model, "hi", 0)]),
            FALLBACK_TITLE
        );
    }

    #[test]
    fn new_session_derives_title() {
        let session = ChatSession::new("42", vec![Message::text(Role::User, "🎸 Tour plan", 0)]);
        assert_eq!(session.title, "🎸 Tour plan");
        assert_eq!(session.id, "42");
    }
}
