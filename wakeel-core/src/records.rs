//! Remote list records and the seed data shown when retrieval fails.

use crate::listing::{ListRecord, StarRating};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPECIALTY: &str = "استشارات قانونية";
pub const DEFAULT_LAST_MESSAGE: &str = "رسالة";
pub const DEFAULT_CHAT_TIME: &str = "11:01";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

// ============================================================================
// LAWYERS
// ============================================================================

/// A lawyer profile summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawyer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

impl Lawyer {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>, rating: i64) -> Self {
        Self {
            name: name.into(),
            specialty: Some(specialty.into()),
            rating: Some(rating),
        }
    }

    pub fn specialty_label(&self) -> &str {
        non_empty(&self.specialty).unwrap_or(DEFAULT_SPECIALTY)
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    pub fn seed() -> Vec<Lawyer> {
        vec![
            Lawyer::new("المحامي أحمد نواف", "استشارات تجارية", 4),
            Lawyer::new("المحامية دانا خطاب", "احوال شخصية", 5),
            Lawyer::new("المحامي ليث الرواشدة", "تنفيذ ومدني", 3),
        ]
    }
}

impl ListRecord for Lawyer {
    const ENDPOINT: &'static str = "/api/lawyers";

    fn display_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.specialty_label()]
    }
}

// ============================================================================
// CHATS
// ============================================================================

/// The latest state of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

impl ChatSummary {
    pub fn new(
        name: impl Into<String>,
        last_message: impl Into<String>,
        time: impl Into<String>,
        rating: i64,
    ) -> Self {
        Self {
            name: name.into(),
            last_message: Some(last_message.into()),
            time: Some(time.into()),
            rating: Some(rating),
        }
    }

    pub fn last_message_label(&self) -> &str {
        non_empty(&self.last_message).unwrap_or(DEFAULT_LAST_MESSAGE)
    }

    pub fn time_label(&self) -> &str {
        non_empty(&self.time).unwrap_or(DEFAULT_CHAT_TIME)
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    pub fn seed() -> Vec<ChatSummary> {
        vec![
            ChatSummary::new("lawyer 1", "Hello", "11:01", 5),
            ChatSummary::new("lawyer 2", "موعد الجلسة", "10:44", 4),
            ChatSummary::new("lawyer 3", "تم الاستلام", "09:20", 5),
        ]
    }
}

impl ListRecord for ChatSummary {
    const ENDPOINT: &'static str = "/api/chats";

    fn display_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.last_message_label(),
            self.time_label(),
        ]
    }
}

// ============================================================================
// DOCUMENTS
// ============================================================================

/// A stored document entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Document {
    pub fn new(title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
        }
    }

    pub fn seed() -> Vec<Document> {
        vec![
            Document::new("file Class A", "Doex"),
            Document::new("file Class B", "PDF"),
            Document::new("file Class A", "Doex"),
            Document::new("file Class B", "PDF"),
        ]
    }
}

impl ListRecord for Document {
    const ENDPOINT: &'static str = "/api/documents";

    fn display_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.kind.as_str()]
    }
}
