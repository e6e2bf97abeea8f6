//! Email model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Unique identifier for an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    /// Create a new email ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A received or sent email.
///
/// Emails sharing a `thread_id` belong to one conversation regardless of
/// "Re: " prefixes on their subject lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Owning user.
    pub user_id: UserId,
    /// Sender display name.
    pub sender: String,
    /// Sender email address.
    pub sender_email: String,
    /// Recipient addresses, in order.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Full body text.
    pub body: String,
    /// Short preview for list views.
    pub preview: String,
    /// When the email was sent.
    pub timestamp: DateTime<Utc>,
    /// Whether the email has been opened.
    pub is_read: bool,
    /// Label tags.
    pub labels: Vec<String>,
    /// Conversation identifier, if part of a thread.
    pub thread_id: Option<String>,
}

impl Email {
    /// Returns the sender's first name, falling back to the full display
    /// name when it has no spaces.
    #[must_use]
    pub fn sender_first_name(&self) -> &str {
        self.sender.split_whitespace().next().unwrap_or(&self.sender)
    }
}

/// Fields for creating an email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmail {
    /// Owning user.
    pub user_id: UserId,
    /// Sender display name.
    pub sender: String,
    /// Sender email address.
    pub sender_email: String,
    /// Recipient addresses, in order.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Full body text.
    pub body: String,
    /// Short preview for list views.
    pub preview: String,
    /// When the email was sent.
    pub timestamp: DateTime<Utc>,
    /// Whether the email has been opened.
    pub is_read: bool,
    /// Label tags.
    pub labels: Vec<String>,
    /// Conversation identifier, if part of a thread.
    pub thread_id: Option<String>,
}

/// Partial update for an email.
///
/// `None` fields are left untouched, so callers cannot accidentally clobber
/// values they did not mean to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPatch {
    /// New read flag.
    pub is_read: Option<bool>,
    /// Replacement label set.
    pub labels: Option<Vec<String>>,
}

impl EmailPatch {
    /// Patch that marks the email read.
    #[must_use]
    pub fn read() -> Self {
        Self {
            is_read: Some(true),
            ..Self::default()
        }
    }
}
