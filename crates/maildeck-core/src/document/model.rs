//! Document model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl DocumentId {
    /// Create a new document ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document attached to the demo workspace.
///
/// Immutable after seeding in the demo flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier.
    pub id: DocumentId,
    /// Owning user.
    pub user_id: UserId,
    /// File name, e.g. "Meeting Notes.docx".
    pub name: String,
    /// File extension tag, e.g. "docx".
    #[serde(rename = "type")]
    pub kind: String,
    /// Short description.
    pub description: Option<String>,
    /// Document date.
    pub date: DateTime<Utc>,
    /// Content blob.
    pub content: Option<String>,
    /// Tag strings.
    pub tags: Vec<String>,
}

/// Fields for creating a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    /// Owning user.
    pub user_id: UserId,
    /// File name.
    pub name: String,
    /// File extension tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short description.
    pub description: Option<String>,
    /// Document date.
    pub date: DateTime<Utc>,
    /// Content blob.
    pub content: Option<String>,
    /// Tag strings.
    pub tags: Vec<String>,
}

/// Partial update for a document. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    /// New file name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
}
