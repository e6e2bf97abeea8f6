//! Highlight model types.

use serde::{Deserialize, Serialize};

use crate::document::DocumentId;

/// Unique identifier for a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightId(pub i64);

impl HighlightId {
    /// Create a new highlight ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HighlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An extracted excerpt from a document, tagged for triage display.
///
/// Many highlights per document; listed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Unique identifier.
    pub id: HighlightId,
    /// Owning document.
    pub document_id: DocumentId,
    /// Short title.
    pub title: String,
    /// Content excerpt.
    pub content: String,
    /// Page number, if known.
    pub page: Option<i64>,
    /// Priority tag, e.g. "High Priority".
    pub priority: Option<String>,
    /// Category tag, e.g. "Decision".
    pub category: Option<String>,
}

/// Fields for creating a highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHighlight {
    /// Owning document.
    pub document_id: DocumentId,
    /// Short title.
    pub title: String,
    /// Content excerpt.
    pub content: String,
    /// Page number, if known.
    pub page: Option<i64>,
    /// Priority tag.
    pub priority: Option<String>,
    /// Category tag.
    pub category: Option<String>,
}

/// Partial update for a highlight. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightPatch {
    /// New title.
    pub title: Option<String>,
    /// New content excerpt.
    pub content: Option<String>,
    /// New priority tag.
    pub priority: Option<String>,
    /// New category tag.
    pub category: Option<String>,
}
