//! Reply model types.

use serde::{Deserialize, Serialize};

use crate::email::EmailId;

/// Unique identifier for a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyId(pub i64);

impl ReplyId {
    /// Create a new reply ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReplyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drafted (or sent) reply to one email.
///
/// At most one reply exists per email. A reply starts as a draft and
/// transitions to sent exactly once; sent is terminal in the demo flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Unique identifier.
    pub id: ReplyId,
    /// The email this reply answers.
    pub email_id: EmailId,
    /// Reply body text.
    pub content: String,
    /// Subject line.
    pub subject: String,
    /// Tone tag, e.g. "Formal".
    pub tone: Option<String>,
    /// Length tag, e.g. "Concise".
    pub length: Option<String>,
    /// Whether the reply is still a draft.
    pub is_draft: bool,
}

/// Fields for creating a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    /// The email this reply answers.
    pub email_id: EmailId,
    /// Reply body text.
    pub content: String,
    /// Subject line.
    pub subject: String,
    /// Tone tag.
    pub tone: Option<String>,
    /// Length tag.
    pub length: Option<String>,
    /// Whether the reply starts as a draft.
    pub is_draft: bool,
}

/// Partial update for a reply. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPatch {
    /// New body text.
    pub content: Option<String>,
    /// New subject line.
    pub subject: Option<String>,
    /// New draft flag.
    pub is_draft: Option<bool>,
}
