//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity lookup failed for an identifier that was expected to exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "Email" or "Reply".
        entity: &'static str,
        /// Identifier that did not resolve.
        id: i64,
    },

    /// A request carried missing or malformed fields.
    #[error("{0}")]
    Validation(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Stored timestamp could not be parsed.
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

impl Error {
    /// Shorthand for a not-found error.
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
