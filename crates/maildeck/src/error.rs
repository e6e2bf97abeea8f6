//! API error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

/// Errors surfaced at the API boundary.
///
/// Three kinds, per the demo's taxonomy: bad input (400), unresolved
/// identifiers (404), and everything else (500, generic message only).
#[derive(Debug)]
pub enum ApiError {
    /// Malformed identifier or missing required field.
    Validation(String),
    /// An identifier did not resolve to an entity.
    NotFound(String),
    /// Unexpected failure; detail is logged, never returned.
    Internal,
}

impl ApiError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<maildeck_core::Error> for ApiError {
    fn from(err: maildeck_core::Error) -> Self {
        match err {
            maildeck_core::Error::NotFound { entity, .. } => {
                Self::NotFound(format!("{entity} not found"))
            }
            maildeck_core::Error::Validation(message) => Self::Validation(message),
            other => {
                error!("request failed: {other}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Parse a numeric path identifier, reporting failures with a
/// human-readable message instead of a bare 400.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("Invalid {what} ID")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7", "email").unwrap(), 7);
        assert!(matches!(parse_id("abc", "email"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_id("", "email"), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_core_not_found_maps_to_entity_message() {
        let err: ApiError = maildeck_core::Error::not_found("Email", 42).into();
        match err {
            ApiError::NotFound(message) => assert_eq!(message, "Email not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
