//! Email and thread routes.

use axum::Json;
use axum::extract::{Path, State};
use maildeck_core::{Email, EmailId, Error, Store};

use super::DEMO_USER;
use crate::error::{ApiError, parse_id};

/// `GET /api/emails` - the demo user's inbox, newest first.
pub(crate) async fn list(State(store): State<Store>) -> Result<Json<Vec<Email>>, ApiError> {
    Ok(Json(store.emails().list_for_user(DEMO_USER).await?))
}

/// `GET /api/emails/{id}` - one email, marked read on fetch.
///
/// Returns the updated record, so consecutive fetches agree on the read
/// flag.
pub(crate) async fn get_one(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Email>, ApiError> {
    let id = EmailId::new(parse_id(&id, "email")?);
    let email = store
        .emails()
        .mark_read(id)
        .await?
        .ok_or_else(|| Error::not_found("Email", id.0))?;
    Ok(Json(email))
}

/// `GET /api/threads/{threadId}` - a conversation, oldest first.
///
/// Unknown thread identifiers yield an empty list, not an error.
pub(crate) async fn thread(
    State(store): State<Store>,
    Path(thread_id): Path<String>,
) -> Result<Json<Vec<Email>>, ApiError> {
    Ok(Json(store.emails().get_thread(&thread_id).await?))
}
