//! Reply lifecycle routes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use maildeck_core::{EmailId, Reply, Store};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, parse_id};

/// Body for saving a drafted reply.
///
/// All fields optional at the wire level; missing content or subject is a
/// validation failure, reported with a message rather than a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveReplyRequest {
    content: Option<String>,
    subject: Option<String>,
    is_draft: Option<bool>,
}

/// Response to a send: confirmation message plus the sent reply.
#[derive(Debug, Serialize)]
pub(crate) struct SendResponse {
    message: &'static str,
    reply: Reply,
}

/// `GET /api/emails/{id}/reply` - the email's reply, generated as a draft
/// on first request.
///
/// The generation side effect on a GET is kept deliberately for wire
/// compatibility with the original client.
pub(crate) async fn get_or_generate(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Reply>, ApiError> {
    let id = EmailId::new(parse_id(&id, "email")?);
    Ok(Json(store.reply_service().ensure_reply(id).await?))
}

/// `POST /api/emails/{id}/reply` - save draft content and subject.
///
/// 201 when the save created the reply, 200 when it updated an existing
/// one.
pub(crate) async fn save(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(body): Json<SaveReplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EmailId::new(parse_id(&id, "email")?);
    let saved = store
        .reply_service()
        .save_draft(
            id,
            body.content.as_deref().unwrap_or(""),
            body.subject.as_deref().unwrap_or(""),
            body.is_draft,
        )
        .await?;

    let status = if saved.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(saved.reply)))
}

/// `POST /api/emails/{id}/send` - transition the reply from draft to sent.
///
/// State change only; nothing is delivered.
pub(crate) async fn send_reply(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<SendResponse>, ApiError> {
    let id = EmailId::new(parse_id(&id, "email")?);
    let reply = store.reply_service().send(id).await?;
    Ok(Json(SendResponse {
        message: "Email sent successfully",
        reply,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::routes::testing::{empty_app, get, post_json, seeded_app};
    use axum::http::StatusCode;
    use chrono::Utc;
    use maildeck_core::{NewEmail, UserId};
    use serde_json::json;

    async fn app_with_one_email() -> axum::Router {
        let (app, store) = empty_app().await;
        store
            .emails()
            .create(&NewEmail {
                user_id: UserId::new(1),
                sender: "Jane Doe".into(),
                sender_email: "jane.doe@example.com".into(),
                recipients: vec!["demo@example.com".into()],
                subject: "Hello".into(),
                body: "Hi there".into(),
                preview: "Hi there".into(),
                timestamp: Utc::now(),
                is_read: false,
                labels: Vec::new(),
                thread_id: None,
            })
            .await
            .unwrap();
        app
    }

    #[tokio::test]
    async fn test_draft_edit_send_scenario() {
        let app = app_with_one_email().await;

        // First fetch generates a templated draft.
        let (status, draft) = get(app.clone(), "/api/emails/1/reply").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(draft["subject"], "Re: Hello");
        assert!(draft["content"].as_str().unwrap().contains("Hello Jane,"));
        assert_eq!(draft["isDraft"], true);

        // Edit the draft.
        let (status, saved) = post_json(
            app.clone(),
            "/api/emails/1/reply",
            &json!({"content": "Thanks!", "subject": "Re: Hello"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["content"], "Thanks!");

        // Send it.
        let (status, sent) = post_json(app, "/api/emails/1/send", &json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sent["message"], "Email sent successfully");
        assert_eq!(sent["reply"]["isDraft"], false);
    }

    #[tokio::test]
    async fn test_repeated_get_returns_the_same_reply() {
        let app = app_with_one_email().await;

        let (_, first) = get(app.clone(), "/api/emails/1/reply").await;
        let (_, second) = get(app, "/api/emails/1/reply").await;
        assert_eq!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_reply_for_missing_email_is_404() {
        let app = app_with_one_email().await;
        let (status, body) = get(app, "/api/emails/42/reply").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Email not found");
    }

    #[tokio::test]
    async fn test_save_without_content_is_400() {
        let app = app_with_one_email().await;
        let (status, body) = post_json(
            app,
            "/api/emails/1/reply",
            &json!({"subject": "Re: Hello"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Content and subject are required");
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let app = app_with_one_email().await;

        let (status, _) = post_json(
            app.clone(),
            "/api/emails/1/reply",
            &json!({"content": "First body", "subject": "Re: Hello"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, updated) = post_json(
            app,
            "/api/emails/1/reply",
            &json!({"content": "Second body", "subject": "Re: Hello"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["content"], "Second body");
    }

    #[tokio::test]
    async fn test_send_without_reply_is_404() {
        let app = seeded_app().await;

        // Email 1 is seeded without a reply.
        let (status, body) = post_json(app, "/api/emails/1/send", &json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Reply not found");
    }

    #[tokio::test]
    async fn test_seeded_draft_is_returned_unchanged() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/emails/2/reply").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject"], "Re: Meeting notes from yesterday's call");
        assert_eq!(body["isDraft"], true);
    }

    #[tokio::test]
    async fn test_send_malformed_id_is_400() {
        let app = seeded_app().await;
        let (status, body) = post_json(app, "/api/emails/nope/send", &json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email ID");
    }
}
