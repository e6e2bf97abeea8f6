//! Document and highlight routes.

use axum::Json;
use axum::extract::{Path, State};
use maildeck_core::{Document, DocumentId, Error, Highlight, Store};

use super::DEMO_USER;
use crate::error::{ApiError, parse_id};

/// `GET /api/documents` - the demo user's documents, newest first.
pub(crate) async fn list(State(store): State<Store>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(store.documents().list_for_user(DEMO_USER).await?))
}

/// `GET /api/documents/{id}` - one document.
pub(crate) async fn get_one(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let id = DocumentId::new(parse_id(&id, "document")?);
    let document = store
        .documents()
        .get(id)
        .await?
        .ok_or_else(|| Error::not_found("Document", id.0))?;
    Ok(Json(document))
}

/// `GET /api/documents/{id}/highlights` - a document's highlights in
/// insertion order.
pub(crate) async fn highlights(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Highlight>>, ApiError> {
    let id = DocumentId::new(parse_id(&id, "document")?);
    Ok(Json(store.highlights().list_for_document(id).await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::routes::testing::{get, seeded_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_returns_documents_newest_first() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents").await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            ["Meeting Notes.docx", "Project Timeline.xlsx", "Requirements Doc.pdf"]
        );
    }

    #[tokio::test]
    async fn test_get_document() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Meeting Notes.docx");
        assert_eq!(body["type"], "docx");
    }

    #[tokio::test]
    async fn test_get_unknown_document_is_404() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Document not found");
    }

    #[tokio::test]
    async fn test_get_malformed_document_id_is_400() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents/xyz").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid document ID");
    }

    #[tokio::test]
    async fn test_highlights_keep_insertion_order() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents/1/highlights").await;

        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            ["Key Decision Point", "Resource Allocation", "Action Item", "Client Requirement"]
        );
    }

    #[tokio::test]
    async fn test_highlights_of_unknown_document_is_empty_list() {
        let app = seeded_app().await;
        let (status, body) = get(app, "/api/documents/99/highlights").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 0);
    }
}
