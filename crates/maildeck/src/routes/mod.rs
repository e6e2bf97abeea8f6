//! REST routes for the demo API.

mod documents;
mod emails;
mod replies;

use axum::Router;
use axum::routing::{get, post};
use maildeck_core::{Store, UserId};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// All "list mine" queries run as this fixed demo user.
pub(crate) const DEMO_USER: UserId = UserId::new(1);

/// Build the API router over the given store.
///
/// The store is injected rather than global so tests can run each case
/// against an isolated instance.
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/api/emails", get(emails::list))
        .route("/api/emails/:id", get(emails::get_one))
        .route("/api/threads/:thread_id", get(emails::thread))
        .route("/api/documents", get(documents::list))
        .route("/api/documents/:id", get(documents::get_one))
        .route("/api/documents/:id/highlights", get(documents::highlights))
        .route(
            "/api/emails/:id/reply",
            get(replies::get_or_generate).post(replies::save),
        )
        .route("/api/emails/:id/send", post(replies::send_reply))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) mod testing {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use maildeck_core::Store;

    /// Router over a freshly seeded store.
    pub(crate) async fn seeded_app() -> Router {
        super::router(Store::seeded().await.expect("seeded store"))
    }

    /// Router over an empty store.
    pub(crate) async fn empty_app() -> (Router, Store) {
        let store = Store::in_memory().await.expect("in-memory store");
        (super::router(store.clone()), store)
    }

    pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        send(app, request).await
    }

    pub(crate) async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        send(app, request).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}
