//! API routes module

pub mod error;
pub mod health;
pub mod send;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/send", post(send::send_email))
        .merge(health::router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Fallback for paths this service does not serve, regardless of method.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Endpoint not found")
}

/// Fallback for known paths hit with the wrong method.
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
