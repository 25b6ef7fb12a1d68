//! Liveness endpoint.

use axum::{routing::get, Router};

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// Router exposing `GET /health`, usable with any state type.
pub fn health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
