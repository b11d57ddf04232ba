//! Metrics endpoint.
//!
//! A single static plaintext line; there is no metrics pipeline behind it.

use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::AppState;

/// Body served by `/metrics`.
const METRICS_BODY: &str = "# Demo metrics\napp_status 1\n";

/// Metrics handler.
async fn metrics() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], METRICS_BODY)
}

/// Creates the metrics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics))
}
