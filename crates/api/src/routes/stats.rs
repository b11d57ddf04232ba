//! Placeholder API endpoints.
//!
//! `/api/trades` and `/api/stats` return fixed payloads; no counters are
//! kept anywhere (conversions are stateless and unrecorded).

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

/// GET `/api/trades` - Always an empty list.
async fn get_trades() -> Json<Value> {
    Json(json!([]))
}

/// GET `/api/stats` - Static stats payload.
async fn get_stats() -> Json<Value> {
    Json(json!({
        "total_conversions": 0,
        "most_popular_currency": "EUR",
        "today_conversions": 0
    }))
}

/// Creates the placeholder API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/trades", get(get_trades))
        .route("/api/stats", get(get_stats))
}
