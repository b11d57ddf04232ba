//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod convert;
pub mod health;
pub mod metrics;
pub mod stats;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(convert::routes())
        .merge(health::routes())
        .merge(metrics::routes())
        .merge(stats::routes())
}
