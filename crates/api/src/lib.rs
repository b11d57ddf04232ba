//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The form page and conversion endpoint
//! - Health, metrics, and placeholder API routes
//! - JSON error responses for unknown paths
//! - The shared application state

pub mod error;
pub mod pages;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cambio_core::currency::RateResolver;

/// Application state shared across handlers.
///
/// The resolver is immutable; handlers never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Rate resolver (remote quote with static fallback).
    pub rates: Arc<RateResolver>,
}


/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
