//! Cambio server
//!
//! Main entry point for the currency-conversion web service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_api::{AppState, create_router};
use cambio_core::currency::RateResolver;
use cambio_rates::QuoteServiceClient;
use cambio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Wire the rate resolver: remote quotes with the static fallback table
    let quote_client =
        QuoteServiceClient::new(&config.rates).context("Failed to build quote client")?;
    let resolver = RateResolver::new(Arc::new(quote_client));
    info!(
        base_url = %config.rates.base_url,
        timeout_secs = config.rates.timeout_secs,
        "Rate-quote client configured"
    );

    // Create application state
    let state = AppState {
        rates: Arc::new(resolver),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
