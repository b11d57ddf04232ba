//! Quote service client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use cambio_core::currency::{Currency, RateError, RateProvider};
use cambio_shared::config::RatesConfig;

/// Shape of the quote endpoint's response. Only the rate table is read.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, Decimal>,
}

/// Client for the rate-quote service.
///
/// One bounded request per call; retries and fallbacks are the resolver's
/// concern, not this client's.
pub struct QuoteServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl QuoteServiceClient {
    /// Builds a client with the configured base URL, timeout, and optional
    /// API key.
    pub fn new(config: &RatesConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cambio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl RateProvider for QuoteServiceClient {
    async fn fetch_rate(&self, from: &str, to: Currency) -> Result<Decimal, RateError> {
        let url = format!("{}/v4/latest/{from}", self.base_url);
        debug!(url = %url, "requesting rate quote");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("access_key", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| RateError::Request(e.to_string()))?;

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::MalformedResponse(e.to_string()))?;

        let rate = body
            .rates
            .get(to.code())
            .copied()
            .ok_or(RateError::MissingRate(to))?;

        if rate <= Decimal::ZERO {
            return Err(RateError::UnusableRate(to, rate));
        }

        Ok(rate)
    }
}
