//! Rate provider abstraction.
//!
//! The HTTP client implementing this trait lives in `cambio-rates`; the core
//! crate only knows the contract and its failure modes.

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use super::Currency;

/// Failure modes of a single rate quote.
///
/// None of these reach the user: the resolver downgrades every variant to the
/// fallback table.
#[derive(Debug, Error)]
pub enum RateError {
    /// The request could not be completed (connect error, timeout, non-2xx).
    #[error("quote request failed: {0}")]
    Request(String),

    /// The response body could not be decoded.
    #[error("quote response malformed: {0}")]
    MalformedResponse(String),

    /// The response decoded but carried no rate for the target currency.
    #[error("no rate for {0} in quote response")]
    MissingRate(Currency),

    /// The response carried a rate that cannot be used for conversion.
    #[error("unusable rate {1} for {0}")]
    UnusableRate(Currency, Decimal),
}

/// Fetches a single exchange rate quote.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Quotes the rate `1 from = rate to`. One attempt, bounded by the
    /// provider's timeout; no retries.
    async fn fetch_rate(&self, from: &str, to: Currency) -> Result<Decimal, RateError>;
}
