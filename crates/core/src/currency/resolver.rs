//! Two-tier rate resolution: remote quote, then static fallback.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{BASE_CURRENCY, Currency, RateProvider, fallback_rate};
use crate::conversion::{ConversionRequest, ConversionResult};

/// Where a resolved rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// Quoted by the remote rate service.
    Remote,
    /// Taken from the built-in fallback table.
    Fallback,
}

/// A USD rate for one target currency, tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate {
    /// Exchange rate (1 USD = `rate` target currency).
    pub rate: Decimal,
    /// Provenance of the rate.
    pub source: RateSource,
}

/// Resolves rates and performs conversions.
///
/// Stateless apart from the provider handle; safe to share across requests.
pub struct RateResolver {
    provider: Arc<dyn RateProvider>,
}

impl RateResolver {
    /// Creates a resolver backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Resolves the USD rate for `to`.
    ///
    /// A single remote attempt; any failure is absorbed into the fallback
    /// table and logged, never propagated.
    pub async fn resolve(&self, to: Currency) -> ResolvedRate {
        match self.provider.fetch_rate(BASE_CURRENCY, to).await {
            Ok(rate) => {
                debug!(currency = %to, rate = %rate, "remote rate quote");
                ResolvedRate {
                    rate,
                    source: RateSource::Remote,
                }
            }
            Err(e) => {
                warn!(currency = %to, error = %e, "rate quote failed, using fallback table");
                ResolvedRate {
                    rate: fallback_rate(to),
                    source: RateSource::Fallback,
                }
            }
        }
    }

    /// Converts a validated request: one rate lookup, then multiply and
    /// round to 2 decimal places.
    pub async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let resolved = self.resolve(request.to).await;
        ConversionResult::compute(request, resolved.rate)
    }
}
