//! Conversion math and result formatting.
//!
//! Rounding matches the display contract: converted amounts carry exactly
//! two decimal places, rounded half to even.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::{BASE_CURRENCY, Currency};

use super::ConversionRequest;

/// Outcome of one conversion. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionResult {
    /// Source amount in USD.
    pub amount: Decimal,
    /// Target currency.
    pub to: Currency,
    /// Rate that was applied.
    pub rate: Decimal,
    /// `amount * rate`, rounded to 2 decimal places.
    pub converted: Decimal,
}

impl ConversionResult {
    /// Multiplies and rounds half-to-even at 2 decimal places.
    #[must_use]
    pub fn compute(request: &ConversionRequest, rate: Decimal) -> Self {
        let converted =
            (request.amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        Self {
            amount: request.amount,
            to: request.to,
            rate,
            converted,
        }
    }
}

impl fmt::Display for ConversionResult {
    /// Renders the form result line, e.g. `100.0 USD = 85.00 EUR`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {BASE_CURRENCY} = {:.2} {}",
            format_amount(self.amount),
            self.converted,
            self.to
        )
    }
}

/// Formats a source amount with trailing zeros trimmed but at least one
/// decimal place, so `100` renders as `100.0` and `42.50` as `42.5`.
fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
