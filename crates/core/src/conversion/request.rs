//! Form input validation.
//!
//! A `ConversionRequest` can only be built through [`ConversionRequest::parse`],
//! so holding one proves the amount is in range and the currency whitelisted.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::Currency;

/// Largest accepted source amount, in USD.
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Validation failures, with the exact messages shown in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount or currency field empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Amount is not a decimal number.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// Amount is zero or negative.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Amount exceeds the accepted maximum.
    #[error("Amount too large")]
    AmountTooLarge,

    /// Currency is outside the whitelist.
    #[error("Invalid currency selected")]
    UnknownCurrency,
}

/// A validated conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Source amount in USD, `0 < amount <= 1_000_000`.
    pub amount: Decimal,
    /// Whitelisted target currency.
    pub to: Currency,
}

impl ConversionRequest {
    /// Validates raw form input.
    ///
    /// Checks run in a fixed order and the first failure wins: empty fields,
    /// then numeric parse, positivity, upper bound, currency whitelist. No
    /// network traffic happens here or on any failure path.
    pub fn parse(amount: &str, currency: &str) -> Result<Self, ValidationError> {
        let amount = amount.trim();
        let currency = currency.trim();

        if amount.is_empty() || currency.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let amount = Decimal::from_str(amount).map_err(|_| ValidationError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge);
        }

        let to = currency
            .parse::<Currency>()
            .map_err(|_| ValidationError::UnknownCurrency)?;

        Ok(Self { amount, to })
    }
}
