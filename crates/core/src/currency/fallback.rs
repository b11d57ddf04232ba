//! Static fallback rates.
//!
//! Used whenever the remote rate-quote service fails. These are demo
//! constants, not live market data; they are documented values, not a cache.

use rust_decimal::Decimal;

use super::Currency;

/// Returns the built-in USD rate for `to`.
///
/// The whitelist is an enum, so every target currency has an entry and no
/// "unknown currency defaults to 1.0" branch can be reached.
#[must_use]
pub fn fallback_rate(to: Currency) -> Decimal {
    match to {
        Currency::Eur => Decimal::new(85, 2),  // 0.85
        Currency::Gbp => Decimal::new(73, 2),  // 0.73
        Currency::Cad => Decimal::new(125, 2), // 1.25
        Currency::Pln => Decimal::new(40, 1),  // 4.0
    }
}
