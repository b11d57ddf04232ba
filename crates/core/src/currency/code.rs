//! Target currency whitelist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed source currency for every conversion.
pub const BASE_CURRENCY: &str = "USD";

/// Target currencies the form accepts.
///
/// The whitelist is closed: parsing anything else fails, so a `Currency`
/// value is always convertible and always has a fallback rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Canadian dollar.
    Cad,
    /// Polish zloty.
    Pln,
}

impl Currency {
    /// All whitelisted target currencies, in form display order.
    pub const ALL: [Self; 4] = [Self::Eur, Self::Gbp, Self::Cad, Self::Pln];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Pln => "PLN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a currency code is outside the whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency;

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Parses a code case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "CAD" => Ok(Self::Cad),
            "PLN" => Ok(Self::Pln),
            _ => Err(UnknownCurrency),
        }
    }
}
