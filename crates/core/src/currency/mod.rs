//! Currency whitelist and exchange rate resolution.

pub mod code;
pub mod fallback;
pub mod provider;
pub mod resolver;

pub use code::{BASE_CURRENCY, Currency};
pub use fallback::fallback_rate;
pub use provider::{RateError, RateProvider};
pub use resolver::{RateResolver, RateSource, ResolvedRate};
