//! Request validation and conversion math.

pub mod request;
pub mod result;

pub use request::{ConversionRequest, ValidationError};
pub use result::ConversionResult;
