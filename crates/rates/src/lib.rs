//! HTTP client for the remote rate-quote service.
//!
//! Implements `cambio_core::currency::RateProvider` against the
//! `/v4/latest/{currency}` quote endpoint. All failure handling policy
//! (fallback table, logging) lives in the core resolver; this crate only
//! reports what went wrong.

pub mod client;

pub use client::QuoteServiceClient;
