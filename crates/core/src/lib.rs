//! Core conversion logic for Cambio.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Currency whitelist and rate resolution
//! - `conversion` - Request validation and conversion math

pub mod conversion;
pub mod currency;
