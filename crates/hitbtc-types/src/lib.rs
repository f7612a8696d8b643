//! Shared types for the HitBTC REST API v2
//!
//! This crate provides the contract data used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiErrorKind`] - Error category derived from an HTTP status code
//! - [`Params`] - Request parameter map (query string or form body)
//! - [`WriteOperation`] - State-changing calls and their required keys
//! - [`Side`], [`OrderType`], [`TimeInForce`], [`TransferType`], [`CandlePeriod`] - Wire enums

pub mod enums;
pub mod error_codes;
pub mod operations;
pub mod params;

// Re-export commonly used types
pub use enums::*;
pub use error_codes::*;
pub use operations::*;
pub use params::*;
