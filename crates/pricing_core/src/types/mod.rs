//! Core financial types.
//!
//! This module provides:
//! - `params`: The shared market parameter value type (`MarketParams`)
//! - `error`: Structured error types for parameter validation and pricing
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`MarketParams`] from `params`
//! - [`ParamError`], [`PricingError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::{ParamError, PricingError};
pub use params::MarketParams;
