//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParamError`: Errors from market parameter validation
//! - `PricingError`: Top-level errors surfaced to the presentation layer

use std::fmt;

use thiserror::Error;

/// Market parameter validation errors.
///
/// Each variant carries the offending value so the presentation layer can
/// report it back to the user.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidVolatility`: Volatility is negative
/// - `InvalidMaturity`: Time to maturity is negative
///
/// # Examples
/// ```
/// use pricing_core::types::ParamError;
///
/// let err = ParamError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (negative).
    ///
    /// A volatility of exactly zero passes parameter validation; models
    /// whose arithmetic divides by it reject it as degenerate instead.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to maturity (negative).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },
}

/// Categorised pricing errors.
///
/// Top-level error type surfaced across the engine boundary. Model-specific
/// errors convert into this via `From` implementations.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `DegenerateInput`: Parameters that degenerate the model arithmetic
///   (division by zero, undefined probabilities)
///
/// # Examples
/// ```
/// use pricing_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Parameters degenerate the model arithmetic
    DegenerateInput(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<ParamError> for PricingError {
    fn from(err: ParamError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
