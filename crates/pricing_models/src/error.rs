//! Model error types.
//!
//! This module provides structured error handling for model construction.
//! All failure modes are detected at construction time so that pricing
//! calls on a valid model never return NaN or infinity.

use pricing_core::types::{ParamError, PricingError};
use thiserror::Error;

/// Valuation model errors.
///
/// # Variants
/// - `Param`: Market parameter validation failure (forwarded from core)
/// - `DegenerateVolatility`: Zero volatility with positive maturity, which
///   divides by zero in the analytic `d1`/`d2` terms
/// - `DegenerateLattice`: Up and down factors coincide, leaving the
///   risk-neutral probability undefined
/// - `InvalidStepCount`: Lattice step count below one
/// - `InvalidPathCount`: Simulation path count below one
///
/// # Examples
/// ```
/// use pricing_models::error::ModelError;
///
/// let err = ModelError::InvalidStepCount { n_period: 0 };
/// assert!(format!("{}", err).contains("n_period"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Market parameter validation failure.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Zero volatility with positive maturity.
    #[error("Degenerate volatility: sigma = {volatility} with T = {maturity} > 0")]
    DegenerateVolatility {
        /// The degenerate volatility value
        volatility: f64,
        /// The positive maturity it was paired with
        maturity: f64,
    },

    /// Up and down factors coincide (zero volatility or zero maturity).
    #[error("Degenerate lattice: up = {up}, down = {down}")]
    DegenerateLattice {
        /// The computed up factor
        up: f64,
        /// The computed down factor
        down: f64,
    },

    /// Lattice step count below one.
    #[error("Invalid step count: n_period = {n_period} (must be >= 1)")]
    InvalidStepCount {
        /// The invalid step count
        n_period: usize,
    },

    /// Simulation path count below one.
    #[error("Invalid path count: n_simulation = {n_simulation} (must be >= 1)")]
    InvalidPathCount {
        /// The invalid path count
        n_simulation: usize,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Param(e) => e.into(),
            ModelError::DegenerateVolatility { .. } | ModelError::DegenerateLattice { .. } => {
                PricingError::DegenerateInput(err.to_string())
            }
            ModelError::InvalidStepCount { .. } | ModelError::InvalidPathCount { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}
