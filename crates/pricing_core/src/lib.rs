//! # pricing_core: Shared Foundation for the Option Pricing Engine
//!
//! ## Core Layer Role
//!
//! pricing_core is the bottom layer of the two-layer workspace, providing:
//! - The market parameter value type shared by every model (`types::MarketParams`)
//! - Error types: `PricingError`, `ParamError` (`types::error`)
//! - Standard normal distribution helpers (`math::distributions`)
//!
//! The valuation models themselves live in `pricing_models`; this crate has
//! no dependency on them.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricing_core::math::distributions::norm_cdf;
//! use pricing_core::types::MarketParams;
//!
//! // Shared parameter tuple: spot, strike, volatility, rate, maturity
//! let params = MarketParams::new(100.0, 70.0, 0.2, 0.01, 1.0).unwrap();
//! assert_eq!(params.spot(), 100.0);
//!
//! // Standard normal CDF
//! let p = norm_cdf(0.0);
//! assert!((p - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `MarketParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
