//! # Pricing Models (Model Layer)
//!
//! Three independent, stateless valuation models for European/American
//! vanilla options, all consuming the shared
//! [`MarketParams`](pricing_core::types::MarketParams) tuple:
//!
//! - [`analytic::AnalyticModel`] - closed-form Black-Scholes-Merton
//! - [`lattice::LatticeModel`] - Cox-Ross-Rubinstein binomial tree with
//!   optional American early exercise for puts
//! - [`simulation::SimulationModel`] - Monte Carlo estimator under
//!   risk-neutral geometric Brownian motion
//!
//! No model depends on another; the presentation layer invokes each by
//! name with the same raw market parameters and compares the results.
//!
//! ## Design Principles
//!
//! - **Construction-time validation**: every invalid or degenerate input is
//!   rejected with a typed error before any arithmetic can produce NaN/inf
//! - **Pure pricing calls**: `call_price()` / `put_price()` are `&self`
//!   methods returning values; no result caches are mutated
//! - **Injectable randomness**: the simulation model accepts a seeded
//!   generator so tests are reproducible

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytic;
pub mod error;
pub mod lattice;
pub mod simulation;

pub use analytic::AnalyticModel;
pub use error::ModelError;
pub use lattice::LatticeModel;
pub use simulation::{MonteCarloEstimate, SimRng, SimulationModel};
