//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is built on statrs's complementary error function, which is
//! accurate to better than 1e-10 absolute error over the whole real line.
//! Polynomial shortcuts such as Abramowitz-Stegun 7.1.26 (max error 1.5e-7)
//! are not good enough here: put-call parity is asserted at 1e-9.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) via `Phi(x) = erfc(-x / sqrt(2)) / 2`.
///
/// Infinite arguments are well-defined: `norm_cdf(f64::INFINITY) == 1.0`
/// and `norm_cdf(f64::NEG_INFINITY) == 0.0`, which the analytic model
/// relies on for its expired-option diagnostics.
///
/// # Examples
/// ```
/// use pricing_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

/// Standard normal probability density function.
///
/// Computes `phi(x) = exp(-x^2 / 2) / sqrt(2 * pi)`.
///
/// # Examples
/// ```
/// use pricing_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
