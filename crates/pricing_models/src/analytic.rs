//! Closed-form Black-Scholes-Merton pricing.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S*N(d1) - K*exp(-rT)*N(d2)
//! **Put Price**: P = K*exp(-rT)*N(-d2) - S*N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r + sigma^2/2)T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)
//!
//! At expiry (T = 0) the prices collapse to intrinsic value directly; the
//! formula path is never taken, so no large-sentinel approximation of
//! N(+/-inf) is involved.

use pricing_core::math::distributions::norm_cdf;
use pricing_core::types::MarketParams;

use crate::error::ModelError;

/// Black-Scholes-Merton model for European option pricing.
///
/// Constructed once per pricing request from the shared parameter tuple;
/// immutable afterwards. `d1` and `d2` are computed at construction, the
/// prices on demand.
///
/// # Examples
/// ```
/// use pricing_core::types::MarketParams;
/// use pricing_models::analytic::AnalyticModel;
///
/// let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
/// let model = AnalyticModel::new(params).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = model.call_price() - model.put_price()
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticModel {
    params: MarketParams,
    d1: f64,
    d2: f64,
}

impl AnalyticModel {
    /// Creates a new analytic model from validated market parameters.
    ///
    /// # Errors
    /// - `ModelError::DegenerateVolatility` if `volatility == 0` while
    ///   `maturity > 0` (the `d1` denominator would be zero)
    ///
    /// # Examples
    /// ```
    /// use pricing_core::types::MarketParams;
    /// use pricing_models::analytic::AnalyticModel;
    ///
    /// let params = MarketParams::new(100.0, 70.0, 0.2, 0.01, 1.0).unwrap();
    /// assert!(AnalyticModel::new(params).is_ok());
    ///
    /// let degenerate = MarketParams::new(100.0, 70.0, 0.0, 0.01, 1.0).unwrap();
    /// assert!(AnalyticModel::new(degenerate).is_err());
    /// ```
    pub fn new(params: MarketParams) -> Result<Self, ModelError> {
        if params.maturity() > 0.0 && params.volatility() <= 0.0 {
            return Err(ModelError::DegenerateVolatility {
                volatility: params.volatility(),
                maturity: params.maturity(),
            });
        }

        let (d1, d2) = if params.maturity() > 0.0 {
            let vol_sqrt_t = params.volatility() * params.maturity().sqrt();
            let log_moneyness = (params.spot() / params.strike()).ln();
            let drift = (params.rate() + 0.5 * params.volatility() * params.volatility())
                * params.maturity();
            let d1 = (log_moneyness + drift) / vol_sqrt_t;
            (d1, d1 - vol_sqrt_t)
        } else {
            // Expired option. Prices come straight from intrinsic value; d1
            // and d2 only feed the diagnostic accessors, where the infinite
            // limits give the correct step-function N values.
            let d1 = if params.spot() >= params.strike() {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
            (d1, d1)
        };

        Ok(Self { params, d1, d2 })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> MarketParams {
        self.params
    }

    /// Returns the d1 term (`+/-inf` for an expired option).
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns the d2 term, `d1 - sigma*sqrt(T)` whenever T > 0.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Diagnostic: N(d1), the call delta.
    #[inline]
    pub fn n_d1(&self) -> f64 {
        norm_cdf(self.d1)
    }

    /// Diagnostic: N(d2), the risk-neutral probability of the call
    /// finishing in the money.
    #[inline]
    pub fn n_d2(&self) -> f64 {
        norm_cdf(self.d2)
    }

    /// Diagnostic: N(-d2), the risk-neutral probability of the put
    /// finishing in the money.
    #[inline]
    pub fn n_neg_d2(&self) -> f64 {
        norm_cdf(-self.d2)
    }

    /// Computes the European call price.
    ///
    /// `C = S*N(d1) - K*exp(-rT)*N(d2)`; exact intrinsic value at T = 0.
    #[inline]
    pub fn call_price(&self) -> f64 {
        if self.params.maturity() == 0.0 {
            return self.params.call_intrinsic();
        }

        let discount = self.params.discount_factor();
        self.params.spot() * norm_cdf(self.d1)
            - self.params.strike() * discount * norm_cdf(self.d2)
    }

    /// Computes the European put price.
    ///
    /// `P = K*exp(-rT)*N(-d2) - S*N(-d1)`; exact intrinsic value at T = 0.
    #[inline]
    pub fn put_price(&self) -> f64 {
        if self.params.maturity() == 0.0 {
            return self.params.put_intrinsic();
        }

        let discount = self.params.discount_factor();
        self.params.strike() * discount * norm_cdf(-self.d2)
            - self.params.spot() * norm_cdf(-self.d1)
    }
}
