//! Shared market parameters.
//!
//! All three valuation models consume the same immutable parameter tuple;
//! no trait hierarchy is needed because the presentation layer invokes each
//! model by name.

use super::error::ParamError;

/// Market parameters shared by every valuation model.
///
/// A plain immutable value struct: spot price, strike, annualised
/// volatility, annualised risk-free rate, and time to maturity in years.
/// Volatility and rate are fractional decimals (0.20, not 20); converting
/// user-facing percentages is the caller's responsibility.
///
/// Validation happens once at construction; a successfully constructed
/// `MarketParams` satisfies `spot > 0`, `strike > 0`, `volatility >= 0`
/// and `maturity >= 0`. The rate may take any sign.
///
/// # Examples
/// ```
/// use pricing_core::types::MarketParams;
///
/// let params = MarketParams::new(100.0, 70.0, 0.2, 0.01, 1.0).unwrap();
/// assert_eq!(params.strike(), 70.0);
///
/// // Expired option (T = 0) is a valid parameter set
/// assert!(MarketParams::new(100.0, 70.0, 0.2, 0.01, 0.0).is_ok());
///
/// // Negative maturity is not
/// assert!(MarketParams::new(100.0, 70.0, 0.2, 0.01, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    maturity: f64,
}

impl MarketParams {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (must be positive)
    /// * `strike` - Exercise price (must be positive)
    /// * `volatility` - Annualised volatility, fractional (must be non-negative)
    /// * `rate` - Annualised risk-free rate, fractional (any sign)
    /// * `maturity` - Time to maturity in years (must be non-negative)
    ///
    /// # Errors
    /// - `ParamError::InvalidSpot` if `spot <= 0`
    /// - `ParamError::InvalidStrike` if `strike <= 0`
    /// - `ParamError::InvalidVolatility` if `volatility < 0`
    /// - `ParamError::InvalidMaturity` if `maturity < 0`
    ///
    /// Zero volatility is accepted here; models that divide by it reject it
    /// as degenerate at their own construction.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        maturity: f64,
    ) -> Result<Self, ParamError> {
        if spot <= 0.0 {
            return Err(ParamError::InvalidSpot { spot });
        }
        if strike <= 0.0 {
            return Err(ParamError::InvalidStrike { strike });
        }
        if volatility < 0.0 {
            return Err(ParamError::InvalidVolatility { volatility });
        }
        if maturity < 0.0 {
            return Err(ParamError::InvalidMaturity { maturity });
        }

        Ok(Self {
            spot,
            strike,
            volatility,
            rate,
            maturity,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the discount factor `exp(-r * T)` over the full maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Intrinsic value of a call at these parameters: `max(S - K, 0)`.
    #[inline]
    pub fn call_intrinsic(&self) -> f64 {
        (self.spot - self.strike).max(0.0)
    }

    /// Intrinsic value of a put at these parameters: `max(K - S, 0)`.
    #[inline]
    pub fn put_intrinsic(&self) -> f64 {
        (self.strike - self.spot).max(0.0)
    }
}
