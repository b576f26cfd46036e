//! Monte Carlo valuation under risk-neutral geometric Brownian motion.
//!
//! Each path draws one standard normal variate and maps it straight to the
//! terminal underlying price `S * exp((r - sigma^2/2) T + sigma sqrt(T) z)`;
//! vanilla payoffs depend only on the terminal price, so no intermediate
//! time stepping is needed. The price is the discounted sample mean of the
//! payoffs.

mod rng;

pub use rng::SimRng;

use rayon::prelude::*;

use pricing_core::types::MarketParams;

use crate::error::ModelError;

/// A Monte Carlo price together with its sampling error.
///
/// `std_error` is the sample standard deviation of the discounted payoffs
/// divided by `sqrt(n_simulation)`; the true price lies within roughly
/// three standard errors of `price` with 99.7% confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the mean.
    pub std_error: f64,
}

/// Monte Carlo simulation model for European vanilla options.
///
/// The drift, diffusion, and discount terms are precomputed at
/// construction; every pricing call then draws a fresh, independent set of
/// `n_simulation` terminal prices. Two consecutive calls on the same model
/// therefore produce different estimates unless an explicitly seeded
/// [`SimRng`] is supplied through the `*_with` methods.
///
/// # Examples
/// ```
/// use pricing_core::types::MarketParams;
/// use pricing_models::simulation::{SimRng, SimulationModel};
///
/// let params = MarketParams::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
/// let model = SimulationModel::new(params, 100_000).unwrap();
///
/// let mut rng = SimRng::from_seed(42);
/// let price = model.call_price_with(&mut rng);
/// assert!(price > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationModel {
    params: MarketParams,
    n_simulation: usize,
    drift: f64,
    diffusion: f64,
    discount_factor: f64,
}

impl SimulationModel {
    /// Creates a new Monte Carlo model.
    ///
    /// Zero volatility and zero maturity are both accepted: the terminal
    /// price transform is well defined in either case and the estimator
    /// collapses to the deterministic forward payoff.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidPathCount` if `n_simulation < 1`.
    pub fn new(params: MarketParams, n_simulation: usize) -> Result<Self, ModelError> {
        if n_simulation < 1 {
            return Err(ModelError::InvalidPathCount { n_simulation });
        }

        let maturity = params.maturity();
        let volatility = params.volatility();
        Ok(Self {
            params,
            n_simulation,
            drift: (params.rate() - 0.5 * volatility * volatility) * maturity,
            diffusion: volatility * maturity.sqrt(),
            discount_factor: params.discount_factor(),
        })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> MarketParams {
        self.params
    }

    /// Returns the number of simulated paths per pricing call.
    #[inline]
    pub fn n_simulation(&self) -> usize {
        self.n_simulation
    }

    /// Diagnostic: the risk-neutral log-drift `(r - sigma^2/2) T`.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Diagnostic: the diffusion scale `sigma * sqrt(T)`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Maps a standard normal variate to a terminal underlying price.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.params.spot() * (self.drift + self.diffusion * z).exp()
    }

    /// Estimates the call price from a fresh, entropy-seeded batch of
    /// paths, evaluated in parallel.
    pub fn call_price(&self) -> f64 {
        let strike = self.params.strike();
        self.parallel_price(move |s_t| (s_t - strike).max(0.0))
    }

    /// Estimates the put price from a fresh, entropy-seeded batch of
    /// paths, evaluated in parallel.
    pub fn put_price(&self) -> f64 {
        let strike = self.params.strike();
        self.parallel_price(move |s_t| (strike - s_t).max(0.0))
    }

    /// Estimates the call price using the supplied generator, drawing
    /// exactly `n_simulation` variates. Reproducible for a seeded [`SimRng`].
    pub fn call_price_with(&self, rng: &mut SimRng) -> f64 {
        self.call_estimate_with(rng).price
    }

    /// Estimates the put price using the supplied generator, drawing
    /// exactly `n_simulation` variates. Reproducible for a seeded [`SimRng`].
    pub fn put_price_with(&self, rng: &mut SimRng) -> f64 {
        self.put_estimate_with(rng).price
    }

    /// Like [`call_price_with`](Self::call_price_with), additionally
    /// reporting the standard error of the estimate.
    pub fn call_estimate_with(&self, rng: &mut SimRng) -> MonteCarloEstimate {
        let strike = self.params.strike();
        self.estimate_with(rng, move |s_t| (s_t - strike).max(0.0))
    }

    /// Like [`put_price_with`](Self::put_price_with), additionally
    /// reporting the standard error of the estimate.
    pub fn put_estimate_with(&self, rng: &mut SimRng) -> MonteCarloEstimate {
        let strike = self.params.strike();
        self.estimate_with(rng, move |s_t| (strike - s_t).max(0.0))
    }

    fn parallel_price(&self, payoff: impl Fn(f64) -> f64 + Sync) -> f64 {
        let sum: f64 = (0..self.n_simulation)
            .into_par_iter()
            .map_init(SimRng::from_entropy, |rng, _| {
                payoff(self.terminal_price(rng.gen_normal()))
            })
            .sum();
        self.discount_factor * sum / self.n_simulation as f64
    }

    fn estimate_with(
        &self,
        rng: &mut SimRng,
        payoff: impl Fn(f64) -> f64,
    ) -> MonteCarloEstimate {
        let n = self.n_simulation;
        let discounted: Vec<f64> = (0..n)
            .map(|_| self.discount_factor * payoff(self.terminal_price(rng.gen_normal())))
            .collect();

        let price = discounted.iter().sum::<f64>() / n as f64;
        let std_error = if n > 1 {
            let variance =
                discounted.iter().map(|x| (x - price).powi(2)).sum::<f64>() / (n - 1) as f64;
            (variance / n as f64).sqrt()
        } else {
            0.0
        };

        MonteCarloEstimate { price, std_error }
    }
}
