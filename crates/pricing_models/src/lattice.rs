//! Cox-Ross-Rubinstein binomial lattice pricing.
//!
//! The tree has `n_period + 1` time layers; layer `i` holds `i + 1` nodes,
//! and node `(i, j)` is the underlying price after `i` steps of which `j`
//! were down-moves: `S * down^j * up^(i-j)`. The lattice is triangular by
//! construction - rows are ragged, there is no unused square-matrix region.
//!
//! Pricing walks the tree backwards: terminal payoffs at layer `n_period`,
//! then one-step discounted risk-neutral expectations down to the root.
//! American puts additionally test early exercise at every node.

use pricing_core::types::MarketParams;

use crate::error::ModelError;

/// Binomial lattice model for European and American vanilla options.
///
/// The price lattice is built once at construction and never mutated;
/// each pricing call derives its own value layers from it.
///
/// # Examples
/// ```
/// use pricing_core::types::MarketParams;
/// use pricing_models::lattice::LatticeModel;
///
/// let params = MarketParams::new(100.0, 70.0, 0.2, 0.01, 1.0).unwrap();
/// let european = LatticeModel::new(params, 100, false).unwrap();
/// let american = LatticeModel::new(params, 100, true).unwrap();
///
/// // Early exercise premium on a put is non-negative
/// assert!(american.put_price() >= european.put_price());
/// ```
#[derive(Debug, Clone)]
pub struct LatticeModel {
    params: MarketParams,
    n_period: usize,
    american: bool,
    delta_t: f64,
    up: f64,
    down: f64,
    probability: f64,
    step_discount: f64,
    /// Row `i` holds the `i + 1` underlying prices after `i` steps,
    /// indexed by the number of down-moves.
    lattice: Vec<Vec<f64>>,
}

impl LatticeModel {
    /// Creates a new CRR lattice model.
    ///
    /// # Arguments
    /// * `params` - Shared market parameters
    /// * `n_period` - Number of tree steps (must be >= 1)
    /// * `american` - Enable the early-exercise test for puts; calls on a
    ///   non-dividend-paying underlying never exercise early, so this flag
    ///   is ignored by [`call_price`](Self::call_price)
    ///
    /// # Errors
    /// - `ModelError::InvalidStepCount` if `n_period < 1`
    /// - `ModelError::DegenerateLattice` if the up and down factors
    ///   coincide (zero volatility or zero maturity), which leaves the
    ///   risk-neutral probability undefined
    pub fn new(params: MarketParams, n_period: usize, american: bool) -> Result<Self, ModelError> {
        if n_period < 1 {
            return Err(ModelError::InvalidStepCount { n_period });
        }

        let delta_t = params.maturity() / n_period as f64;
        let up = (params.volatility() * delta_t.sqrt()).exp();
        let down = 1.0 / up;
        if up == down {
            return Err(ModelError::DegenerateLattice { up, down });
        }

        let growth = (params.rate() * delta_t).exp();
        let probability = (growth - down) / (up - down);
        let step_discount = (-params.rate() * delta_t).exp();

        let lattice = (0..=n_period)
            .map(|i| {
                (0..=i)
                    .map(|j| params.spot() * down.powi(j as i32) * up.powi((i - j) as i32))
                    .collect()
            })
            .collect();

        Ok(Self {
            params,
            n_period,
            american,
            delta_t,
            up,
            down,
            probability,
            step_discount,
            lattice,
        })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> MarketParams {
        self.params
    }

    /// Returns the number of tree steps.
    #[inline]
    pub fn n_period(&self) -> usize {
        self.n_period
    }

    /// Returns true if the early-exercise test is enabled for puts.
    #[inline]
    pub fn is_american(&self) -> bool {
        self.american
    }

    /// Returns the time increment per step, `T / n_period`.
    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Diagnostic: the up factor `exp(sigma * sqrt(delta_t))`.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Diagnostic: the down factor `1 / up`.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// Diagnostic: the risk-neutral up-move probability
    /// `(exp(r * delta_t) - down) / (up - down)`.
    #[inline]
    pub fn risk_neutral_probability(&self) -> f64 {
        self.probability
    }

    /// Underlying price at node `(step, level)`, where `level` counts
    /// down-moves.
    ///
    /// # Panics
    /// Panics if `level > step` (outside the triangular region) or
    /// `step > n_period`.
    #[inline]
    pub fn underlying(&self, step: usize, level: usize) -> f64 {
        assert!(
            level <= step && step <= self.n_period,
            "lattice node ({}, {}) outside triangular region (n_period = {})",
            step,
            level,
            self.n_period
        );
        self.lattice[step][level]
    }

    /// Computes the call price by backward induction.
    ///
    /// The `american` flag is deliberately not consulted: an American call
    /// on a non-dividend-paying underlying is never optimally exercised
    /// early, so its value equals the European one.
    pub fn call_price(&self) -> f64 {
        let strike = self.params.strike();
        let terminal = self.lattice[self.n_period]
            .iter()
            .map(|&s| (s - strike).max(0.0))
            .collect();
        self.roll_back(terminal, None::<fn(f64) -> f64>)
    }

    /// Computes the put price by backward induction, applying the
    /// early-exercise test at every node when the model is American.
    pub fn put_price(&self) -> f64 {
        let strike = self.params.strike();
        let terminal = self.lattice[self.n_period]
            .iter()
            .map(|&s| (strike - s).max(0.0))
            .collect();
        let exercise = self
            .american
            .then(|| move |s: f64| (strike - s).max(0.0));
        self.roll_back(terminal, exercise)
    }

    /// Rolls a terminal value layer back to the root.
    ///
    /// `values[j]` is the option value with `j` down-moves at the current
    /// layer. When `exercise` is provided, each node takes the larger of
    /// continuation and intrinsic value; on ties continuation wins, i.e.
    /// exercise happens only when intrinsic strictly exceeds continuation.
    fn roll_back(&self, mut values: Vec<f64>, exercise: Option<impl Fn(f64) -> f64>) -> f64 {
        let p = self.probability;
        for i in (0..self.n_period).rev() {
            for j in 0..=i {
                let continuation =
                    self.step_discount * (p * values[j] + (1.0 - p) * values[j + 1]);
                values[j] = match &exercise {
                    Some(intrinsic_of) => {
                        let intrinsic = intrinsic_of(self.lattice[i][j]);
                        if intrinsic > continuation {
                            intrinsic
                        } else {
                            continuation
                        }
                    }
                    None => continuation,
                };
            }
            values.truncate(i + 1);
        }
        values[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::AnalyticModel;
    use approx::assert_relative_eq;

    fn params(spot: f64, strike: f64, vol: f64, rate: f64, maturity: f64) -> MarketParams {
        MarketParams::new(spot, strike, vol, rate, maturity).unwrap()
    }

    fn dashboard_params() -> MarketParams {
        params(100.0, 70.0, 0.2, 0.01, 1.0)
    }

    // ==========================================================
    // Constructor tests
    // ==========================================================

    #[test]
    fn test_new_invalid_step_count() {
        let result = LatticeModel::new(dashboard_params(), 0, false);
        assert!(matches!(
            result,
            Err(ModelError::InvalidStepCount { n_period: 0 })
        ));
    }

    #[test]
    fn test_new_zero_volatility_rejected() {
        let p = params(100.0, 70.0, 0.0, 0.01, 1.0);
        assert!(matches!(
            LatticeModel::new(p, 100, false),
            Err(ModelError::DegenerateLattice { .. })
        ));
    }

    #[test]
    fn test_new_zero_maturity_rejected() {
        // T = 0 also collapses up onto down
        let p = params(100.0, 70.0, 0.2, 0.01, 0.0);
        assert!(matches!(
            LatticeModel::new(p, 100, false),
            Err(ModelError::DegenerateLattice { .. })
        ));
    }

    #[test]
    fn test_factors_and_probability() {
        let m = LatticeModel::new(dashboard_params(), 100, false).unwrap();
        assert_relative_eq!(m.delta_t(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(m.up() * m.down(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.up(), (0.2 * 0.1_f64).exp(), epsilon = 1e-12);
        let expected_p = ((0.01 * 0.01_f64).exp() - m.down()) / (m.up() - m.down());
        assert_relative_eq!(m.risk_neutral_probability(), expected_p, epsilon = 1e-12);
        assert!(m.risk_neutral_probability() > 0.0);
        assert!(m.risk_neutral_probability() < 1.0);
    }

    // ==========================================================
    // Lattice structure tests
    // ==========================================================

    #[test]
    fn test_underlying_nodes() {
        let m = LatticeModel::new(dashboard_params(), 4, false).unwrap();
        assert_relative_eq!(m.underlying(0, 0), 100.0, epsilon = 1e-12);
        // One up then one down recombines to spot
        assert_relative_eq!(m.underlying(2, 1), 100.0, epsilon = 1e-12);
        // All-up and all-down corners
        assert_relative_eq!(m.underlying(4, 0), 100.0 * m.up().powi(4), epsilon = 1e-9);
        assert_relative_eq!(m.underlying(4, 4), 100.0 * m.down().powi(4), epsilon = 1e-9);
    }

    #[test]
    #[should_panic(expected = "outside triangular region")]
    fn test_underlying_rejects_invalid_level() {
        let m = LatticeModel::new(dashboard_params(), 4, false).unwrap();
        let _ = m.underlying(2, 3);
    }

    // ==========================================================
    // Pricing tests
    // ==========================================================

    #[test]
    fn test_single_step_call_hand_computed() {
        let p = params(100.0, 100.0, 0.2, 0.05, 1.0);
        let m = LatticeModel::new(p, 1, false).unwrap();

        let up = 0.2_f64.exp();
        let down = 1.0 / up;
        let prob = (0.05_f64.exp() - down) / (up - down);
        let expected = (-0.05_f64).exp()
            * (prob * (100.0 * up - 100.0).max(0.0) + (1.0 - prob) * (100.0 * down - 100.0).max(0.0));

        assert_relative_eq!(m.call_price(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_call_ignores_american_flag() {
        let european = LatticeModel::new(dashboard_params(), 50, false).unwrap();
        let american = LatticeModel::new(dashboard_params(), 50, true).unwrap();
        // Identical induction path, so the values are bit-for-bit equal
        assert_eq!(european.call_price(), american.call_price());
    }

    #[test]
    fn test_call_converges_to_analytic() {
        let analytic = AnalyticModel::new(dashboard_params()).unwrap();
        let reference = analytic.call_price();

        let coarse = LatticeModel::new(dashboard_params(), 100, false).unwrap();
        assert!(
            (coarse.call_price() - reference).abs() < 0.05,
            "n=100: {} vs analytic {}",
            coarse.call_price(),
            reference
        );

        let fine = LatticeModel::new(dashboard_params(), 500, false).unwrap();
        assert!(
            (fine.call_price() - reference).abs() < 1e-2,
            "n=500: {} vs analytic {}",
            fine.call_price(),
            reference
        );
    }

    #[test]
    fn test_european_put_converges_to_analytic() {
        let p = params(100.0, 100.0, 0.2, 0.05, 1.0);
        let analytic = AnalyticModel::new(p).unwrap();
        let m = LatticeModel::new(p, 500, false).unwrap();
        assert!((m.put_price() - analytic.put_price()).abs() < 1e-2);
    }

    #[test]
    fn test_american_put_geq_european_put() {
        for (s, k) in [(100.0, 70.0), (100.0, 100.0), (100.0, 130.0)] {
            let p = params(s, k, 0.2, 0.05, 1.0);
            let eu = LatticeModel::new(p, 200, false).unwrap();
            let am = LatticeModel::new(p, 200, true).unwrap();
            assert!(
                am.put_price() >= eu.put_price() - 1e-12,
                "American put {} < European put {} at K = {}",
                am.put_price(),
                eu.put_price(),
                k
            );
        }
    }

    #[test]
    fn test_american_put_at_least_intrinsic() {
        // Deep ITM put with positive rates: immediate exercise dominates
        let p = params(50.0, 100.0, 0.2, 0.05, 1.0);
        let am = LatticeModel::new(p, 200, true).unwrap();
        assert!(am.put_price() >= 50.0 - 1e-12);

        // While the European value sits strictly below intrinsic
        let eu = LatticeModel::new(p, 200, false).unwrap();
        assert!(eu.put_price() < 50.0);
    }

    #[test]
    fn test_pricing_calls_idempotent() {
        let m = LatticeModel::new(dashboard_params(), 50, true).unwrap();
        assert_eq!(m.put_price(), m.put_price());
        assert_eq!(m.call_price(), m.call_price());
    }
}
