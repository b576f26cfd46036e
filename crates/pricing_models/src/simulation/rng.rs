//! Seedable random number generation for Monte Carlo pricing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Random number generator for simulation models.
///
/// Wraps a cryptographically-seeded [`StdRng`] and exposes the standard
/// normal draws the geometric Brownian motion terminal-price transform
/// needs. Constructing from a fixed seed makes a pricing run exactly
/// reproducible, which the deterministic `*_with` pricing methods rely on.
///
/// # Examples
/// ```
/// use pricing_models::simulation::SimRng;
///
/// let mut a = SimRng::from_seed(42);
/// let mut b = SimRng::from_seed(42);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// ```
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    /// Creates a generator from a fixed seed. Identical seeds produce
    /// identical draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Draws a single standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// Fills a buffer with independent standard normal variates.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = self.inner.sample(StandardNormal);
        }
    }
}
