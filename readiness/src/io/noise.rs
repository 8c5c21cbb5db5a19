//! `rand`-backed noise for result scoring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::scoring::NoiseSource;

/// Uniform noise drawn from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandNoise<R> {
    rng: R,
}

impl<R: Rng> RandNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandNoise<StdRng> {
    /// Reproducible noise: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> NoiseSource for RandNoise<R> {
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        if !(amplitude.is_finite() && amplitude > 0.0) {
            return 0.0;
        }
        self.rng.gen_range(-amplitude..=amplitude)
    }
}
