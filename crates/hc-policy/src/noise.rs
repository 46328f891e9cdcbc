//! Slope-noise sources: the climber's only source of randomness.

use hc_core::ClimberRng;

/// Perturbs a deterministic slope estimate.
///
/// The climber calls [`perturb`][Self::perturb] five times per step, in
/// candidate order, with `std_dev = 1 / step_size`.  Implementations decide
/// what that noise looks like; swapping them is how tests pin the
/// direction choice and how a greedy climber is built.
pub trait SlopeNoise {
    fn perturb(&mut self, slope: f64, std_dev: f64) -> f64;
}

/// One draw from `Normal(slope, std_dev)` per call, from a seeded RNG.
pub struct GaussianNoise {
    rng: ClimberRng,
}

impl GaussianNoise {
    pub fn new(rng: ClimberRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(ClimberRng::from_seed(seed))
    }

    pub fn into_rng(self) -> ClimberRng {
        self.rng
    }
}

impl SlopeNoise for GaussianNoise {
    #[inline]
    fn perturb(&mut self, slope: f64, std_dev: f64) -> f64 {
        self.rng.normal(slope, std_dev)
    }
}

/// No noise: the climber follows the steepest finite-difference slope.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoNoise;

impl SlopeNoise for NoNoise {
    #[inline]
    fn perturb(&mut self, slope: f64, _std_dev: f64) -> f64 {
        slope
    }
}
