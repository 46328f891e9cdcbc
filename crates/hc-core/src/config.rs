//! Run configuration.

use crate::error::check_step_size;
use crate::{ClimbError, ClimbResult, ClimberId, ClimberRng, Position};

/// Top-level climb configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) or assembled from command-line flags, then passed to the
/// ensemble runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimbConfig {
    /// Where every climber starts.
    pub start: Position,

    /// Move length, and the reciprocal of the slope-noise standard deviation.
    /// Must be finite and > 0.
    pub step_size: f64,

    /// Number of selection-and-move iterations per climber.
    pub steps: u64,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Number of independent climbers.  At least 1.
    pub climbers: usize,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored unless `hc-policy` is built with the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            start:       Position::ORIGIN,
            step_size:   1.0,
            steps:       0,
            seed:        0,
            climbers:    1,
            num_threads: None,
        }
    }
}

impl ClimbConfig {
    /// Check the invariants the climb loop relies on.
    pub fn validate(&self) -> ClimbResult<()> {
        check_step_size(self.step_size)?;
        if self.climbers == 0 {
            return Err(ClimbError::Config("climbers must be at least 1".into()));
        }
        if !self.start.is_finite() {
            return Err(ClimbError::Config(format!(
                "start position {} is not finite",
                self.start
            )));
        }
        if self.num_threads == Some(0) {
            return Err(ClimbError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }

    /// Iterator over all climber IDs in ascending order.
    pub fn climber_ids(&self) -> impl Iterator<Item = ClimberId> + '_ {
        (0..self.climbers as u32).map(ClimberId)
    }

    /// The deterministic noise source for one climber of this run.
    pub fn make_rng(&self, climber: ClimberId) -> ClimberRng {
        ClimberRng::new(self.seed, climber)
    }
}
