//! `MountainRange` — a sum of Gaussian bumps over a strictly positive floor.
//!
//! The floor keeps every utility strictly positive, so far from all peaks the
//! five candidate slopes are compared against a defined (if tiny) baseline
//! instead of a flat run of exact zeros.

use std::sync::Arc;

use hc_core::Position;

use crate::{GaussianBump, SharedSurface, UtilitySurface};

/// Constant added to every evaluation of a [`MountainRange`].
pub const UTILITY_FLOOR: f64 = 1e-12;

/// A composite surface: the sum of independently parameterised bumps, plus
/// [`UTILITY_FLOOR`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountainRange {
    pub bumps: Vec<GaussianBump>,
}

impl MountainRange {
    pub fn new(bumps: Vec<GaussianBump>) -> Self {
        Self { bumps }
    }

    /// A range with one peak.
    pub fn single(bump: GaussianBump) -> Self {
        Self { bumps: vec![bump] }
    }

    /// The four-peak landscape of the reference experiment.  The tallest
    /// peak is the narrow one at (2, 2).
    pub fn yves() -> Self {
        Self::new(vec![
            GaussianBump::new(Position::new(2.0, 2.0), 0.4),
            GaussianBump::new(Position::new(2.0, 3.0), 0.5),
            GaussianBump::new(Position::new(1.0, 1.0), 0.5),
            GaussianBump::new(Position::new(3.0, 1.0), 0.5),
        ])
    }

    /// Append a bump (fluent).
    pub fn with_bump(mut self, bump: GaussianBump) -> Self {
        self.bumps.push(bump);
        self
    }

    /// Move the range behind an `Arc` so several agents can share it.
    pub fn into_shared(self) -> SharedSurface {
        Arc::new(self)
    }

    /// The bump mean where the whole surface is highest, or `None` for an
    /// empty range.  Overlapping neighbours count, so this is not simply the
    /// narrowest bump.
    pub fn tallest_peak(&self) -> Option<Position> {
        self.bumps
            .iter()
            .map(|b| (b.mean, self.evaluate(b.mean)))
            .fold(None, |best: Option<(Position, f64)>, (p, u)| match best {
                Some((_, bu)) if bu >= u => best,
                _ => Some((p, u)),
            })
            .map(|(p, _)| p)
    }
}

impl UtilitySurface for MountainRange {
    fn evaluate(&self, position: Position) -> f64 {
        self.bumps.iter().map(|b| b.evaluate(position)).sum::<f64>() + UTILITY_FLOOR
    }
}
