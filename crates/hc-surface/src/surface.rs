//! The `UtilitySurface` trait, the seam between climbers and landscapes.

use std::sync::Arc;

use hc_core::Position;

/// A deterministic map from a position on the plane to a scalar utility.
///
/// # Contract
///
/// `evaluate` must be pure: the same position always yields the same value,
/// with no side effects.  It is called five times per climb step (once per
/// candidate direction, the stay candidate included) plus once after every
/// move, so it should be cheap.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one surface can be shared by every
/// climber of a parallel ensemble.
pub trait UtilitySurface: Send + Sync {
    fn evaluate(&self, position: Position) -> f64;
}

/// A reference-counted, shareable surface.  This is what an agent holds.
pub type SharedSurface = Arc<dyn UtilitySurface>;

/// Adapts a plain closure into a [`UtilitySurface`].
///
/// ```rust
/// use hc_core::Position;
/// use hc_surface::{FnSurface, UtilitySurface};
///
/// let plane = FnSurface(|p: Position| p.x + p.y);
/// assert_eq!(plane.evaluate(Position::new(1.0, 2.0)), 3.0);
/// ```
pub struct FnSurface<F>(pub F);

impl<F> UtilitySurface for FnSurface<F>
where
    F: Fn(Position) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, position: Position) -> f64 {
        (self.0)(position)
    }
}
