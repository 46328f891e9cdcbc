//! Workspace error type.
//!
//! `hc-output` keeps its own `OutputError`; every other crate reports through
//! `ClimbError`.

use thiserror::Error;

/// The error type shared by `hc-core`, `hc-agent`, and `hc-policy`.
#[derive(Debug, Error)]
pub enum ClimbError {
    /// Step sizes must be finite and strictly positive: the slope estimate
    /// divides by the step size and the noise scale is its reciprocal.
    #[error("invalid step size {0}: must be finite and > 0")]
    InvalidStepSize(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `hc-*` crates.
pub type ClimbResult<T> = Result<T, ClimbError>;

/// Reject zero, negative, and non-finite step sizes.
#[inline]
pub fn check_step_size(step_size: f64) -> ClimbResult<f64> {
    if step_size.is_finite() && step_size > 0.0 {
        Ok(step_size)
    } else {
        Err(ClimbError::InvalidStepSize(step_size))
    }
}
