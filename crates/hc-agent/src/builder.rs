//! Fluent builder for [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hc_agent::AgentBuilder;
//! use hc_core::Position;
//! use hc_surface::MountainRange;
//!
//! let agent = AgentBuilder::new()
//!     .position(Position::new(0.5, 0.5))
//!     .surface(Arc::new(MountainRange::yves()))
//!     .step_size(0.05)
//!     .history_capacity(40_000)
//!     .build()
//!     .unwrap();
//!
//! assert!(agent.utility() > 0.0);
//! assert!(agent.history().is_empty());
//! ```

use hc_core::{ClimbResult, Position};
use hc_surface::SharedSurface;

use crate::Agent;

/// Fluent builder for [`Agent`].
///
/// # Defaults
///
/// | Method                  | Default                        |
/// |-------------------------|--------------------------------|
/// | `.position(p)`          | `Position::ORIGIN`             |
/// | `.surface(s)`           | none (simple agent, utility 0) |
/// | `.step_size(h)`         | `1.0`                          |
/// | `.history_capacity(n)`  | `0`                            |
pub struct AgentBuilder {
    position:         Position,
    surface:          Option<SharedSurface>,
    step_size:        f64,
    history_capacity: usize,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            position:         Position::ORIGIN,
            surface:          None,
            step_size:        1.0,
            history_capacity: 0,
        }
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Surface to climb.  Without one the agent is a simple agent.
    pub fn surface(mut self, surface: SharedSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Move length.  Validated by [`build`](Self::build).
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Pre-allocate history for this many moves; usually the planned step
    /// count.
    pub fn history_capacity(mut self, moves: usize) -> Self {
        self.history_capacity = moves;
        self
    }

    /// Validate the step size and construct the agent, evaluating its
    /// initial utility.
    pub fn build(self) -> ClimbResult<Agent> {
        let mut agent = Agent::new(self.position, self.surface, self.step_size)?;
        if self.history_capacity > 0 {
            agent.reserve_history(self.history_capacity);
        }
        Ok(agent)
    }
}
