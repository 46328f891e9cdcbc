//! `Agent` — the climber's state record and its movement primitives.
//!
//! # Invariants
//!
//! - `utility` always equals the surface value at `position` (or `0.0` for a
//!   surface-less agent).  It is computed eagerly at construction and
//!   refreshed after every move.
//! - `history.len()` equals the number of moves executed.  Each entry is the
//!   state *before* the corresponding move.
//! - `step_size` is finite and > 0; it is checked once at construction and
//!   never changes.

use std::fmt;

use hc_core::error::check_step_size;
use hc_core::{ClimbResult, Position};
use hc_surface::{SharedSurface, UtilitySurface};

use crate::{Direction, History};

/// A decision-making entity that wants to maximise its own utility.
///
/// An agent without a surface is a "simple agent": it can still move, but
/// every utility it sees is `0.0`.
pub struct Agent {
    position:  Position,
    utility:   f64,
    step_size: f64,
    surface:   Option<SharedSurface>,
    history:   History,
}

impl Agent {
    /// Create an agent at `position`.
    ///
    /// The initial utility is evaluated here, so the first history entry and
    /// the first step's slopes use the real surface value at the start.  A
    /// climber that started from utility `0` instead would record a different
    /// first row and see different first-step slopes.
    ///
    /// Fails with [`ClimbError::InvalidStepSize`][hc_core::ClimbError::InvalidStepSize]
    /// unless `step_size` is finite and strictly positive.
    pub fn new(
        position:  Position,
        surface:   Option<SharedSurface>,
        step_size: f64,
    ) -> ClimbResult<Self> {
        let step_size = check_step_size(step_size)?;
        let mut agent = Self {
            position,
            utility: 0.0,
            step_size,
            surface,
            history: History::new(),
        };
        agent.utility = agent.evaluate_utility();
        Ok(agent)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Cached utility at the current position.
    #[inline]
    pub fn utility(&self) -> f64 {
        self.utility
    }

    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn surface(&self) -> Option<&SharedSurface> {
        self.surface.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Give up the agent and keep only its history.
    pub fn into_history(self) -> History {
        self.history
    }

    /// Pre-allocate history room before a long climb.
    pub fn reserve_history(&mut self, moves: usize) {
        self.history.reserve(moves);
    }

    // ── Utility evaluation ────────────────────────────────────────────────

    /// Utility at the current position, freshly evaluated (not the cache).
    #[inline]
    pub fn evaluate_utility(&self) -> f64 {
        self.evaluate_utility_at(Position::ORIGIN)
    }

    /// Utility at `position + offset`, without moving.
    #[inline]
    pub fn evaluate_utility_at(&self, offset: Position) -> f64 {
        match &self.surface {
            None => 0.0,
            Some(surface) => surface.evaluate(self.position + offset),
        }
    }

    // ── Movement primitives ───────────────────────────────────────────────

    /// Append the current `(position, utility)` to the history.
    #[inline]
    pub fn record_state(&mut self) {
        self.history.record(self.position, self.utility);
    }

    /// +y by one step.
    pub fn move_up(&mut self) {
        self.translate(0.0, self.step_size);
    }

    /// −y by one step.
    pub fn move_down(&mut self) {
        self.translate(0.0, -self.step_size);
    }

    /// −x by one step.
    pub fn move_left(&mut self) {
        self.translate(-self.step_size, 0.0);
    }

    /// +x by one step.
    pub fn move_right(&mut self) {
        self.translate(self.step_size, 0.0);
    }

    /// Dispatch `direction` to its move primitive.  [`Direction::Here`]
    /// changes nothing and records nothing.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::East  => self.move_right(),
            Direction::West  => self.move_left(),
            Direction::North => self.move_up(),
            Direction::South => self.move_down(),
            Direction::Here  => {}
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.record_state();
        self.position = self.position.offset(dx, dy);
        self.utility = self.evaluate_utility();
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent<p:{}, u:{}>", self.position, self.utility)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent @ {} [u={}]", self.position, self.utility)
    }
}
