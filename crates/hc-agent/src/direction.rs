//! The closed set of climb candidates.

use std::fmt;
use std::str::FromStr;

use hc_core::{ClimbError, Position};

/// One of the five candidates considered at every climb step.
///
/// The declaration order is significant: [`Direction::ALL`] lists the
/// candidates in the order their slopes are sampled, and on an exact tie the
/// earlier candidate wins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +x.
    East,
    /// −x.
    West,
    /// +y.
    North,
    /// −y.
    South,
    /// Stay put.  Only meaningful for slope estimation; stepping "here" is a
    /// no-op.
    Here,
}

impl Direction {
    /// Sampling (and tie-break) order.
    pub const ALL: [Direction; 5] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
        Direction::Here,
    ];

    /// Unit offset `(dx, dy)` with components in `{-1, 0, 1}`.
    #[inline]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::East  => (1.0, 0.0),
            Direction::West  => (-1.0, 0.0),
            Direction::North => (0.0, 1.0),
            Direction::South => (0.0, -1.0),
            Direction::Here  => (0.0, 0.0),
        }
    }

    /// Offset of one step of length `step_size` in this direction.
    #[inline]
    pub fn scaled(self, step_size: f64) -> Position {
        let (dx, dy) = self.unit();
        Position::new(dx * step_size, dy * step_size)
    }

    /// `true` for the four directions that actually move the agent.
    #[inline]
    pub fn is_move(self) -> bool {
        !matches!(self, Direction::Here)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East  => "East",
            Direction::West  => "West",
            Direction::North => "North",
            Direction::South => "South",
            Direction::Here  => "Here",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ClimbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClimbError::Parse(format!("unknown direction {s:?}")))
    }
}
