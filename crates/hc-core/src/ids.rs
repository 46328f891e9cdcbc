//! Strongly typed climber identifier.
//!
//! The inner integer is `pub` so ensemble results can be indexed directly,
//! but callers should prefer [`ClimberId::index`] for clarity.

use std::fmt;

/// Index of a climber inside an ensemble run.  Also mixed into the climber's
/// RNG seed, so the same id always sees the same noise stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimberId(pub u32);

impl ClimberId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClimberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClimberId({})", self.0)
    }
}

impl From<ClimberId> for usize {
    #[inline(always)]
    fn from(id: ClimberId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ClimberId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ClimberId, Self::Error> {
        u32::try_from(n).map(ClimberId)
    }
}
