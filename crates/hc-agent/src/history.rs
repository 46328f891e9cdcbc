//! Append-only log of the agent's state just before each move.

use hc_core::Position;

/// Two parallel vectors, one entry per executed move.
///
/// The state *after* the last move is never recorded here; read it from the
/// agent itself.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    positions: Vec<Position>,
    utilities: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `moves` entries.
    pub fn with_capacity(moves: usize) -> Self {
        Self {
            positions: Vec::with_capacity(moves),
            utilities: Vec::with_capacity(moves),
        }
    }

    /// Make room for `moves` more entries.
    pub fn reserve(&mut self, moves: usize) {
        self.positions.reserve(moves);
        self.utilities.reserve(moves);
    }

    #[inline]
    pub fn record(&mut self, position: Position, utility: f64) {
        self.positions.push(position);
        self.utilities.push(utility);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Entries that fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.positions.capacity().min(self.utilities.capacity())
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn utilities(&self) -> &[f64] {
        &self.utilities
    }

    /// `(position, utility)` pairs in recording order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, f64)> + '_ {
        self.positions.iter().copied().zip(self.utilities.iter().copied())
    }

    /// Split into three equal-length columns: x, y, utility.
    pub fn columns(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let xs = self.positions.iter().map(|p| p.x).collect();
        let ys = self.positions.iter().map(|p| p.y).collect();
        (xs, ys, self.utilities.clone())
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.utilities.clear();
    }
}
