//! Plain data row type shared by every backend.

use hc_agent::History;

/// One recorded state: position `(x, y)` and utility `z`.
///
/// Field names double as the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrajectoryRow {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryRow {
    /// One row per history entry, in recording order.
    pub fn from_history(history: &History) -> impl ExactSizeIterator<Item = TrajectoryRow> + '_ {
        history.iter().map(|(p, u)| TrajectoryRow { x: p.x, y: p.y, z: u })
    }
}
