//! Dwell-time histograms and distance-to-peak summaries of a trajectory.

use hc_core::Position;

use crate::Trajectory;

/// Default number of histogram bins per axis.
pub const DWELL_BINS: usize = 30;

// ── Histogram ─────────────────────────────────────────────────────────────────

/// Equal-width histogram over `[min, max]` of the input.
///
/// Every bin is half-open `[lo, hi)` except the last, which also includes
/// `max`, so every finite input value lands in exactly one bin.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    min:    f64,
    max:    f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` into `bins` buckets.  Non-finite values are skipped.
    ///
    /// Returns `None` if `bins == 0` or no value is finite.  When every value
    /// is equal the whole count lands in the first bin.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let mut counts = vec![0u64; bins];
        let width = (max - min) / bins as f64;
        for &v in values.iter().filter(|v| v.is_finite()) {
            let i = if width > 0.0 {
                (((v - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[i] += 1;
        }
        Some(Self { min, max, counts })
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.bins() as f64
    }

    /// `[lo, hi)` bounds of bin `i`.
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        let lo = self.min + w * i as f64;
        let hi = if i + 1 == self.bins() { self.max } else { lo + w };
        (lo, hi)
    }

    /// Index of the fullest bin; the lowest index wins ties.
    pub fn mode(&self) -> usize {
        self.counts
            .iter()
            .enumerate()
            .fold((0, 0), |best, (i, &c)| if c > best.1 { (i, c) } else { best })
            .0
    }
}

// ── Distances ─────────────────────────────────────────────────────────────────

/// Euclidean distance from `target` of every position, in order.
pub fn distance_series(
    positions: impl IntoIterator<Item = Position>,
    target:    Position,
) -> Vec<f64> {
    positions.into_iter().map(|p| p.distance_to(target)).collect()
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Aggregate statistics of one trajectory relative to a reference peak.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySummary {
    pub rows:           usize,
    pub peak:           Position,
    pub mean_distance:  f64,
    pub final_distance: f64,
    pub max_utility:    f64,
    /// `[lo, hi)` of the fullest x bin.
    pub modal_x:        (f64, f64),
    /// `[lo, hi)` of the fullest y bin.
    pub modal_y:        (f64, f64),
}

impl TrajectorySummary {
    /// Summarise `trajectory` against `peak` with `bins` dwell bins per axis.
    /// `None` for an empty trajectory or `bins == 0`.
    pub fn compute(trajectory: &Trajectory, peak: Position, bins: usize) -> Option<Self> {
        let distances = distance_series(trajectory.positions(), peak);
        let final_distance = *distances.last()?;
        let mean_distance = distances.iter().sum::<f64>() / distances.len() as f64;

        let hx = Histogram::new(&trajectory.x, bins)?;
        let hy = Histogram::new(&trajectory.y, bins)?;

        Some(Self {
            rows: trajectory.len(),
            peak,
            mean_distance,
            final_distance,
            max_utility: trajectory.z.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            modal_x: hx.bin_range(hx.mode()),
            modal_y: hy.bin_range(hy.mode()),
        })
    }
}
