//! CSV trajectory reader.
//!
//! Accepts exactly the files [`CsvWriter`](crate::CsvWriter) produces: a
//! header naming `x`, `y`, `z` (in any order; extra columns are ignored)
//! followed by one row per recorded state.

use std::io::Read;
use std::path::Path;

use hc_agent::History;
use hc_core::Position;

use crate::{OutputError, OutputResult, TrajectoryRow};

/// A trajectory held as three parallel columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Trajectory {
    /// Build from explicit columns, which must all have the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> OutputResult<Self> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(OutputError::ColumnMismatch { x: x.len(), y: y.len(), z: z.len() });
        }
        Ok(Self { x, y, z })
    }

    pub fn from_history(history: &History) -> Self {
        let (x, y, z) = history.columns();
        Self { x, y, z }
    }

    /// Load a trajectory written by [`CsvWriter`](crate::CsvWriter).
    pub fn read_csv(path: &Path) -> OutputResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_reader(file)
    }

    /// Like [`read_csv`](Self::read_csv) but accepts any `Read` source.
    pub fn read_reader<R: Read>(reader: R) -> OutputResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut out = Self::default();
        for result in csv_reader.deserialize::<TrajectoryRow>() {
            let row = result?;
            out.x.push(row.x);
            out.y.push(row.y);
            out.z.push(row.z);
        }
        Ok(out)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Position::new(x, y))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = TrajectoryRow> + '_ {
        self.positions()
            .zip(&self.z)
            .map(|(p, &z)| TrajectoryRow { x: p.x, y: p.y, z })
    }
}
