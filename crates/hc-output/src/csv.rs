//! CSV output backend.
//!
//! One file per trajectory with the header `x,y,z`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TrajectoryWriter;
use crate::{OutputResult, TrajectoryRow};

/// Writes a trajectory to a single CSV file.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    ///
    /// The header is written eagerly so an empty history still yields a
    /// readable file.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut rows = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        rows.write_record(["x", "y", "z"])?;
        Ok(Self { rows, finished: false })
    }
}

impl TrajectoryWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
