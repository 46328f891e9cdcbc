//! The `TrajectoryWriter` trait implemented by all backend writers.

use hc_agent::History;

use crate::{OutputResult, TrajectoryRow};

/// Trait implemented by the CSV and Parquet writers.
pub trait TrajectoryWriter {
    /// Append a batch of rows.
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every entry of `history` as one batch, then finish the writer.
pub fn write_history<W: TrajectoryWriter + ?Sized>(
    history: &History,
    writer:  &mut W,
) -> OutputResult<()> {
    let rows: Vec<TrajectoryRow> = TrajectoryRow::from_history(history).collect();
    writer.write_rows(&rows)?;
    writer.finish()
}
