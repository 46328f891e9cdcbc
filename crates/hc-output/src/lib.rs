//! `hc-output` — trajectory export, read-back, and summaries.
//!
//! Two writer backends, selected by Cargo feature:
//!
//! | Feature   | Backend | File contents                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | header `x,y,z`, one row per history entry        |
//! | `parquet` | Parquet | three non-nullable `Float64` columns `x`, `y`, `z` |
//!
//! Both implement [`TrajectoryWriter`]; [`write_history`] drives either one
//! from an agent's [`History`](hc_agent::History).
//!
//! # Usage
//!
//! ```rust,ignore
//! use hc_output::{CsvWriter, Trajectory, write_history};
//!
//! let mut writer = CsvWriter::new(Path::new("yves.csv"))?;
//! write_history(agent.history(), &mut writer)?;
//! let back = Trajectory::read_csv(Path::new("yves.csv"))?;
//! ```

pub mod analysis;
pub mod csv;
pub mod error;
pub mod reader;
pub mod row;
pub mod writer;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use analysis::{distance_series, Histogram, TrajectorySummary, DWELL_BINS};
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use reader::Trajectory;
pub use row::TrajectoryRow;
pub use writer::{write_history, TrajectoryWriter};

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetWriter;
