//! Error types for hc-output.

use thiserror::Error;

/// Errors that can occur when writing or reading trajectories.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The x, y and z columns do not have the same number of rows.
    #[error("column length mismatch: x={x}, y={y}, z={z}")]
    ColumnMismatch { x: usize, y: usize, z: usize },

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
