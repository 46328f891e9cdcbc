//! Parquet output backend (feature `parquet`).
//!
//! One file per trajectory with three non-nullable `Float64` columns
//! `x`, `y`, `z`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::Float64Builder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::TrajectoryWriter;
use crate::{OutputResult, TrajectoryRow};

fn trajectory_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("x", DataType::Float64, false),
        Field::new("y", DataType::Float64, false),
        Field::new("z", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes a trajectory to a single Parquet file.
///
/// `finish()` **must** be called to write the footer; without it the file
/// cannot be opened by Parquet readers.
pub struct ParquetWriter {
    rows:   Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl ParquetWriter {
    pub fn new(path: &Path) -> OutputResult<Self> {
        let schema = trajectory_schema();
        let file = File::create(path)?;
        let rows = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { rows: Some(rows), schema })
    }
}

impl TrajectoryWriter for ParquetWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.rows.as_mut() else {
            return Ok(());
        };

        let mut xs = Float64Builder::with_capacity(rows.len());
        let mut ys = Float64Builder::with_capacity(rows.len());
        let mut zs = Float64Builder::with_capacity(rows.len());
        for row in rows {
            xs.append_value(row.x);
            ys.append_value(row.y);
            zs.append_value(row.z);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(zs.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.rows.take() {
            w.close()?;
        }
        Ok(())
    }
}
