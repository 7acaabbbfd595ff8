use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing inventory files.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("inventory file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' has unsupported type {data_type}")]
    ColumnType { column: String, data_type: String },

    #[error("row {row}: column '{column}' is null")]
    NullValue { row: usize, column: String },

    #[error("row {row}: column '{column}' value {value} is out of range")]
    OutOfRange {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
