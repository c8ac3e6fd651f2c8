//! Error types for dataset ingestion and access

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("start_date {start} must not be later than end_date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Product ids must be positive, got {0}")]
    InvalidProductId(u64),

    #[error("Dataset was not loaded")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
