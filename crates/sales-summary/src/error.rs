//! Error types for sales-summary

use sales_core::NumericColumn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The dataset store was never loaded successfully
    #[error("Dataset was not loaded, service unavailable")]
    DatasetUnavailable,

    /// A requested column cannot be aggregated
    #[error("Could not compute statistics for column '{column}': {reason}")]
    Computation {
        column: NumericColumn,
        reason: String,
    },

    /// The request itself is malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] sales_dataset::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn computation(column: NumericColumn, reason: impl ToString) -> Self {
        Self::Computation {
            column,
            reason: reason.to_string(),
        }
    }

    /// Whether the failure is the dataset being unavailable rather than the
    /// computation itself
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::DatasetUnavailable)
    }
}
