//! Core types for sales dataset summaries
//!
//! This crate holds what every layer of the workspace agrees on:
//!
//! - [`NumericColumn`]: the columns statistics can be computed for
//! - [`ColumnStatistics`] and [`SummaryReport`]: the shape of a result
//! - [`Error`]: failures of the numeric primitives
//!
//! # Example
//!
//! ```rust
//! use sales_core::{ColumnStatistics, NumericColumn, SummaryReport};
//!
//! let mut report = SummaryReport::new();
//! report.insert(NumericColumn::PricePerUnit, ColumnStatistics::empty());
//! assert!(report.get(NumericColumn::PricePerUnit).unwrap().is_empty());
//! ```

pub mod column;
pub mod error;
pub mod statistics;

pub use column::{NumericColumn, UnknownColumn};
pub use error::{Error, Result};
pub use statistics::{round_to, ColumnStatistics, SummaryReport};
