//! Filter-then-summarize statistics over the sales dataset
//!
//! A [`SummaryRequest`] names the numeric columns to summarize and optional
//! row filters. The [`SummaryService`] takes a snapshot of the loaded dataset,
//! filters it, and hands the selection to the [`StatisticsEngine`], which
//! returns mean, median, mode, standard deviation and the 25th/75th
//! percentiles per column, rounded to two decimals by default.
//!
//! `price_per_unit` is weighted by `quantity_sold` (each unit sold counts
//! once); `quantity_sold` is summarized unweighted. See [`ColumnTable`].
//!
//! # Example
//!
//! ```rust
//! use sales_dataset::{Dataset, DatasetStore, SalesRecord};
//! use sales_summary::{NumericColumn, StatisticsEngine, SummaryRequest, SummaryService};
//! use std::sync::Arc;
//!
//! let row = |quantity, price| SalesRecord {
//!     date: None,
//!     product_id: Some(1),
//!     product_name: "Widget".into(),
//!     category: "Tools".into(),
//!     quantity_sold: Some(quantity),
//!     price_per_unit: Some(price),
//! };
//! let dataset = Dataset::from_records(vec![row(2, 10.0), row(3, 20.0)]);
//!
//! let service = SummaryService::new(
//!     Arc::new(DatasetStore::with_dataset(dataset)),
//!     StatisticsEngine::default(),
//! );
//! let report = service.summarize(&SummaryRequest::default()).unwrap();
//! assert_eq!(report.get(NumericColumn::PricePerUnit).unwrap().mean, Some(16.0));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod request;
pub mod service;

pub use config::{ColumnSpec, ColumnTable, EngineConfig, MissingValuePolicy};
pub use engine::StatisticsEngine;
pub use error::{Error, Result};
pub use request::SummaryRequest;
pub use service::SummaryService;

pub use sales_core::{ColumnStatistics, NumericColumn, SummaryReport};
