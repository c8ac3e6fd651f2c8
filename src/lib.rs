//! # Sales Stats
//!
//! Descriptive statistics over a sales transaction table: filter the rows by
//! date range, category and product, then summarize `quantity_sold` and
//! `price_per_unit` with mean, median, mode, standard deviation and the
//! 25th/75th percentiles.
//!
//! ## Crates
//!
//! - [`sales_core`]: column identifiers, result types, numeric errors
//! - [`sales_weighted`]: weighted and unweighted primitives
//! - [`sales_dataset`]: CSV ingestion, record model, filters, the dataset store
//! - [`sales_summary`]: statistics engine and summary service
//!
//! ## Example
//!
//! ```rust,no_run
//! use sales_stats::prelude::*;
//!
//! let service = SummaryService::start(&DatasetSettings::from_env(), EngineConfig::default());
//! let request = SummaryRequest::default()
//!     .with_filters(FilterConditions::none().with_categories(["Toys"]));
//! match service.summarize(&request) {
//!     Ok(report) => println!("{}", serde_json::to_string(&report).unwrap()),
//!     Err(e) if e.is_unavailable() => eprintln!("dataset not loaded"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub use sales_core;
pub use sales_dataset;
pub use sales_summary;
pub use sales_weighted;

pub use sales_core::{ColumnStatistics, NumericColumn, SummaryReport};
pub use sales_dataset::{
    Dataset, DatasetSettings, DatasetStore, DateRange, FilterConditions, SalesRecord,
};
pub use sales_summary::{
    EngineConfig, MissingValuePolicy, StatisticsEngine, SummaryRequest, SummaryService,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use sales_core::{ColumnStatistics, NumericColumn, SummaryReport};
    pub use sales_dataset::{
        filter, Dataset, DatasetSettings, DatasetSource, DatasetStore, DateRange, FilterConditions,
        SalesRecord,
    };
    pub use sales_summary::{
        ColumnSpec, ColumnTable, EngineConfig, MissingValuePolicy, StatisticsEngine, SummaryRequest,
        SummaryService,
    };
    pub use sales_weighted::Descriptive;
}
