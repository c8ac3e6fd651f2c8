//! Sales transaction dataset
//!
//! ```text
//!   sales_data.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse + coerce → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DatasetStore │  load once, shared read-only snapshots
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  AND of optional predicates → Selection
//!   └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sales_dataset::{filter, Dataset, DatasetStore, FilterConditions, SalesRecord};
//!
//! let dataset: Dataset = vec![SalesRecord {
//!     date: None,
//!     product_id: Some(1),
//!     product_name: "Widget".into(),
//!     category: "Tools".into(),
//!     quantity_sold: Some(2),
//!     price_per_unit: Some(10.0),
//! }]
//! .into_iter()
//! .collect();
//!
//! let store = DatasetStore::new();
//! store.load(&dataset).unwrap();
//!
//! let snapshot = store.snapshot().unwrap();
//! let conditions = FilterConditions::none().with_categories(["Tools"]);
//! assert_eq!(filter(&snapshot, Some(&conditions)).len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;

pub use config::{DatasetSettings, DATASET_FILE_ENV};
pub use error::{Error, Result};
pub use filter::{filter, DateRange, FilterConditions, Predicate, Selection, SelectionIter};
pub use loader::{load_csv, read_csv};
pub use model::{Dataset, SalesRecord, REQUIRED_COLUMNS};
pub use store::{CsvSource, DatasetSource, DatasetStore};
