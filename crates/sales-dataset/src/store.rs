//! The load-once dataset store
//!
//! A [`DatasetStore`] is created empty at startup, loaded at most once, and
//! then only read. Readers get a shared [`Arc`] snapshot; no lock is taken on
//! the read path. The store is an ordinary owned value passed to whoever needs
//! it, not a process global.

use crate::error::{Error, Result};
use crate::loader::load_csv;
use crate::model::Dataset;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, instrument};

/// Something that can produce a parsed dataset
pub trait DatasetSource {
    /// Human readable origin, for logs
    fn describe(&self) -> String;

    /// Produce the dataset
    fn read(&self) -> Result<Dataset>;
}

/// A CSV file on disk
#[derive(Debug, Clone, PartialEq)]
pub struct CsvSource {
    pub path: PathBuf,
    pub expected_columns: BTreeSet<String>,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, expected_columns: BTreeSet<String>) -> Self {
        Self {
            path: path.into(),
            expected_columns,
        }
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Dataset> {
        load_csv(&self.path, &self.expected_columns)
    }
}

/// An already parsed dataset, handed over by another ingestion path
impl DatasetSource for Dataset {
    fn describe(&self) -> String {
        format!("in-memory dataset ({} rows)", self.len())
    }

    fn read(&self) -> Result<Dataset> {
        Ok(self.clone())
    }
}

/// Holds the immutable dataset once it has been loaded
#[derive(Debug, Default)]
pub struct DatasetStore {
    dataset: OnceLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// An empty, unavailable store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already loaded with `dataset`
    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        let _ = store.dataset.set(Arc::new(dataset));
        store
    }

    /// Load the dataset from `source`
    ///
    /// Does nothing if the store is already loaded. On failure the error is
    /// logged and returned, and the store stays unavailable.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn load<S: DatasetSource + ?Sized>(&self, source: &S) -> Result<()> {
        if self.is_available() {
            debug!("dataset already loaded, skipping");
            return Ok(());
        }

        let dataset = source.read().map_err(|e| {
            error!(error = %e, "could not load dataset");
            e
        })?;

        let rows = dataset.len();
        if self.dataset.set(Arc::new(dataset)).is_err() {
            debug!("dataset loaded concurrently, keeping the first copy");
        } else {
            info!(rows, "dataset loaded");
        }
        Ok(())
    }

    /// Whether a dataset has been loaded
    pub fn is_available(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Shared handle to the loaded dataset
    pub fn snapshot(&self) -> Result<Arc<Dataset>> {
        self.dataset.get().cloned().ok_or(Error::Unavailable)
    }

    /// Drop the loaded dataset, returning the store to its unavailable state
    ///
    /// Takes `&mut self`, so no reader can be holding a borrow of the store.
    /// Snapshots handed out earlier stay valid.
    pub fn unload(&mut self) -> Option<Arc<Dataset>> {
        self.dataset.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SalesRecord;
    use std::cell::Cell;

    fn dataset(rows: usize) -> Dataset {
        (0..rows)
            .map(|i| SalesRecord {
                date: None,
                product_id: Some(i as u64 + 1),
                product_name: format!("p{i}"),
                category: "A".to_string(),
                quantity_sold: Some(1),
                price_per_unit: Some(1.0),
            })
            .collect()
    }

    struct CountingSource {
        reads: Cell<usize>,
        fail: bool,
    }

    impl DatasetSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        fn read(&self) -> Result<Dataset> {
            self.reads.set(self.reads.get() + 1);
            if self.fail {
                Err(Error::MissingColumns(vec!["date".to_string()]))
            } else {
                Ok(dataset(2))
            }
        }
    }

    #[test]
    fn test_unloaded_store_is_unavailable() {
        let store = DatasetStore::new();
        assert!(!store.is_available());
        assert!(matches!(store.snapshot(), Err(Error::Unavailable)));
    }

    #[test]
    fn test_load_is_idempotent() {
        let store = DatasetStore::new();
        let source = CountingSource { reads: Cell::new(0), fail: false };
        store.load(&source).unwrap();
        store.load(&source).unwrap();
        assert_eq!(source.reads.get(), 1);

        // A different source does not replace the loaded snapshot
        store.load(&dataset(5)).unwrap();
        assert_eq!(store.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_load_leaves_store_unavailable() {
        let store = DatasetStore::new();
        let failing = CountingSource { reads: Cell::new(0), fail: true };
        assert!(matches!(store.load(&failing), Err(Error::MissingColumns(_))));
        assert!(!store.is_available());

        // A later successful load still works
        store.load(&dataset(3)).unwrap();
        assert_eq!(store.snapshot().unwrap().len(), 3);
    }

    #[test]
    fn test_snapshots_share_one_dataset() {
        let store = DatasetStore::with_dataset(dataset(4));
        let a = store.snapshot().unwrap();
        let b = store.snapshot().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unload() {
        let mut store = DatasetStore::with_dataset(dataset(1));
        let held = store.snapshot().unwrap();
        assert!(store.unload().is_some());
        assert!(!store.is_available());
        assert_eq!(held.len(), 1);
    }
}
