//! The summary service: dataset store, filter and engine wired together

use crate::config::EngineConfig;
use crate::engine::StatisticsEngine;
use crate::error::{Error, Result};
use crate::request::SummaryRequest;
use sales_core::SummaryReport;
use sales_dataset::{filter, DatasetSettings, DatasetStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers [`SummaryRequest`]s against a shared [`DatasetStore`]
#[derive(Debug, Clone)]
pub struct SummaryService {
    store: Arc<DatasetStore>,
    engine: StatisticsEngine,
}

impl SummaryService {
    pub fn new(store: Arc<DatasetStore>, engine: StatisticsEngine) -> Self {
        Self { store, engine }
    }

    /// Load the dataset described by `settings` and build a service over it
    ///
    /// A failed load does not fail startup: the service comes up unavailable
    /// and answers every request with [`Error::DatasetUnavailable`].
    pub fn start(settings: &DatasetSettings, config: EngineConfig) -> Self {
        let store = DatasetStore::new();
        if let Err(e) = store.load(&settings.source()) {
            warn!(error = %e, "starting without a dataset");
        }
        Self::new(Arc::new(store), StatisticsEngine::new(config))
    }

    pub fn store(&self) -> &Arc<DatasetStore> {
        &self.store
    }

    pub fn engine(&self) -> &StatisticsEngine {
        &self.engine
    }

    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    /// Filter the dataset and summarize the requested columns
    pub fn summarize(&self, request: &SummaryRequest) -> Result<SummaryReport> {
        let dataset = self.store.snapshot().map_err(|_| Error::DatasetUnavailable)?;
        request.validate()?;

        let rows = filter(&dataset, request.filters.as_ref());
        debug!(rows = rows.len(), columns = request.columns.len(), "summarizing selection");
        self.engine.compute(&request.columns, &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sales_core::NumericColumn;
    use sales_dataset::{Dataset, DateRange, FilterConditions, SalesRecord};

    fn dataset() -> Dataset {
        let record = |day, id, category: &str, quantity, price| SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day),
            product_id: Some(id),
            product_name: format!("p{id}"),
            category: category.to_string(),
            quantity_sold: Some(quantity),
            price_per_unit: Some(price),
        };
        Dataset::from_records(vec![
            record(1, 1, "A", 2, 10.0),
            record(2, 2, "A", 3, 20.0),
            record(3, 3, "B", 5, 1.0),
        ])
    }

    fn service() -> SummaryService {
        SummaryService::new(
            Arc::new(DatasetStore::with_dataset(dataset())),
            StatisticsEngine::default(),
        )
    }

    #[test]
    fn test_unloaded_store_is_unavailable() {
        let service =
            SummaryService::new(Arc::new(DatasetStore::new()), StatisticsEngine::default());
        assert!(!service.is_available());
        let err = service.summarize(&SummaryRequest::default()).unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.to_string(), "Dataset was not loaded, service unavailable");
    }

    #[test]
    fn test_unavailable_wins_over_invalid_request() {
        let service =
            SummaryService::new(Arc::new(DatasetStore::new()), StatisticsEngine::default());
        let request = SummaryRequest::default()
            .with_filters(FilterConditions::none().with_product_ids([0]));
        assert!(service.summarize(&request).unwrap_err().is_unavailable());
    }

    #[test]
    fn test_summarize_filtered() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        )
        .unwrap();
        let request = SummaryRequest::new([NumericColumn::PricePerUnit])
            .with_filters(FilterConditions::none().with_date_range(range).with_categories(["A"]));
        let report = service().summarize(&request).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(NumericColumn::PricePerUnit).unwrap().mean, Some(16.0));
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let request = SummaryRequest::default()
            .with_filters(FilterConditions::none().with_product_ids([0]));
        let err = service().summarize(&request).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_column_list() {
        let report = service().summarize(&SummaryRequest::new([])).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_start_with_missing_file() {
        let settings = DatasetSettings {
            file_name: "/nonexistent/sales.csv".into(),
            ..DatasetSettings::default()
        };
        let service = SummaryService::start(&settings, EngineConfig::default());
        assert!(!service.is_available());
    }
}
