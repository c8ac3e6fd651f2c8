//! Store lifecycle through the facade: load, serve, tear down

use anyhow::Result;
use chrono::NaiveDate;
use sales_stats::prelude::*;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn dataset() -> Dataset {
    let row = |day, id, category: &str, quantity, price| SalesRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, day),
        product_id: Some(id),
        product_name: format!("p{id}"),
        category: category.to_string(),
        quantity_sold: Some(quantity),
        price_per_unit: Some(price),
    };
    Dataset::from_records(vec![
        row(1, 1, "A", 2, 10.0),
        row(2, 2, "B", 3, 20.0),
        row(3, 1, "A", 5, 11.0),
    ])
}

#[test]
fn test_load_serve_teardown() -> Result<()> {
    init_tracing();

    let store = Arc::new(DatasetStore::new());
    let service = SummaryService::new(Arc::clone(&store), StatisticsEngine::default());
    assert!(service.summarize(&SummaryRequest::default()).unwrap_err().is_unavailable());

    store.load(&dataset())?;
    tracing::info!("dataset injected");

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    )?;
    let request: SummaryRequest = serde_json::from_value(serde_json::json!({
        "columns": ["price_per_unit"],
        "filters": {"date_range": range}
    }))?;
    let report = service.summarize(&request)?;
    assert_eq!(report.get(NumericColumn::PricePerUnit).unwrap().mean, Some(16.0));

    drop(service);
    let mut store = Arc::try_unwrap(store).map_err(|_| anyhow::anyhow!("store still shared"))?;
    assert!(store.unload().is_some());
    assert!(!store.is_available());
    Ok(())
}

#[test]
fn test_second_load_keeps_first_dataset() -> Result<()> {
    init_tracing();

    let store = DatasetStore::new();
    store.load(&dataset())?;
    store.load(&Dataset::default())?;
    assert_eq!(store.snapshot()?.len(), 3);
    Ok(())
}
