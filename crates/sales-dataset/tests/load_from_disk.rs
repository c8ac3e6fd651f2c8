//! Loading the dataset from CSV files through the store

use sales_dataset::*;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "date,product_id,product_name,category,quantity_sold,price_per_unit";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    write!(file, "{body}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_store_loads_csv_source() {
    let file = write_csv(
        "2024-01-01,1,Widget,Tools,2,10.0\n\
         2024-01-02,2,Gadget,Toys,3,20.0\n",
    );
    let settings = DatasetSettings {
        file_name: file.path().to_path_buf(),
        ..DatasetSettings::default()
    };

    let store = DatasetStore::new();
    store.load(&settings.source()).unwrap();
    assert!(store.is_available());

    let dataset = store.snapshot().unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[1].category, "Toys");
}

#[test]
fn test_store_stays_unavailable_on_missing_file() {
    let settings = DatasetSettings {
        file_name: "/no/such/dir/sales_data.csv".into(),
        ..DatasetSettings::default()
    };
    let store = DatasetStore::new();
    let err = store.load(&settings.source()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!store.is_available());
}

#[test]
fn test_store_rejects_missing_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,product_id,category").unwrap();
    writeln!(file, "2024-01-01,1,Tools").unwrap();
    file.flush().unwrap();

    let source = CsvSource::new(file.path(), DatasetSettings::default().expected_columns);
    let store = DatasetStore::new();
    match store.load(&source) {
        Err(Error::MissingColumns(columns)) => assert_eq!(
            columns,
            vec!["price_per_unit", "product_name", "quantity_sold"]
        ),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!store.is_available());
}

#[test]
fn test_unparseable_cells_keep_the_row() {
    let file = write_csv(
        "2024-13-45,1,Widget,Tools,2,10.0\n\
         2024-01-02,x,Gadget,Toys,NaN,abc\n",
    );
    let dataset = load_csv(file.path(), &DatasetSettings::default().expected_columns).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[0].date, None);
    assert_eq!(dataset.records()[1].product_id, None);
    assert_eq!(dataset.records()[1].quantity_sold, None);
    assert_eq!(dataset.records()[1].price_per_unit, None);
}
