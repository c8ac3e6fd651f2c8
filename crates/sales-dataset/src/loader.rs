//! CSV ingestion
//!
//! Reads the sales table, checks that the required columns are present, and
//! coerces cells that do not parse into missing values instead of dropping
//! the row. Textual `NaN` counts as missing; infinities are kept so the
//! statistics layer can reject them.

use crate::error::{Error, Result};
use crate::model::{Dataset, SalesRecord, REQUIRED_COLUMNS};
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load the dataset from a CSV file
pub fn load_csv(path: &Path, expected_columns: &BTreeSet<String>) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let dataset = read_csv(file, expected_columns)?;
    debug!(path = %path.display(), rows = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Parse the dataset from any CSV source
///
/// `expected_columns` is checked in addition to the columns a record needs.
pub fn read_csv<R: Read>(source: R, expected_columns: &BTreeSet<String>) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let layout = ColumnLayout::resolve(&headers, expected_columns)?;

    let mut records = Vec::new();
    let mut incomplete = 0usize;
    for row in reader.records() {
        let record = layout.parse(&row?);
        if !record.has_numeric_values() || record.date.is_none() || record.product_id.is_none() {
            incomplete += 1;
        }
        records.push(record);
    }

    if incomplete > 0 {
        debug!(incomplete, total = records.len(), "rows with missing or unparseable cells");
    }
    Ok(Dataset::from_records(records))
}

/// Positions of the record columns in the header
struct ColumnLayout {
    date: usize,
    product_id: usize,
    product_name: usize,
    category: usize,
    quantity_sold: usize,
    price_per_unit: usize,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, expected_columns: &BTreeSet<String>) -> Result<Self> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        let missing: Vec<String> = expected_columns
            .iter()
            .map(String::as_str)
            .chain(REQUIRED_COLUMNS)
            .filter(|name| !positions.contains_key(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        let at = |name: &str| {
            positions
                .get(name)
                .copied()
                .ok_or_else(|| Error::MissingColumns(vec![name.to_string()]))
        };
        Ok(Self {
            date: at("date")?,
            product_id: at("product_id")?,
            product_name: at("product_name")?,
            category: at("category")?,
            quantity_sold: at("quantity_sold")?,
            price_per_unit: at("price_per_unit")?,
        })
    }

    fn parse(&self, row: &StringRecord) -> SalesRecord {
        let cell = |i: usize| row.get(i).unwrap_or("");
        SalesRecord {
            date: parse_date(cell(self.date)),
            product_id: parse_product_id(cell(self.product_id)),
            product_name: cell(self.product_name).to_string(),
            category: cell(self.category).to_string(),
            quantity_sold: parse_quantity(cell(self.quantity_sold)),
            price_per_unit: parse_price(cell(self.price_per_unit)),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn parse_product_id(s: &str) -> Option<u64> {
    s.parse::<u64>().ok().filter(|&id| id > 0)
}

/// Integers, or floats with no fractional part (`"3.0"`)
fn parse_quantity(s: &str) -> Option<i64> {
    if let Ok(q) = s.parse::<i64>() {
        return Some(q);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_price(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|p| !p.is_nan())
}
