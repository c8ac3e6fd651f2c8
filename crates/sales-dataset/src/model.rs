//! Record and dataset types

use chrono::NaiveDate;
use sales_core::NumericColumn;
use serde::{Deserialize, Serialize};

/// Names of the columns every dataset must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "product_id",
    "product_name",
    "category",
    "quantity_sold",
    "price_per_unit",
];

// ---------------------------------------------------------------------------
// SalesRecord – one transaction
// ---------------------------------------------------------------------------

/// One sales transaction (one row of the source table)
///
/// Cells that could not be parsed during ingestion are kept as `None`; the row
/// itself is never discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: Option<NaiveDate>,
    pub product_id: Option<u64>,
    pub product_name: String,
    pub category: String,
    pub quantity_sold: Option<i64>,
    pub price_per_unit: Option<f64>,
}

impl SalesRecord {
    /// Value of a numeric column as `f64`, `None` when missing
    pub fn numeric(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::QuantitySold => self.quantity_sold.map(|q| q as f64),
            NumericColumn::PricePerUnit => self.price_per_unit,
        }
    }

    /// Whether both numeric columns hold a value
    pub fn has_numeric_values(&self) -> bool {
        NumericColumn::ALL
            .iter()
            .all(|&column| self.numeric(column).is_some())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table, in load order
///
/// Immutable once built; the store hands out shared snapshots of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SalesRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
