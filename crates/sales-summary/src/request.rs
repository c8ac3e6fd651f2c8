//! Summary requests

use sales_core::NumericColumn;
use sales_dataset::FilterConditions;
use serde::{Deserialize, Serialize};

/// Which columns to summarize over which rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRequest {
    /// Columns to summarize, in report order
    pub columns: Vec<NumericColumn>,
    /// Row filters; `None` selects every row
    pub filters: Option<FilterConditions>,
}

impl Default for SummaryRequest {
    fn default() -> Self {
        Self {
            columns: NumericColumn::ALL.to_vec(),
            filters: None,
        }
    }
}

impl SummaryRequest {
    /// Request for `columns` over every row
    pub fn new(columns: impl IntoIterator<Item = NumericColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            filters: None,
        }
    }

    pub fn with_filters(mut self, filters: FilterConditions) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn validate(&self) -> sales_dataset::Result<()> {
        match &self.filters {
            Some(filters) => filters.validate(),
            None => Ok(()),
        }
    }
}
