//! Configuration types for the statistics engine

use sales_core::NumericColumn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How rows with missing numeric values are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// Exclude every row missing `quantity_sold` or `price_per_unit`, once,
    /// before any column is computed
    #[default]
    Drop,

    /// Fail the whole computation if a requested column (or the column it is
    /// weighted by) has a missing value among the filtered rows
    Strict,
}

/// How a single column is summarized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Column whose values weight this one; `None` for unweighted statistics
    pub weight: Option<NumericColumn>,
}

impl ColumnSpec {
    pub fn unweighted() -> Self {
        Self { weight: None }
    }

    pub fn weighted_by(column: NumericColumn) -> Self {
        Self {
            weight: Some(column),
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

/// Per-column treatment
///
/// Columns without an entry are summarized unweighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTable {
    specs: BTreeMap<NumericColumn, ColumnSpec>,
}

impl Default for ColumnTable {
    /// A unit price is weighted by the volume sold at that price; quantities
    /// count once per row.
    fn default() -> Self {
        Self::empty()
            .with(
                NumericColumn::PricePerUnit,
                ColumnSpec::weighted_by(NumericColumn::QuantitySold),
            )
            .with(NumericColumn::QuantitySold, ColumnSpec::unweighted())
    }
}

impl ColumnTable {
    /// A table where every column is unweighted
    pub fn empty() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    pub fn with(mut self, column: NumericColumn, spec: ColumnSpec) -> Self {
        self.specs.insert(column, spec);
        self
    }

    pub fn spec(&self, column: NumericColumn) -> ColumnSpec {
        self.specs.get(&column).copied().unwrap_or_default()
    }
}

/// Statistics engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub missing_values: MissingValuePolicy,
    pub columns: ColumnTable,
    /// Decimal places results are rounded to
    pub decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            missing_values: MissingValuePolicy::Drop,
            columns: ColumnTable::default(),
            decimals: 2,
        }
    }
}

impl EngineConfig {
    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    pub fn with_columns(mut self, columns: ColumnTable) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }
}
