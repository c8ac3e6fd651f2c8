//! Identifiers for the numeric columns of the sales dataset

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric column that statistics can be requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    /// Units sold in the transaction
    QuantitySold,
    /// Price of a single unit
    PricePerUnit,
}

impl NumericColumn {
    /// All numeric columns, in the default request order
    pub const ALL: [NumericColumn; 2] = [NumericColumn::QuantitySold, NumericColumn::PricePerUnit];

    /// Column name as it appears in the dataset header
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuantitySold => "quantity_sold",
            Self::PricePerUnit => "price_per_unit",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not identify a numeric column
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown numeric column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for NumericColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}
