//! Per-column summary results

use crate::NumericColumn;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Descriptive statistics of a single numeric column
///
/// Every field is independently optional: `None` means the statistic is
/// undefined for the input (no rows, degenerate sample), never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    pub std_dev: Option<f64>,
    pub percentile_25: Option<f64>,
    pub percentile_75: Option<f64>,
}

impl ColumnStatistics {
    /// Statistics of an empty sample: all fields null
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether every field is null
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(Option::is_none)
    }

    /// Round every populated field to `decimals` places
    pub fn rounded(self, decimals: u32) -> Self {
        let r = |v: Option<f64>| v.map(|x| round_to(x, decimals));
        Self {
            mean: r(self.mean),
            median: r(self.median),
            mode: r(self.mode),
            std_dev: r(self.std_dev),
            percentile_25: r(self.percentile_25),
            percentile_75: r(self.percentile_75),
        }
    }

    fn fields(&self) -> [Option<f64>; 6] {
        [
            self.mean,
            self.median,
            self.mode,
            self.std_dev,
            self.percentile_25,
            self.percentile_75,
        ]
    }
}

/// Round to `decimals` places, exact ties to even
///
/// A scaled value that only looks like a tie after the multiplication is
/// resolved with the exact product residual, so `1.115` (stored just below)
/// rounds down while `2.125` (stored exactly) rounds to `2.12`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let units = if (scaled - scaled.trunc()).abs() == 0.5 {
        // Exact for scales up to 10^22
        let residual = value.mul_add(scale, -scaled);
        if residual > 0.0 {
            scaled.ceil()
        } else if residual < 0.0 {
            scaled.floor()
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    let rounded = units / scale;
    // Keep -0.0 out of results
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Statistics for each requested column, in request order
///
/// Serializes as a map keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryReport {
    entries: Vec<(NumericColumn, ColumnStatistics)>,
}

impl SummaryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; a column already present keeps its first position and value
    pub fn insert(&mut self, column: NumericColumn, stats: ColumnStatistics) {
        if self.get(column).is_none() {
            self.entries.push((column, stats));
        }
    }

    pub fn get(&self, column: NumericColumn) -> Option<&ColumnStatistics> {
        self.entries
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, stats)| stats)
    }

    /// Columns in insertion order
    pub fn columns(&self) -> impl Iterator<Item = NumericColumn> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NumericColumn, &ColumnStatistics)> {
        self.entries.iter().map(|(c, s)| (*c, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SummaryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, stats) in &self.entries {
            map.serialize_entry(column.as_str(), stats)?;
        }
        map.end()
    }
}
