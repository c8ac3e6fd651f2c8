//! The statistics engine
//!
//! Takes the filtered rows and the requested columns and produces one
//! [`ColumnStatistics`] per column:
//!
//! 1. apply the missing-value policy once, for all columns, so weighted and
//!    unweighted columns are computed over the same rows
//! 2. pick weighted or unweighted treatment from the column table
//! 3. run the primitives, then round
//!
//! An empty working set gives all-null statistics. Data that cannot be
//! aggregated (non-finite values, negative weights) is an [`Error::Computation`].

use crate::config::{EngineConfig, MissingValuePolicy};
use crate::error::{Error, Result};
use sales_core::{ColumnStatistics, NumericColumn, SummaryReport};
use sales_dataset::{SalesRecord, Selection};
use sales_weighted::{Descriptive, UnweightedSample, WeightedSample};
use tracing::{debug, instrument, warn};

const LOWER_QUARTILE: f64 = 25.0;
const UPPER_QUARTILE: f64 = 75.0;

#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    config: EngineConfig,
}

impl StatisticsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute statistics for `columns` over `rows`
    ///
    /// Duplicate column names keep their first position. An empty column list
    /// gives an empty report.
    #[instrument(skip_all, fields(columns = ?columns, rows = rows.len()))]
    pub fn compute(
        &self,
        columns: &[NumericColumn],
        rows: &Selection<'_>,
    ) -> Result<SummaryReport> {
        let mut requested: Vec<NumericColumn> = Vec::with_capacity(columns.len());
        for &column in columns {
            if !requested.contains(&column) {
                requested.push(column);
            }
        }
        let mut report = SummaryReport::new();
        if requested.is_empty() {
            return Ok(report);
        }

        let working = self.working_set(&requested, rows)?;
        if working.len() < rows.len() {
            debug!(
                dropped = rows.len() - working.len(),
                kept = working.len(),
                "excluded rows with missing numeric values"
            );
        }

        for column in requested {
            let stats = if working.is_empty() {
                ColumnStatistics::empty()
            } else {
                self.column_statistics(column, &working)?
            };
            report.insert(column, stats);
        }
        Ok(report)
    }

    /// Rows every column is computed over, per the missing-value policy
    fn working_set<'a>(
        &self,
        requested: &[NumericColumn],
        rows: &Selection<'a>,
    ) -> Result<Vec<&'a SalesRecord>> {
        match self.config.missing_values {
            MissingValuePolicy::Drop => {
                Ok(rows.iter().filter(|r| r.has_numeric_values()).collect())
            }
            MissingValuePolicy::Strict => {
                for column in self.needed_columns(requested) {
                    let missing = rows.iter().filter(|r| r.numeric(column).is_none()).count();
                    if missing > 0 {
                        return Err(Error::computation(
                            column,
                            format!("column '{column}' contains {missing} missing values"),
                        ));
                    }
                }
                Ok(rows.iter().collect())
            }
        }
    }

    /// Requested columns followed by the columns weighting them, without repeats
    fn needed_columns(&self, requested: &[NumericColumn]) -> Vec<NumericColumn> {
        let weights = requested
            .iter()
            .filter_map(|&c| self.config.columns.spec(c).weight);
        let mut needed: Vec<NumericColumn> = Vec::new();
        for column in requested.iter().copied().chain(weights) {
            if !needed.contains(&column) {
                needed.push(column);
            }
        }
        needed
    }

    fn column_statistics(
        &self,
        column: NumericColumn,
        rows: &[&SalesRecord],
    ) -> Result<ColumnStatistics> {
        let values = extract(column, column, rows)?;
        let spec = self.config.columns.spec(column);

        let described = match spec.weight {
            Some(weight_column) => {
                let weights = extract(column, weight_column, rows)?;
                WeightedSample::new(&values, &weights).and_then(|sample| describe(&sample))
            }
            None => UnweightedSample::new(&values).and_then(|sample| describe(&sample)),
        };

        match described {
            Ok(stats) => Ok(stats.rounded(self.config.decimals)),
            Err(e) if e.is_degenerate() => {
                warn!(%column, error = %e, "no usable weight, statistics undefined");
                Ok(ColumnStatistics::empty())
            }
            Err(e) => Err(Error::computation(column, e)),
        }
    }
}

/// Values of `source` for every row; `column` names the statistic being computed
fn extract(
    column: NumericColumn,
    source: NumericColumn,
    rows: &[&SalesRecord],
) -> Result<Vec<f64>> {
    rows.iter()
        .map(|r| r.numeric(source))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| {
            Error::computation(column, format!("column '{source}' has missing values"))
        })
}

fn describe<D: Descriptive>(sample: &D) -> sales_core::Result<ColumnStatistics> {
    Ok(ColumnStatistics {
        mean: Some(sample.mean()?),
        median: Some(sample.median()?),
        mode: Some(sample.mode()?),
        std_dev: sample.std_dev()?,
        percentile_25: Some(sample.percentile(LOWER_QUARTILE)?),
        percentile_75: Some(sample.percentile(UPPER_QUARTILE)?),
    })
}
