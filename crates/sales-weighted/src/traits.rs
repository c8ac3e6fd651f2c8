//! The descriptive statistic interface shared by weighted and unweighted samples

use sales_core::Result;

/// Descriptive statistics over a prepared (validated, sorted) sample
///
/// Implemented by [`crate::WeightedSample`] and [`crate::UnweightedSample`] so the
/// caller can pick the treatment per column and compute the same set of
/// statistics either way.
pub trait Descriptive {
    /// Number of observations
    fn len(&self) -> usize;

    /// Whether the sample holds no observations
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arithmetic mean
    fn mean(&self) -> Result<f64>;

    /// Median (50th percentile, with the sample's tie rule)
    fn median(&self) -> Result<f64>;

    /// Most frequent (heaviest) value, smallest on ties
    fn mode(&self) -> Result<f64>;

    /// Population standard deviation, `None` when undefined for the sample
    fn std_dev(&self) -> Result<Option<f64>>;

    /// Percentile for a rank `q` in percent (`0..=100`)
    fn percentile(&self, q: f64) -> Result<f64>;
}
