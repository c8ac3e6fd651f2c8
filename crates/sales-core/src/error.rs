//! Error types for summary statistics
//!
//! Provides the numeric error type shared by the sales-stats crates.

use thiserror::Error;

/// Core error type for numeric primitives
#[derive(Error, Debug)]
pub enum Error {
    /// A primitive was invoked on an empty sample
    #[error("Cannot compute statistics of empty data")]
    EmptyData,

    /// Values and weights are not aligned
    #[error("Size mismatch: {values} values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// A weight is negative or not finite
    #[error("Invalid weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// All weights are zero, so no weighted statistic is defined
    #[error("Total weight is zero")]
    ZeroTotalWeight,

    /// NaN or infinite values in the input
    #[error("{context} contains NaN or infinite values")]
    NonFinite { context: String },

    /// Percentile outside of [0, 100]
    #[error("Percentile {q} must be in [0, 100]")]
    InvalidPercentile { q: f64 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite {
            context: context.to_string(),
        }
    }

    /// Check a percentile rank in percent
    pub fn check_percentile(q: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&q) {
            return Err(Error::InvalidPercentile { q });
        }
        Ok(())
    }

    /// Whether this error means the sample carries no usable mass
    /// (as opposed to data that cannot be aggregated at all).
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::EmptyData | Error::ZeroTotalWeight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyData;
        assert_eq!(err.to_string(), "Cannot compute statistics of empty data");

        let err = Error::LengthMismatch { values: 3, weights: 2 };
        assert_eq!(err.to_string(), "Size mismatch: 3 values but 2 weights");

        let err = Error::InvalidWeight { index: 4, weight: -1.0 };
        assert_eq!(err.to_string(), "Invalid weight -1 at index 4");

        let err = Error::non_finite("price_per_unit");
        assert_eq!(
            err.to_string(),
            "price_per_unit contains NaN or infinite values"
        );

        let err = Error::InvalidPercentile { q: 101.0 };
        assert_eq!(err.to_string(), "Percentile 101 must be in [0, 100]");
    }

    #[test]
    fn test_check_percentile() {
        assert!(Error::check_percentile(0.0).is_ok());
        assert!(Error::check_percentile(25.0).is_ok());
        assert!(Error::check_percentile(100.0).is_ok());
        assert!(Error::check_percentile(-0.1).is_err());
        assert!(Error::check_percentile(100.5).is_err());
        assert!(Error::check_percentile(f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_classification() {
        assert!(Error::EmptyData.is_degenerate());
        assert!(Error::ZeroTotalWeight.is_degenerate());
        assert!(!Error::non_finite("x").is_degenerate());
        assert!(!Error::InvalidWeight { index: 0, weight: -2.0 }.is_degenerate());
        assert!(!Error::Computation("median".to_string()).is_degenerate());
    }
}
