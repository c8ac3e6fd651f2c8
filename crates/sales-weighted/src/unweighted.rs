//! Unweighted descriptive statistics
//!
//! Every observation counts once. Percentiles interpolate linearly between
//! order statistics: for rank `h = (n - 1) q / 100` the result is
//! `x[⌊h⌋] + (h - ⌊h⌋) (x[⌊h⌋ + 1] - x[⌊h⌋])`.

use crate::traits::Descriptive;
use ordered_float::OrderedFloat;
use sales_core::{Error, Result};

/// A validated sample sorted ascending
#[derive(Debug, Clone, PartialEq)]
pub struct UnweightedSample {
    sorted: Vec<f64>,
}

impl UnweightedSample {
    pub fn new(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("values"));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by_key(|&v| OrderedFloat(v));
        Ok(Self { sorted })
    }

    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }
}

impl Descriptive for UnweightedSample {
    fn len(&self) -> usize {
        self.sorted.len()
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.sorted.iter().sum::<f64>() / self.sorted.len() as f64)
    }

    /// Middle order statistic, or the average of the two middle ones
    fn median(&self) -> Result<f64> {
        let n = self.sorted.len();
        let mid = n / 2;
        if n % 2 == 1 {
            Ok(self.sorted[mid])
        } else {
            Ok((self.sorted[mid - 1] + self.sorted[mid]) / 2.0)
        }
    }

    /// Most frequent value, smallest on ties
    fn mode(&self) -> Result<f64> {
        let mut best = (self.sorted[0], 0usize);
        let mut run = (self.sorted[0], 0usize);
        for &value in &self.sorted {
            if value == run.0 {
                run.1 += 1;
            } else {
                run = (value, 1);
            }
            // Strict comparison keeps the earliest, i.e. smallest, tied value
            if run.1 > best.1 {
                best = run;
            }
        }
        Ok(best.0)
    }

    /// Population standard deviation; `None` for a single observation
    fn std_dev(&self) -> Result<Option<f64>> {
        if self.sorted.len() == 1 {
            return Ok(None);
        }
        let mean = self.mean()?;
        let variance = self
            .sorted
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / self.sorted.len() as f64;
        Ok(Some(variance.sqrt()))
    }

    /// Linear interpolation between order statistics
    fn percentile(&self, q: f64) -> Result<f64> {
        Error::check_percentile(q)?;
        let rank = (self.sorted.len() - 1) as f64 * q / 100.0;
        let lower = rank.floor() as usize;
        let fraction = rank - lower as f64;
        match self.sorted.get(lower + 1) {
            Some(&upper) if fraction > 0.0 => {
                let base = self.sorted[lower];
                Ok(base + fraction * (upper - base))
            }
            _ => Ok(self.sorted[lower]),
        }
    }
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    UnweightedSample::new(values)?.mean()
}

/// Median of the order statistics
pub fn median(values: &[f64]) -> Result<f64> {
    UnweightedSample::new(values)?.median()
}

/// Most frequent value; the smallest such value on ties
pub fn mode(values: &[f64]) -> Result<f64> {
    UnweightedSample::new(values)?.mode()
}

/// Population standard deviation; `Ok(None)` for zero or one observation
pub fn std_dev(values: &[f64]) -> Result<Option<f64>> {
    if values.is_empty() {
        return Ok(None);
    }
    UnweightedSample::new(values)?.std_dev()
}

/// Linearly interpolated percentile for `q` in percent
pub fn percentile(values: &[f64], q: f64) -> Result<f64> {
    UnweightedSample::new(values)?.percentile(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validation() {
        assert!(matches!(UnweightedSample::new(&[]), Err(Error::EmptyData)));
        assert!(matches!(
            UnweightedSample::new(&[1.0, f64::NAN]),
            Err(Error::NonFinite { .. })
        ));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_relative_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_relative_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_relative_eq!(median(&[7.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_mode_smallest_on_tie() {
        assert_relative_eq!(mode(&[10.0, 10.0, 20.0]).unwrap(), 10.0);
        assert_relative_eq!(mode(&[10.0, 10.0, 5.0, 5.0]).unwrap(), 5.0);
        assert_relative_eq!(mode(&[3.0, 2.0, 1.0]).unwrap(), 1.0);
        assert_relative_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_std_dev_population() {
        assert_eq!(std_dev(&[42.0]).unwrap(), None);
        assert_eq!(std_dev(&[]).unwrap(), None);
        assert_relative_eq!(
            std_dev(&[1.0, 2.0, 3.0]).unwrap().unwrap(),
            (2.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(std_dev(&[5.0, 5.0]).unwrap(), Some(0.0));
    }

    #[test]
    fn test_percentile_linear() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile(&values, 25.0).unwrap(), 1.75);
        assert_relative_eq!(percentile(&values, 50.0).unwrap(), 2.5);
        assert_relative_eq!(percentile(&values, 75.0).unwrap(), 3.25);
        assert_relative_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_relative_eq!(percentile(&values, 100.0).unwrap(), 4.0);
        assert_relative_eq!(percentile(&[10.0, 20.0, 30.0], 25.0).unwrap(), 15.0);
        assert_relative_eq!(percentile(&[9.0], 75.0).unwrap(), 9.0);
    }

    #[test]
    fn test_unit_weights_agree() {
        let sample = UnweightedSample::new(&[5.0, 1.0, 4.0, 2.0]).unwrap();
        let weighted = crate::WeightedSample::new(sample.sorted(), &[1.0; 4]).unwrap();
        assert_relative_eq!(weighted.mean().unwrap(), sample.mean().unwrap());
        assert_relative_eq!(weighted.median().unwrap(), sample.median().unwrap());
        assert_relative_eq!(
            weighted.std_dev().unwrap().unwrap(),
            sample.std_dev().unwrap().unwrap()
        );
    }
}
