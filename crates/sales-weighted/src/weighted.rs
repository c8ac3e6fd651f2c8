//! Weighted descriptive statistics
//!
//! Each observation contributes in proportion to its weight. Percentiles use
//! the inverted CDF definition: the result is the smallest value whose
//! cumulative weight reaches `q / 100` of the total weight.

use crate::traits::Descriptive;
use ordered_float::OrderedFloat;
use sales_core::{Error, Result};
use std::collections::BTreeMap;

/// A validated `(value, weight)` sample sorted ascending by value
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSample {
    pairs: Vec<(f64, f64)>,
    total_weight: f64,
}

impl WeightedSample {
    /// Build a sample from aligned values and weights
    ///
    /// Fails on empty input, mismatched lengths, non-finite values, and
    /// negative or non-finite weights. Zero weights are allowed; a sample whose
    /// weights are all zero is accepted here but every statistic on it fails
    /// with [`Error::ZeroTotalWeight`].
    pub fn new(values: &[f64], weights: &[f64]) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("values"));
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::InvalidWeight { index, weight });
        }

        let mut pairs: Vec<(f64, f64)> = values
            .iter()
            .copied()
            .zip(weights.iter().copied())
            .collect();
        // Stable, so equal values keep their input order
        pairs.sort_by_key(|&(value, _)| OrderedFloat(value));
        let total_weight = weights.iter().sum();

        Ok(Self { pairs, total_weight })
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The sorted `(value, weight)` pairs
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    fn positive_total(&self) -> Result<f64> {
        if self.total_weight > 0.0 {
            Ok(self.total_weight)
        } else {
            Err(Error::ZeroTotalWeight)
        }
    }

    /// Tolerance for deciding that a cumulative weight hits a target exactly
    fn split_tolerance(&self) -> f64 {
        f64::EPSILON * self.total_weight.max(1.0) * 4.0
    }
}

impl Descriptive for WeightedSample {
    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn mean(&self) -> Result<f64> {
        let total = self.positive_total()?;
        let weighted_sum: f64 = self.pairs.iter().map(|(v, w)| v * w).sum();
        Ok(weighted_sum / total)
    }

    /// Weighted median
    ///
    /// Walks the cumulative weight up to half the total. When the cumulative
    /// weight lands exactly on the half, the weight splits evenly between this
    /// value and the next observation carrying weight, and the median is the
    /// average of the two.
    fn median(&self) -> Result<f64> {
        let target = self.positive_total()? / 2.0;
        let tolerance = self.split_tolerance();

        let mut cumulative = 0.0;
        for (i, &(value, weight)) in self.pairs.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            if cumulative < target - tolerance {
                continue;
            }
            if (cumulative - target).abs() <= tolerance {
                let upper = self.pairs[i + 1..]
                    .iter()
                    .find(|(_, w)| *w > 0.0)
                    .map_or(value, |&(next, _)| next);
                return Ok((value + upper) / 2.0);
            }
            return Ok(value);
        }

        Err(Error::Computation(
            "cumulative weight never reached the median".to_string(),
        ))
    }

    /// Value with the greatest summed weight, smallest value on ties
    fn mode(&self) -> Result<f64> {
        self.positive_total()?;

        let mut sums: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
        for &(value, weight) in &self.pairs {
            *sums.entry(OrderedFloat(value)).or_insert(0.0) += weight;
        }

        // Ascending iteration with a strict comparison keeps the smallest tied value
        let mut best: Option<(f64, f64)> = None;
        for (value, weight) in sums {
            match best {
                Some((_, best_weight)) if weight <= best_weight => {}
                _ => best = Some((value.into_inner(), weight)),
            }
        }

        best.map(|(value, _)| value).ok_or(Error::EmptyData)
    }

    /// Weighted population standard deviation, `sqrt(Σ w (x - μw)² / Σ w)`
    ///
    /// Undefined (`None`) for a single observation of weight one.
    fn std_dev(&self) -> Result<Option<f64>> {
        if let [(_, weight)] = self.pairs.as_slice() {
            if *weight == 1.0 {
                return Ok(None);
            }
        }
        let total = self.positive_total()?;
        let mean = self.mean()?;
        let variance = self
            .pairs
            .iter()
            .map(|(v, w)| w * (v - mean).powi(2))
            .sum::<f64>()
            / total;
        Ok(Some(variance.sqrt()))
    }

    /// Inverted CDF percentile
    fn percentile(&self, q: f64) -> Result<f64> {
        Error::check_percentile(q)?;
        let target = q / 100.0 * self.positive_total()?;

        let mut cumulative = 0.0;
        for &(value, weight) in &self.pairs {
            cumulative += weight;
            if weight > 0.0 && cumulative >= target {
                return Ok(value);
            }
        }

        // Rounding in the cumulative sum can leave q = 100 just short of the total
        self.pairs
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|&(value, _)| value)
            .ok_or(Error::ZeroTotalWeight)
    }
}

/// Weighted arithmetic mean
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    WeightedSample::new(values, weights)?.mean()
}

/// Inverted CDF weighted percentile for `q` in percent
pub fn weighted_percentile(values: &[f64], weights: &[f64], q: f64) -> Result<f64> {
    WeightedSample::new(values, weights)?.percentile(q)
}

/// Weighted median with the exact-split averaging rule
pub fn weighted_median(values: &[f64], weights: &[f64]) -> Result<f64> {
    WeightedSample::new(values, weights)?.median()
}

/// Value with the largest summed weight; the smallest such value on ties
pub fn weighted_mode(values: &[f64], weights: &[f64]) -> Result<f64> {
    WeightedSample::new(values, weights)?.mode()
}

/// Weighted population standard deviation
///
/// Returns `Ok(None)` for an empty sample and for a single observation of
/// weight one, where the variance is undefined rather than zero.
pub fn weighted_std(values: &[f64], weights: &[f64]) -> Result<Option<f64>> {
    if values.is_empty() && weights.is_empty() {
        return Ok(None);
    }
    WeightedSample::new(values, weights)?.std_dev()
}
