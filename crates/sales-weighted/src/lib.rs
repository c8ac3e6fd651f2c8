//! Weighted and unweighted descriptive statistic primitives
//!
//! All primitives are pure functions over aligned `(values, weights)` slices
//! (or plain `values` for the unweighted variants). They fail only on inputs
//! that cannot be aggregated: empty data, misaligned weights, non-finite
//! values, negative weights, or a total weight of zero.
//!
//! | Statistic | Weighted | Unweighted |
//! |-----------|----------|------------|
//! | mean | `Σ w x / Σ w` | arithmetic mean |
//! | median | inverted CDF at 50%, averaged on an exact split | middle order statistic(s) |
//! | mode | heaviest value, smallest on ties | most frequent value, smallest on ties |
//! | std dev | population, `None` for one unit-weight point | population, `None` for one point |
//! | percentile | inverted CDF | linear interpolation |
//!
//! # Example
//!
//! ```rust
//! use sales_weighted::{weighted_mean, weighted_median, weighted_std};
//!
//! let prices = [10.0, 20.0];
//! let quantities = [2.0, 3.0];
//!
//! assert_eq!(weighted_mean(&prices, &quantities).unwrap(), 16.0);
//! assert_eq!(weighted_median(&prices, &quantities).unwrap(), 20.0);
//! assert_eq!(weighted_std(&[42.0], &[1.0]).unwrap(), None);
//! ```
//!
//! When several statistics are needed over the same column, build a
//! [`WeightedSample`] or [`UnweightedSample`] once and use the
//! [`Descriptive`] methods so the data is validated and sorted a single time.

pub mod traits;
pub mod unweighted;
pub mod weighted;

pub use traits::Descriptive;
pub use unweighted::{mean, median, mode, percentile, std_dev, UnweightedSample};
pub use weighted::{
    weighted_mean, weighted_median, weighted_mode, weighted_percentile, weighted_std,
    WeightedSample,
};
