//! Descriptive statistics for materialized numeric samples
//!
//! This crate provides the scalar measures used by the binning and density
//! crates: extremes, central tendency, dispersion, covariance and both
//! Pearson and Spearman correlation, plus a quartile based summary report.
//!
//! # Examples
//!
//! ```rust
//! use tally_stats::{mean, rank_correlation_coefficient, report};
//!
//! let data = [1.0, 7.0, 3.0, 9.0, 5.0, 12.0, 5.0];
//! assert_eq!(mean(&data).unwrap(), 6.0);
//!
//! let summary = report(&data).unwrap();
//! assert_eq!(summary.first_quartile, 3.0);
//! assert_eq!(summary.third_quartile, 9.0);
//!
//! // Spearman correlation only looks at ranks
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [10.0, 100.0, 1000.0, 10000.0];
//! assert!((rank_correlation_coefficient(&x, &y).unwrap() - 1.0).abs() < 1e-12);
//! ```

pub mod descriptive;
pub mod report;

pub use descriptive::{
    correlation_coefficient, covariance, find_max_object, find_min_object, max, max_object, mean,
    median, median_sorted, min, min_max, min_max_iter, min_max_object, min_object, range,
    rank_correlation_coefficient, ranks, sorted, std_dev_population, std_dev_sample,
    variance_population, variance_sample,
};
pub use report::{quartiles, report, Quartiles, StatisticsReport};
pub use tally_core::{Error, Result};
