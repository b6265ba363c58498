//! Descriptive statistics, histogram binning and kernel density estimation
//!
//! This crate re-exports the workspace members:
//!
//! - [`tally_core`]: errors, ranges, the counting map and float comparison
//! - [`tally_stats`]: scalar statistics and the quartile report
//! - [`tally_histogram`]: estimators, bin strategies and the four histogram types
//! - [`tally_density`]: kernels and kernel density estimation
//!
//! # Examples
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let data = [1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0];
//!
//! let summary = report(&data).unwrap();
//! assert_eq!(summary.size, 10);
//!
//! let hist = FromDataConfig::new()
//!     .with_bin_estimator(BinEstimator::Sturges)
//!     .build(&data)
//!     .unwrap();
//! assert_eq!(hist.num_bins(), 5);
//!
//! let curve = KernelDensityEstimation::new(&data).evaluate(0.0, 10.0, 20);
//! assert_eq!(curve.len(), 20);
//! ```

pub use tally_core;
pub use tally_density;
pub use tally_histogram;
pub use tally_stats;

pub use tally_core::{Error, Result};

/// Commonly used types and functions
pub mod prelude {
    pub use tally_core::{
        almost_equal, matches_optional_range, matches_range, CounterMap, CounterMapOptions, Error,
        MinMaxPair, OptionalRange, RangeMatching, Result,
    };
    pub use tally_density::{silverman_bandwidth, Kernel, KernelDensityEstimation, Point};
    pub use tally_histogram::{
        Bin, BinCount, BinEstimator, BinScaling, BinSizeStrategy, BinView, CategoricalHistogram,
        CategoricalOptions, ContinuousHistogram, ContinuousOptions, FromDataConfig, FromRangeConfig,
        Histogram, IntegerHistogram, IntegerOptions, Segment, SegmentHistogram,
        SegmentHistogramBuilder, SegmentOptions, SortDirection,
    };
    pub use tally_stats::{
        correlation_coefficient, covariance, mean, median, rank_correlation_coefficient, report,
        std_dev_population, std_dev_sample, variance_population, variance_sample, StatisticsReport,
    };
}
