//! Configuration structs that assemble histograms
//!
//! Each config is a plain value built with consuming `with_*` calls and
//! validated once by `build`.
//!
//! ```rust
//! use tally_histogram::{BinEstimator, FromDataConfig, FromRangeConfig, SegmentHistogramBuilder};
//!
//! let data = [1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0];
//! let hist = FromDataConfig::new()
//!     .with_bin_estimator(BinEstimator::Sturges)
//!     .build(&data)
//!     .unwrap();
//! assert_eq!(hist.num_bins(), 5);
//!
//! let empty = FromRangeConfig::new().with_num_bins(4).build(0.0, 100.0).unwrap();
//! assert_eq!(empty.cut_points(), &[25.0, 50.0, 75.0]);
//!
//! let segments = SegmentHistogramBuilder::new()
//!     .with_segment("low", None, Some(5.0))
//!     .with_segment("high", Some(5.0), None)
//!     .build()
//!     .unwrap();
//! assert_eq!(segments.num_bins(), 2);
//! ```

use crate::continuous::{ContinuousHistogram, ContinuousOptions};
use crate::estimators::BinEstimator;
use crate::segment::{Segment, SegmentHistogram, SegmentOptions};
use crate::strategy::BinSizeStrategy;
use serde::{Deserialize, Serialize};
use tally_core::{Error, MinMaxPair, Result};
use tracing::{debug, instrument};

/// Default number of bins for [`FromRangeConfig`]
pub const DEFAULT_RANGE_BINS: usize = 6;

fn strategy_for(nice_ranges: bool) -> BinSizeStrategy {
    if nice_ranges {
        BinSizeStrategy::EqualNiceWidth
    } else {
        BinSizeStrategy::EqualWidth
    }
}

fn check_num_bins(num_bins: usize) -> Result<()> {
    if num_bins == 0 {
        return Err(Error::InvalidParameter(
            "number of bins must be positive".to_string(),
        ));
    }
    Ok(())
}

/// How the number of bins is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinCount {
    Fixed(usize),
    Estimated(BinEstimator),
}

impl Default for BinCount {
    fn default() -> Self {
        BinCount::Estimated(BinEstimator::default())
    }
}

/// Builds a [`ContinuousHistogram`] whose range is taken from the data
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FromDataConfig {
    pub bin_count: BinCount,
    pub nice_ranges: bool,
    pub options: ContinuousOptions,
}

impl FromDataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use exactly `num_bins` bins; replaces any estimator
    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.bin_count = BinCount::Fixed(num_bins);
        self
    }

    /// Estimate the bin count from the data; replaces any fixed count
    pub fn with_bin_estimator(mut self, estimator: BinEstimator) -> Self {
        self.bin_count = BinCount::Estimated(estimator);
        self
    }

    /// Round the range and cut points to nice numbers
    pub fn with_nice_ranges(mut self, nice_ranges: bool) -> Self {
        self.nice_ranges = nice_ranges;
        self
    }

    pub fn with_accept_undefined(mut self, accept_undefined: bool) -> Self {
        self.options.accept_undefined = accept_undefined;
        self
    }

    /// Build a histogram and count every value of `data`
    pub fn build(&self, data: &[f64]) -> Result<ContinuousHistogram> {
        self.build_with_undefined(&data.iter().copied().map(Some).collect::<Vec<_>>())
    }

    /// Build from data that may contain undefined values
    ///
    /// Undefined values do not influence the range or bin count but are
    /// counted as undefined by the resulting histogram.
    #[instrument(skip(self, data), fields(n = data.len(), nice = self.nice_ranges))]
    pub fn build_with_undefined(&self, data: &[Option<f64>]) -> Result<ContinuousHistogram> {
        let defined: Vec<f64> = data.iter().flatten().copied().collect();

        let num_bins = match self.bin_count {
            BinCount::Fixed(num_bins) => num_bins,
            BinCount::Estimated(estimator) => {
                let num_bins = estimator.estimate(&defined)?;
                debug!(%estimator, num_bins, "estimated bin count");
                num_bins
            }
        };
        check_num_bins(num_bins)?;

        let layout = strategy_for(self.nice_ranges).layout_from_data(num_bins, &defined)?;
        debug!(requested = num_bins, actual = layout.num_bins(), "bin layout ready");

        let mut hist = ContinuousHistogram::from_layout(layout, self.options)?;
        hist.add_all(data.iter().copied())?;
        Ok(hist)
    }
}

/// Builds an empty [`ContinuousHistogram`] over an explicit range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FromRangeConfig {
    pub num_bins: usize,
    pub nice_ranges: bool,
    pub options: ContinuousOptions,
}

impl Default for FromRangeConfig {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_RANGE_BINS,
            nice_ranges: false,
            options: ContinuousOptions::default(),
        }
    }
}

impl FromRangeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    pub fn with_nice_ranges(mut self, nice_ranges: bool) -> Self {
        self.nice_ranges = nice_ranges;
        self
    }

    pub fn with_accept_undefined(mut self, accept_undefined: bool) -> Self {
        self.options.accept_undefined = accept_undefined;
        self
    }

    pub fn build(&self, min: f64, max: f64) -> Result<ContinuousHistogram> {
        check_num_bins(self.num_bins)?;
        let layout = strategy_for(self.nice_ranges).layout(self.num_bins, min, max)?;
        ContinuousHistogram::from_layout(layout, self.options)
    }

    pub fn build_from_pair(&self, range: MinMaxPair<f64>) -> Result<ContinuousHistogram> {
        self.build(range.min, range.max)
    }
}

/// Builds a [`SegmentHistogram`] from segment definitions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentHistogramBuilder {
    segments: Vec<(String, Option<f64>, Option<f64>)>,
    options: SegmentOptions,
}

impl SegmentHistogramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment covering `[min, max)`; `None` leaves that side open
    pub fn with_segment(mut self, key: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        self.segments.push((key.into(), min, max));
        self
    }

    pub fn with_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>, Option<f64>)>,
        S: Into<String>,
    {
        self.segments
            .extend(segments.into_iter().map(|(key, min, max)| (key.into(), min, max)));
        self
    }

    pub fn with_accept_undefined(mut self, accept_undefined: bool) -> Self {
        self.options.accept_undefined = accept_undefined;
        self
    }

    pub fn with_accept_outliers(mut self, accept_outliers: bool) -> Self {
        self.options.accept_outliers = accept_outliers;
        self
    }

    pub fn build(&self) -> Result<SegmentHistogram> {
        let segments = self
            .segments
            .iter()
            .map(|(key, min, max)| Segment::new(key.clone(), *min, *max))
            .collect::<Result<Vec<_>>>()?;
        SegmentHistogram::new(segments, self.options)
    }
}
