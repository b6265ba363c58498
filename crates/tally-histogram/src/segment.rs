//! Segment histogram over named, possibly overlapping ranges
//!
//! A value is counted in every segment whose `[min, max)` contains it, where
//! a missing bound places no constraint on that side. Bin sizes therefore do
//! not have to sum to the number of data points. A value that matches no
//! segment is an outlier and is not a data point.

use crate::ops::{scale_factor, sort_by_key, sort_by_size};
use crate::types::{BinScaling, SegmentBin, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tally_core::{Error, OptionalRange, RangeMatching, Result};

/// A named half-open range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub key: String,
    pub extent: OptionalRange<f64>,
}

impl Segment {
    /// Create a segment, failing with [`Error::InvalidRange`] when both bounds
    /// are present and `min > max`
    pub fn new(key: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Result<Self> {
        Ok(Self {
            key: key.into(),
            extent: OptionalRange::new(min, max)?,
        })
    }

    /// True when `value` lies in `[min, max)`
    pub fn matches(&self, value: f64) -> bool {
        !value.is_nan() && self.extent.contains(value, RangeMatching::MaxExcluded)
    }
}

/// Options for a [`SegmentHistogram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    pub accept_undefined: bool,
    pub accept_outliers: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            accept_undefined: true,
            accept_outliers: true,
        }
    }
}

/// Histogram over explicit segments, kept in definition order
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentHistogram {
    segments: Vec<Segment>,
    counts: Vec<u64>,
    num_data_points: u64,
    num_outliers: u64,
    num_undefined: u64,
    options: SegmentOptions,
}

impl SegmentHistogram {
    /// Create a histogram over `segments`
    ///
    /// Keys must be unique and every segment needs `min <= max` when both
    /// bounds are present, including segments built as struct literals or
    /// deserialized without going through [`Segment::new`].
    pub fn new(segments: Vec<Segment>, options: SegmentOptions) -> Result<Self> {
        for segment in &segments {
            OptionalRange::new(segment.extent.min, segment.extent.max)?;
        }
        let mut seen = BTreeSet::new();
        if let Some(dup) = segments.iter().find(|s| !seen.insert(s.key.as_str())) {
            return Err(Error::InvalidBinConfiguration(format!(
                "duplicate segment key '{}'",
                dup.key
            )));
        }
        Ok(Self {
            counts: vec![0; segments.len()],
            segments,
            num_data_points: 0,
            num_outliers: 0,
            num_undefined: 0,
            options,
        })
    }

    /// Count one value; `None` counts as undefined
    pub fn add(&mut self, value: impl Into<Option<f64>>) -> Result<()> {
        self.add_multiple(value, 1)
    }

    /// Count the same value `count` times
    pub fn add_multiple(&mut self, value: impl Into<Option<f64>>, count: u64) -> Result<()> {
        let value = match value.into() {
            None => {
                if !self.options.accept_undefined {
                    return Err(Error::UndefinedRejected);
                }
                self.num_undefined += count;
                return Ok(());
            }
            Some(value) => value,
        };

        let matching: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.matches(value))
            .map(|(idx, _)| idx)
            .collect();

        if matching.is_empty() {
            if !self.options.accept_outliers {
                return Err(Error::OutlierRejected(value));
            }
            self.num_outliers += count;
            return Ok(());
        }

        for idx in matching {
            self.counts[idx] += count;
        }
        self.num_data_points += count;
        Ok(())
    }

    /// Count every value; stops at the first rejected one
    pub fn add_all<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<f64>>,
    {
        values.into_iter().try_for_each(|value| self.add(value))
    }

    pub fn add_from_record<T, F>(&mut self, record: &T, field: F) -> Result<()>
    where
        F: Fn(&T) -> Option<f64>,
    {
        self.add(field(record))
    }

    pub fn add_all_from_records<T, F>(&mut self, records: &[T], field: F) -> Result<()>
    where
        F: Fn(&T) -> Option<f64>,
    {
        records.iter().try_for_each(|record| self.add(field(record)))
    }

    pub fn add_multiple_from_record<T, F>(&mut self, record: &T, field: F, count: u64) -> Result<()>
    where
        F: Fn(&T) -> Option<f64>,
    {
        self.add_multiple(field(record), count)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Count for the segment named `key`, `None` for unknown segments
    pub fn value(&self, key: &str) -> Option<u64> {
        self.segments
            .iter()
            .position(|s| s.key == key)
            .map(|idx| self.counts[idx])
    }

    pub fn num_bins(&self) -> usize {
        self.segments.len()
    }

    pub fn num_data_points(&self) -> u64 {
        self.num_data_points
    }

    pub fn num_undefined(&self) -> u64 {
        self.num_undefined
    }

    pub fn num_outliers(&self) -> u64 {
        self.num_outliers
    }

    /// Undefined values per data point; NaN before any data point is added
    pub fn ratio_undefined(&self) -> f64 {
        self.num_undefined as f64 / self.num_data_points as f64
    }

    /// Outliers per data point; NaN before any data point is added
    pub fn ratio_outliers(&self) -> f64 {
        self.num_outliers as f64 / self.num_data_points as f64
    }

    /// Bins in segment definition order
    pub fn bins(&self, scaling: BinScaling) -> Vec<SegmentBin> {
        let factor = scale_factor(scaling, self.num_data_points, self.counts.iter().copied());
        self.segments
            .iter()
            .zip(&self.counts)
            .map(|(segment, &size)| SegmentBin {
                key: segment.key.clone(),
                size,
                scaled_size: size as f64 * factor,
                extent: segment.extent,
            })
            .collect()
    }

    pub fn bins_sorted_by_size(&self, scaling: BinScaling, direction: SortDirection) -> Vec<SegmentBin> {
        let mut bins = self.bins(scaling);
        sort_by_size(&mut bins, direction);
        bins
    }

    pub fn bins_sorted_by_key(&self, scaling: BinScaling, direction: SortDirection) -> Vec<SegmentBin> {
        let mut bins = self.bins(scaling);
        sort_by_key(&mut bins, direction);
        bins
    }
}
