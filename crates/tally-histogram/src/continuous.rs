//! Continuous-range histogram over fixed cut points
//!
//! The histogram covers the closed interval `[min, max]`. Interior cut points
//! split it into right-open bins, except the final bin which also contains
//! `max`. A value is placed in the bin of the first cut point greater than it.

use crate::ops::{scale_factor, sort_by_key, sort_by_size};
use crate::strategy::{BinLayout, BinSizeStrategy};
use crate::types::{BinScaling, RangeBin, SortDirection};
use serde::{Deserialize, Serialize};
use tally_core::{Error, MinMaxPair, Result};

/// Options for a [`ContinuousHistogram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousOptions {
    pub accept_undefined: bool,
}

impl Default for ContinuousOptions {
    fn default() -> Self {
        Self {
            accept_undefined: true,
        }
    }
}

/// Histogram with fixed bins over a closed value range
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousHistogram {
    min: f64,
    max: f64,
    cut_points: Vec<f64>,
    counts: Vec<u64>,
    num_undefined: u64,
    options: ContinuousOptions,
}

fn validate(min: f64, max: f64, cut_points: &[f64]) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::InvalidBinConfiguration(
            "bounds must be finite".to_string(),
        ));
    }
    if min > max {
        return Err(Error::InvalidBinConfiguration(format!(
            "min {min} is greater than max {max}"
        )));
    }
    if let Some(cut) = cut_points.iter().find(|&&cut| !(cut > min && cut < max)) {
        return Err(Error::InvalidBinConfiguration(format!(
            "cut point {cut} is not strictly inside ({min}, {max})"
        )));
    }
    if let Some(pair) = cut_points.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(Error::InvalidBinConfiguration(format!(
            "cut points must be strictly increasing, found {} before {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

impl ContinuousHistogram {
    /// Create a histogram from explicit bounds and interior cut points
    pub fn new(min: f64, max: f64, cut_points: Vec<f64>, options: ContinuousOptions) -> Result<Self> {
        validate(min, max, &cut_points)?;
        Ok(Self {
            min,
            max,
            counts: vec![0; cut_points.len() + 1],
            cut_points,
            num_undefined: 0,
            options,
        })
    }

    /// Create a histogram from a precomputed layout
    pub fn from_layout(layout: BinLayout, options: ContinuousOptions) -> Result<Self> {
        Self::new(layout.min, layout.max, layout.cut_points, options)
    }

    /// Create an empty histogram whose bins follow `strategy` over `[min, max]`
    pub fn from_strategy(
        strategy: BinSizeStrategy,
        num_bins: usize,
        min: f64,
        max: f64,
        options: ContinuousOptions,
    ) -> Result<Self> {
        Self::from_layout(strategy.layout(num_bins, min, max)?, options)
    }

    fn bin_index(&self, value: f64) -> usize {
        self.cut_points.partition_point(|&cut| cut <= value)
    }

    /// Count one value; `None` counts as undefined
    pub fn add(&mut self, value: impl Into<Option<f64>>) -> Result<()> {
        self.add_multiple(value, 1)
    }

    /// Count the same value `count` times
    pub fn add_multiple(&mut self, value: impl Into<Option<f64>>, count: u64) -> Result<()> {
        match value.into() {
            None => {
                if !self.options.accept_undefined {
                    return Err(Error::UndefinedRejected);
                }
                self.num_undefined += count;
            }
            Some(value) => {
                if !(value >= self.min && value <= self.max) {
                    return Err(Error::out_of_range(value));
                }
                let idx = self.bin_index(value);
                self.counts[idx] += count;
            }
        }
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

    /// Count a numeric field extracted from a record
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

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn cut_points(&self) -> &[f64] {
        &self.cut_points
    }

    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn num_data_points(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn num_undefined(&self) -> u64 {
        self.num_undefined
    }

    /// Undefined values per data point; NaN before any data point is added
    pub fn ratio_undefined(&self) -> f64 {
        self.num_undefined as f64 / self.num_data_points() as f64
    }

    /// Raw counts in bin order
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Scaled counts in bin order
    pub fn scaled_counts(&self, scaling: BinScaling) -> Vec<f64> {
        let factor = scale_factor(scaling, self.num_data_points(), self.counts.iter().copied());
        self.counts.iter().map(|&c| c as f64 * factor).collect()
    }

    /// Bounds of bin `index`
    pub fn bin_extent(&self, index: usize) -> Result<MinMaxPair<f64>> {
        if index >= self.num_bins() {
            return Err(Error::InvalidParameter(format!(
                "bin index {index} out of range for {} bins",
                self.num_bins()
            )));
        }
        let lower = if index == 0 {
            self.min
        } else {
            self.cut_points[index - 1]
        };
        let upper = self.cut_points.get(index).copied().unwrap_or(self.max);
        MinMaxPair::new(lower, upper)
    }

    /// Display name of bin `index`, e.g. `"0 - 2"`
    pub fn bin_name(&self, index: usize) -> Result<String> {
        let extent = self.bin_extent(index)?;
        Ok(format!("{} - {}", extent.min, extent.max))
    }

    pub fn bins(&self, scaling: BinScaling) -> Vec<RangeBin> {
        let scaled = self.scaled_counts(scaling);
        self.counts
            .iter()
            .zip(scaled)
            .enumerate()
            .filter_map(|(index, (&size, scaled_size))| {
                let extent = self.bin_extent(index).ok()?;
                Some(RangeBin {
                    key: format!("{} - {}", extent.min, extent.max),
                    size,
                    scaled_size,
                    extent,
                })
            })
            .collect()
    }

    pub fn bins_sorted_by_size(&self, scaling: BinScaling, direction: SortDirection) -> Vec<RangeBin> {
        let mut bins = self.bins(scaling);
        sort_by_size(&mut bins, direction);
        bins
    }

    pub fn bins_sorted_by_key(&self, scaling: BinScaling, direction: SortDirection) -> Vec<RangeBin> {
        let mut bins = self.bins(scaling);
        sort_by_key(&mut bins, direction);
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: [f64; 20] = [
        1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0, 1.1, 1.3, 2.6, 5.4, 6.2, 1.7, 2.3, 8.1,
        8.2, 2.0,
    ];

    fn zero_to_ten() -> ContinuousHistogram {
        ContinuousHistogram::new(0.0, 10.0, vec![2.0, 4.0, 6.0, 8.0], ContinuousOptions::default())
            .unwrap()
    }

    #[test]
    fn test_counts_over_fixed_bins() {
        let mut hist = zero_to_ten();
        hist.add_all(SAMPLE).unwrap();
        assert_eq!(hist.counts(), &[5, 4, 3, 2, 6]);
        assert_eq!(hist.num_data_points(), 20);
        assert_eq!(hist.num_bins(), 5);

        let keys: Vec<_> = hist.bins(BinScaling::ByNumDatapoints).into_iter().map(|b| b.key).collect();
        assert_eq!(keys, vec!["0 - 2", "2 - 4", "4 - 6", "6 - 8", "8 - 10"]);
    }

    #[test]
    fn test_boundaries() {
        let mut hist = zero_to_ten();
        hist.add(0.0).unwrap();
        hist.add(2.0).unwrap();
        hist.add(10.0).unwrap();
        assert_eq!(hist.counts(), &[1, 1, 0, 0, 1]);

        assert!(matches!(hist.add(-0.01), Err(Error::OutOfRange(_))));
        assert!(matches!(hist.add(10.01), Err(Error::OutOfRange(_))));
        assert!(matches!(hist.add(f64::NAN), Err(Error::OutOfRange(_))));
        assert_eq!(hist.num_data_points(), 3);
    }

    #[test]
    fn test_invalid_configurations() {
        let opts = ContinuousOptions::default();
        for (min, max, cuts) in [
            (10.0, 0.0, vec![4.0, 8.0]),
            (0.0, 10.0, vec![4.0, 12.0]),
            (5.0, 10.0, vec![4.0, 8.0]),
            (0.0, 10.0, vec![2.0, 6.0, 4.0]),
            (0.0, 10.0, vec![0.0, 5.0]),
            (0.0, 10.0, vec![5.0, 5.0]),
        ] {
            assert!(matches!(
                ContinuousHistogram::new(min, max, cuts, opts),
                Err(Error::InvalidBinConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_undefined_values() {
        let mut hist = zero_to_ten();
        assert!(hist.ratio_undefined().is_nan());
        hist.add(None).unwrap();
        hist.add(3.0).unwrap();
        hist.add(5.0).unwrap();
        assert_eq!(hist.num_undefined(), 1);
        assert_relative_eq!(hist.ratio_undefined(), 0.5);

        let mut strict = ContinuousHistogram::new(
            0.0,
            1.0,
            vec![],
            ContinuousOptions {
                accept_undefined: false,
            },
        )
        .unwrap();
        assert_eq!(strict.add(None), Err(Error::UndefinedRejected));
        assert_eq!(strict.num_undefined(), 0);
    }

    #[test]
    fn test_scaled_sizes() {
        let mut hist = zero_to_ten();
        assert!(hist.scaled_counts(BinScaling::ByNumDatapoints).iter().all(|&s| s == 0.0));

        hist.add_all(SAMPLE).unwrap();
        let total: f64 = hist.scaled_counts(BinScaling::ByNumDatapoints).iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);

        let by_max = hist.scaled_counts(BinScaling::ByMaxBinSize);
        assert_relative_eq!(by_max[4], 1.0);
        assert_relative_eq!(by_max[0], 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extents_and_names() {
        let hist = zero_to_ten();
        assert_eq!(hist.bin_extent(0).unwrap(), MinMaxPair { min: 0.0, max: 2.0 });
        assert_eq!(hist.bin_extent(4).unwrap(), MinMaxPair { min: 8.0, max: 10.0 });
        assert_eq!(hist.bin_name(1).unwrap(), "2 - 4");
        assert!(hist.bin_extent(5).is_err());
    }

    #[test]
    fn test_single_point_range() {
        let mut hist = ContinuousHistogram::new(1.0, 1.0, vec![], ContinuousOptions::default()).unwrap();
        hist.add(1.0).unwrap();
        let bins = hist.bins(BinScaling::ByNumDatapoints);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].extent, MinMaxPair { min: 1.0, max: 1.0 });
        assert_eq!(bins[0].scaled_size, 1.0);
    }

    #[test]
    fn test_from_strategy_and_sorting() {
        let mut hist = ContinuousHistogram::from_strategy(
            BinSizeStrategy::EqualWidth,
            5,
            0.0,
            10.0,
            ContinuousOptions::default(),
        )
        .unwrap();
        hist.add_all(SAMPLE).unwrap();

        let by_size = hist.bins_sorted_by_size(BinScaling::ByNumDatapoints, SortDirection::Descending);
        let sizes: Vec<_> = by_size.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![6, 5, 4, 3, 2]);

        let by_key = hist.bins_sorted_by_key(BinScaling::ByNumDatapoints, SortDirection::Descending);
        assert_eq!(by_key[0].key, "8 - 10");
    }

    #[test]
    fn test_record_inputs() {
        struct Row {
            latency: Option<f64>,
        }
        let rows = [
            Row { latency: Some(1.5) },
            Row { latency: None },
            Row { latency: Some(9.0) },
        ];
        let mut hist = zero_to_ten();
        hist.add_all_from_records(&rows, |r| r.latency).unwrap();
        hist.add_multiple_from_record(&rows[0], |r| r.latency, 3).unwrap();
        hist.add_from_record(&rows[2], |r| r.latency).unwrap();
        assert_eq!(hist.counts(), &[4, 0, 0, 0, 2]);
        assert_eq!(hist.num_undefined(), 1);
    }
}
