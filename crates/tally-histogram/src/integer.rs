//! Integer histogram with optional accepted range
//!
//! Values must be mathematical integers and, when an accepted range is set,
//! lie inside it with both ends inclusive. The histogram also tracks the
//! observed range of accepted values so sparse data can be gap-filled with
//! [`IntegerHistogram::bins_for_full_range`].

use crate::categorical::to_counter_amount;
use crate::ops::{scale_factor, sort_by_key, sort_by_size};
use crate::types::{BinScaling, IntegerBin, SortDirection};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tally_core::{CounterMap, Error, MinMaxPair, OptionalRange, RangeMatching, Result};

/// Options for an [`IntegerHistogram`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerOptions {
    /// Inclusive bounds for accepted values; unbounded by default
    pub accepted_range: OptionalRange<i64>,
    pub accept_undefined: bool,
}

impl Default for IntegerOptions {
    fn default() -> Self {
        Self {
            accepted_range: OptionalRange::unbounded(),
            accept_undefined: true,
        }
    }
}

/// Histogram counting integer values
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerHistogram {
    counts: CounterMap<i64>,
    num_undefined: u64,
    value_range: Option<MinMaxPair<i64>>,
    options: IntegerOptions,
}

fn to_integer(value: f64) -> Result<i64> {
    if value.fract() != 0.0 {
        return Err(Error::NotInteger(value));
    }
    value.to_i64().ok_or(Error::NotInteger(value))
}

impl IntegerHistogram {
    pub fn create_empty(options: IntegerOptions) -> Self {
        Self {
            counts: CounterMap::new(),
            num_undefined: 0,
            value_range: None,
            options,
        }
    }

    /// Empty histogram whose observed range starts as `range`
    pub fn create_with_predefined_range(range: MinMaxPair<i64>, options: IntegerOptions) -> Self {
        let mut hist = Self::create_empty(options);
        hist.value_range = Some(range);
        hist
    }

    /// Empty histogram accepting only values inside `range`
    ///
    /// The observed range also starts as `range`.
    pub fn create_with_locked_range(range: MinMaxPair<i64>, options: IntegerOptions) -> Self {
        let options = IntegerOptions {
            accepted_range: range.into(),
            ..options
        };
        Self::create_with_predefined_range(range, options)
    }

    pub fn create_from_data<I, V>(values: I, options: IntegerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<f64>>,
    {
        let mut hist = Self::create_empty(options);
        hist.add_all(values)?;
        Ok(hist)
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
                Ok(())
            }
            Some(value) => self.add_int_multiple(to_integer(value)?, count),
        }
    }

    /// Count an integer directly
    pub fn add_int(&mut self, value: i64) -> Result<()> {
        self.add_int_multiple(value, 1)
    }

    fn add_int_multiple(&mut self, value: i64, count: u64) -> Result<()> {
        if !self.options.accepted_range.contains(value, RangeMatching::MaxIncluded) {
            return Err(Error::out_of_range(value));
        }
        self.counts.increase_by(value, to_counter_amount(count)?)?;
        self.value_range = Some(match self.value_range {
            Some(range) => MinMaxPair {
                min: range.min.min(value),
                max: range.max.max(value),
            },
            None => MinMaxPair {
                min: value,
                max: value,
            },
        });
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

    /// Count for `key`, zero if it has never been seen
    pub fn value(&self, key: i64) -> u64 {
        self.counts.get(&key).max(0) as u64
    }

    /// Smallest and largest value seen, seeded by the predefined range if any
    pub fn value_range(&self) -> Option<MinMaxPair<i64>> {
        self.value_range
    }

    pub fn accepted_range(&self) -> OptionalRange<i64> {
        self.options.accepted_range
    }

    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn num_data_points(&self) -> u64 {
        self.counts.sum_of_positive_counters().max(0) as u64
    }

    pub fn num_undefined(&self) -> u64 {
        self.num_undefined
    }

    /// Undefined values per data point; NaN before any data point is added
    pub fn ratio_undefined(&self) -> f64 {
        self.num_undefined as f64 / self.num_data_points() as f64
    }

    fn factor(&self, scaling: BinScaling) -> f64 {
        let sizes = self.counts.entries().map(|(_, v)| v.max(0) as u64);
        scale_factor(scaling, self.num_data_points(), sizes)
    }

    fn make_bin(&self, key: i64, factor: f64) -> IntegerBin {
        let size = self.value(key);
        IntegerBin {
            key: key.to_string(),
            int_key: key,
            size,
            scaled_size: size as f64 * factor,
        }
    }

    /// Bins for every value seen, in ascending order
    pub fn bins(&self, scaling: BinScaling) -> Vec<IntegerBin> {
        let factor = self.factor(scaling);
        self.counts
            .keys()
            .map(|&key| self.make_bin(key, factor))
            .collect()
    }

    /// Bins for the requested keys in request order; unseen keys have size 0
    pub fn bins_for_keys(&self, keys: &[i64], scaling: BinScaling) -> Vec<IntegerBin> {
        let factor = self.factor(scaling);
        keys.iter().map(|&key| self.make_bin(key, factor)).collect()
    }

    /// One bin per integer in `range`, or in the observed range when `None`
    ///
    /// Returns no bins when neither range is known.
    pub fn bins_for_full_range(
        &self,
        range: Option<MinMaxPair<i64>>,
        scaling: BinScaling,
    ) -> Vec<IntegerBin> {
        let Some(range) = range.or(self.value_range) else {
            return Vec::new();
        };
        let factor = self.factor(scaling);
        (range.min..=range.max)
            .map(|key| self.make_bin(key, factor))
            .collect()
    }

    pub fn bins_sorted_by_size(&self, scaling: BinScaling, direction: SortDirection) -> Vec<IntegerBin> {
        let mut bins = self.bins(scaling);
        sort_by_size(&mut bins, direction);
        bins
    }

    pub fn bins_sorted_by_key(&self, scaling: BinScaling, direction: SortDirection) -> Vec<IntegerBin> {
        let mut bins = self.bins(scaling);
        sort_by_key(&mut bins, direction);
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> IntegerHistogram {
        IntegerHistogram::create_from_data(
            [1.0, 3.0, 5.0, 2.0, 2.0, 1.0, 2.0, 6.0],
            IntegerOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_from_data() {
        let hist = sample();
        assert_eq!(hist.num_data_points(), 8);
        assert_eq!(hist.num_bins(), 5);

        let bins = hist.bins(BinScaling::ByNumDatapoints);
        let pairs: Vec<_> = bins.iter().map(|b| (b.int_key, b.size)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 1), (5, 1), (6, 1)]);
        assert_eq!(bins[1].key, "2");
        assert_relative_eq!(bins[1].scaled_size, 3.0 / 8.0);
        assert_eq!(hist.value_range(), Some(MinMaxPair { min: 1, max: 6 }));
    }

    #[test]
    fn test_rejects_non_integers() {
        let mut hist = IntegerHistogram::create_empty(IntegerOptions::default());
        assert_eq!(hist.add(1.5), Err(Error::NotInteger(1.5)));
        assert!(matches!(hist.add(f64::NAN), Err(Error::NotInteger(_))));
        assert!(matches!(hist.add(f64::INFINITY), Err(Error::NotInteger(_))));
        assert!(hist.add(-4.0).is_ok());
        assert_eq!(hist.num_data_points(), 1);
    }

    #[test]
    fn test_accepted_range_is_inclusive() {
        let options = IntegerOptions {
            accepted_range: OptionalRange::new(Some(1), Some(3)).unwrap(),
            ..Default::default()
        };
        let mut hist = IntegerHistogram::create_empty(options);
        assert!(matches!(hist.add(0.0), Err(Error::OutOfRange(_))));
        assert!(matches!(hist.add(4.0), Err(Error::OutOfRange(_))));
        hist.add(1.0).unwrap();
        hist.add(3.0).unwrap();
        assert_eq!(hist.num_data_points(), 2);
        assert_eq!(hist.value_range(), Some(MinMaxPair { min: 1, max: 3 }));
    }

    #[test]
    fn test_locked_range() {
        let range = MinMaxPair::new(10, 12).unwrap();
        let mut hist = IntegerHistogram::create_with_locked_range(range, IntegerOptions::default());
        assert_eq!(hist.value_range(), Some(range));
        assert!(hist.add_int(13).is_err());
        hist.add_int(11).unwrap();

        let full = hist.bins_for_full_range(None, BinScaling::ByNumDatapoints);
        let sizes: Vec<_> = full.iter().map(|b| (b.int_key, b.size)).collect();
        assert_eq!(sizes, vec![(10, 0), (11, 1), (12, 0)]);
    }

    #[test]
    fn test_predefined_range_grows() {
        let mut hist = IntegerHistogram::create_with_predefined_range(
            MinMaxPair::new(0, 2).unwrap(),
            IntegerOptions::default(),
        );
        assert_eq!(hist.num_bins(), 0);
        hist.add(5.0).unwrap();
        assert_eq!(hist.value_range(), Some(MinMaxPair { min: 0, max: 5 }));
    }

    #[test]
    fn test_full_range_fills_gaps() {
        let hist = sample();
        let full = hist.bins_for_full_range(None, BinScaling::ByNumDatapoints);
        let sizes: Vec<_> = full.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![2, 3, 1, 0, 1, 1]);

        let custom = hist.bins_for_full_range(Some(MinMaxPair::new(-1, 1).unwrap()), BinScaling::ByMaxBinSize);
        let sizes: Vec<_> = custom.iter().map(|b| (b.int_key, b.size)).collect();
        assert_eq!(sizes, vec![(-1, 0), (0, 0), (1, 2)]);
        assert_relative_eq!(custom[2].scaled_size, 2.0 / 3.0);

        let empty = IntegerHistogram::create_empty(IntegerOptions::default());
        assert!(empty.bins_for_full_range(None, BinScaling::ByNumDatapoints).is_empty());
    }

    #[test]
    fn test_bins_for_keys_and_sorting() {
        let hist = sample();
        let bins = hist.bins_for_keys(&[6, 4, 2], BinScaling::ByNumDatapoints);
        let sizes: Vec<_> = bins.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![1, 0, 3]);

        let sorted = hist.bins_sorted_by_size(BinScaling::ByNumDatapoints, SortDirection::Descending);
        assert_eq!(sorted[0].int_key, 2);
        assert_eq!(sorted[1].int_key, 1);
    }

    #[test]
    fn test_undefined_handling() {
        let mut hist = IntegerHistogram::create_empty(IntegerOptions {
            accept_undefined: false,
            ..Default::default()
        });
        assert_eq!(hist.add(None), Err(Error::UndefinedRejected));
        assert!(hist.ratio_undefined().is_nan());

        let mut lenient = sample();
        lenient.add_multiple(None, 2).unwrap();
        assert_eq!(lenient.num_undefined(), 2);
        assert_relative_eq!(lenient.ratio_undefined(), 0.25);
    }
}
