//! Categorical histogram over string keys
//!
//! Bins grow on demand unless the histogram was created with a locked key
//! set, in which case any other key is rejected.

use crate::ops::{scale_factor, sort_by_key, sort_by_size};
use crate::types::{Bin, BinScaling, SortDirection};
use serde::{Deserialize, Serialize};
use tally_core::{CounterMap, CounterMapOptions, Error, Result};

/// Options for a [`CategoricalHistogram`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalOptions {
    pub accept_undefined: bool,
}

impl Default for CategoricalOptions {
    fn default() -> Self {
        Self {
            accept_undefined: true,
        }
    }
}

/// Histogram counting occurrences of string keys
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalHistogram {
    counts: CounterMap<String>,
    num_undefined: u64,
    options: CategoricalOptions,
}

pub(crate) fn to_counter_amount(count: u64) -> Result<i64> {
    i64::try_from(count)
        .map_err(|_| Error::InvalidParameter(format!("count {count} exceeds the counter range")))
}

impl CategoricalHistogram {
    fn with_counter(counts: CounterMap<String>, options: CategoricalOptions) -> Self {
        Self {
            counts,
            num_undefined: 0,
            options,
        }
    }

    pub fn create_empty(options: CategoricalOptions) -> Self {
        Self::with_counter(CounterMap::new(), options)
    }

    /// Histogram whose bins start at zero for every key in `keys`
    pub fn create_with_predefined_bins<I, S>(keys: I, options: CategoricalOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = CounterMap::new();
        counts.set_all(keys.into_iter().map(Into::into), 0)?;
        Ok(Self::with_counter(counts, options))
    }

    /// Histogram restricted to `keys`; adding any other key fails with [`Error::UnknownKey`]
    pub fn create_with_locked_bins<I, S>(keys: I, options: CategoricalOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let mut counts = CounterMap::with_options(CounterMapOptions {
            restrict_keys: Some(keys.clone()),
            ..Default::default()
        });
        counts.set_all(keys, 0)?;
        Ok(Self::with_counter(counts, options))
    }

    pub fn create_from_data<'a, I, V>(values: I, options: CategoricalOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<&'a str>>,
    {
        let mut hist = Self::create_empty(options);
        hist.add_all(values)?;
        Ok(hist)
    }

    /// Count one key; `None` counts as undefined
    pub fn add<'a>(&mut self, key: impl Into<Option<&'a str>>) -> Result<()> {
        self.add_multiple(key, 1)
    }

    /// Count the same key `count` times
    pub fn add_multiple<'a>(&mut self, key: impl Into<Option<&'a str>>, count: u64) -> Result<()> {
        match key.into() {
            None => {
                if !self.options.accept_undefined {
                    return Err(Error::UndefinedRejected);
                }
                self.num_undefined += count;
            }
            Some(key) => {
                self.counts.increase_by(key.to_string(), to_counter_amount(count)?)?;
            }
        }
        Ok(())
    }

    /// Count every key; stops at the first rejected one
    pub fn add_all<'a, I, V>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<&'a str>>,
    {
        keys.into_iter().try_for_each(|key| self.add(key))
    }

    /// Count a string field extracted from a record
    pub fn add_from_record<T, F>(&mut self, record: &T, field: F) -> Result<()>
    where
        F: Fn(&T) -> Option<&str>,
    {
        self.add(field(record))
    }

    pub fn add_all_from_records<T, F>(&mut self, records: &[T], field: F) -> Result<()>
    where
        F: Fn(&T) -> Option<&str>,
    {
        records.iter().try_for_each(|record| self.add(field(record)))
    }

    pub fn add_multiple_from_record<T, F>(&mut self, record: &T, field: F, count: u64) -> Result<()>
    where
        F: Fn(&T) -> Option<&str>,
    {
        self.add_multiple(field(record), count)
    }

    /// Count for `key`, zero if it has never been seen
    pub fn value(&self, key: &str) -> u64 {
        self.counts.get(&key.to_string()).max(0) as u64
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

    /// Bins in ascending key order
    pub fn bins(&self, scaling: BinScaling) -> Vec<Bin> {
        let factor = self.factor(scaling);
        self.counts
            .entries()
            .map(|(key, count)| {
                let size = count.max(0) as u64;
                Bin {
                    key: key.clone(),
                    size,
                    scaled_size: size as f64 * factor,
                }
            })
            .collect()
    }

    /// Bins for the requested keys in request order; unseen keys have size 0
    pub fn bins_for_keys(&self, keys: &[&str], scaling: BinScaling) -> Vec<Bin> {
        let factor = self.factor(scaling);
        keys.iter()
            .map(|&key| {
                let size = self.value(key);
                Bin {
                    key: key.to_string(),
                    size,
                    scaled_size: size as f64 * factor,
                }
            })
            .collect()
    }

    pub fn bins_sorted_by_size(&self, scaling: BinScaling, direction: SortDirection) -> Vec<Bin> {
        let mut bins = self.bins(scaling);
        sort_by_size(&mut bins, direction);
        bins
    }

    pub fn bins_sorted_by_key(&self, scaling: BinScaling, direction: SortDirection) -> Vec<Bin> {
        let mut bins = self.bins(scaling);
        sort_by_key(&mut bins, direction);
        bins
    }
}
