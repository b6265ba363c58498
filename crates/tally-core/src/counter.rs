//! Key to count map with configurable counting policies
//!
//! [`CounterMap`] is the storage behind the discrete histograms. Counters
//! default to zero, may be clamped at zero, may be dropped when they reach
//! zero, and may be restricted to a fixed key universe. Every operation
//! validates its keys before touching any counter.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Policies applied by a [`CounterMap`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterMapOptions<K> {
    /// Allow counters to drop below zero; otherwise they clamp at zero
    pub allow_negative_values: bool,
    /// Remove a key as soon as its counter becomes zero
    pub delete_zero_values: bool,
    /// Fixed key universe; any other key is rejected
    pub restrict_keys: Option<Vec<K>>,
}

impl<K> Default for CounterMapOptions<K> {
    fn default() -> Self {
        Self {
            allow_negative_values: true,
            delete_zero_values: false,
            restrict_keys: None,
        }
    }
}

/// Ordered map from keys to signed counters
#[derive(Debug, Clone, PartialEq)]
pub struct CounterMap<K: Ord> {
    counters: BTreeMap<K, i64>,
    allowed: Option<BTreeSet<K>>,
    allow_negative_values: bool,
    delete_zero_values: bool,
}

impl<K: Ord + Clone + fmt::Debug> Default for CounterMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone + fmt::Debug> CounterMap<K> {
    /// Create an empty map with default policies
    pub fn new() -> Self {
        Self::with_options(CounterMapOptions::default())
    }

    /// Create an empty map with the given policies
    pub fn with_options(options: CounterMapOptions<K>) -> Self {
        Self {
            counters: BTreeMap::new(),
            allowed: options.restrict_keys.map(|keys| keys.into_iter().collect()),
            allow_negative_values: options.allow_negative_values,
            delete_zero_values: options.delete_zero_values,
        }
    }

    fn check_key(&self, key: &K) -> Result<()> {
        match &self.allowed {
            Some(allowed) if !allowed.contains(key) => {
                Err(Error::UnknownKey(format!("{key:?}")))
            }
            _ => Ok(()),
        }
    }

    fn store(&mut self, key: K, value: i64) -> i64 {
        let value = if self.allow_negative_values {
            value
        } else {
            value.max(0)
        };
        if value == 0 && self.delete_zero_values {
            self.counters.remove(&key);
        } else {
            self.counters.insert(key, value);
        }
        value
    }

    /// Increment a counter by one, returning the new value
    pub fn increase(&mut self, key: K) -> Result<i64> {
        self.increase_by(key, 1)
    }

    /// Increment a counter by a non-negative amount, returning the new value
    pub fn increase_by(&mut self, key: K, amount: i64) -> Result<i64> {
        if amount < 0 {
            return Err(Error::NegativeCount(amount));
        }
        self.check_key(&key)?;
        let current = self.get(&key);
        Ok(self.store(key, current.saturating_add(amount)))
    }

    /// Increment every key by one; nothing changes if any key is rejected
    pub fn increase_all<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        keys.iter().try_for_each(|key| self.check_key(key))?;
        for key in keys {
            let current = self.get(&key);
            self.store(key, current.saturating_add(1));
        }
        Ok(())
    }

    /// Decrement a counter by one, returning the new value
    pub fn decrease(&mut self, key: K) -> Result<i64> {
        self.decrease_by(key, 1)
    }

    /// Decrement a counter by a non-negative amount, returning the new value
    pub fn decrease_by(&mut self, key: K, amount: i64) -> Result<i64> {
        if amount < 0 {
            return Err(Error::NegativeCount(amount));
        }
        self.check_key(&key)?;
        let current = self.get(&key);
        Ok(self.store(key, current.saturating_sub(amount)))
    }

    /// Overwrite a counter, returning the stored value
    pub fn set(&mut self, key: K, value: i64) -> Result<i64> {
        self.check_key(&key)?;
        Ok(self.store(key, value))
    }

    /// Overwrite several counters with the same value
    pub fn set_all<I>(&mut self, keys: I, value: i64) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        keys.iter().try_for_each(|key| self.check_key(key))?;
        for key in keys {
            self.store(key, value);
        }
        Ok(())
    }

    /// Current counter value, zero for absent keys
    pub fn get(&self, key: &K) -> i64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.counters.contains_key(key)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.counters.keys()
    }

    /// `(key, count)` pairs in ascending key order
    pub fn entries(&self) -> impl Iterator<Item = (&K, i64)> + '_ {
        self.counters.iter().map(|(key, &value)| (key, value))
    }

    /// Entries ordered by count; ties keep ascending key order
    pub fn entries_sorted_by_value(&self, descending: bool) -> Vec<(&K, i64)> {
        let mut entries: Vec<_> = self.entries().collect();
        if descending {
            entries.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            entries.sort_by(|a, b| a.1.cmp(&b.1));
        }
        entries
    }

    /// Counters for the requested keys, in request order, absent keys as zero
    pub fn entries_for_keys<'a>(&self, keys: &'a [K]) -> Vec<(&'a K, i64)> {
        keys.iter().map(|key| (key, self.get(key))).collect()
    }

    /// Sum over all counters greater than zero
    pub fn sum_of_positive_counters(&self) -> i64 {
        self.counters.values().filter(|&&v| v > 0).sum()
    }

    /// Largest counter, `None` when empty
    pub fn max(&self) -> Option<i64> {
        self.counters.values().copied().max()
    }

    /// Smallest counter, `None` when empty
    pub fn min(&self) -> Option<i64> {
        self.counters.values().copied().min()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Drop a key, returning its counter if present
    pub fn remove(&mut self, key: &K) -> Option<i64> {
        self.counters.remove(key)
    }

    pub fn clear(&mut self) {
        self.counters.clear();
    }
}
