//! Closed and optionally-bounded value ranges
//!
//! [`MinMaxPair`] is a closed `{min, max}` interval with `min <= max`;
//! [`OptionalRange`] may leave either side open. Both are matched against
//! values with an explicit [`RangeMatching`] mode that decides whether the
//! upper bound is inclusive.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// How the upper bound of a range is treated when matching a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeMatching {
    /// `min <= value <= max`
    MaxIncluded,
    /// `min <= value < max`
    #[default]
    MaxExcluded,
}

impl RangeMatching {
    fn below_max<T: PartialOrd>(self, value: &T, max: &T) -> bool {
        match self {
            RangeMatching::MaxIncluded => value <= max,
            RangeMatching::MaxExcluded => value < max,
        }
    }
}

/// A closed range with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxPair<T> {
    pub min: T,
    pub max: T,
}

impl<T> MinMaxPair<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    /// Create a pair, failing with [`Error::InvalidRange`] when `min > max`
    /// or the bounds are unordered (NaN).
    pub fn new(min: T, max: T) -> Result<Self> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { min, max }),
            _ => Err(Error::invalid_range(min, max)),
        }
    }

    /// Smallest pair enclosing every pair in `pairs`
    pub fn merge<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut pairs = pairs.into_iter();
        let first = pairs.next().ok_or_else(|| Error::empty_input("merge"))?;
        Ok(pairs.fold(first, |acc, pair| Self {
            min: if pair.min < acc.min { pair.min } else { acc.min },
            max: if pair.max > acc.max { pair.max } else { acc.max },
        }))
    }

    /// Check whether `value` lies inside this range
    pub fn contains(&self, value: T, matching: RangeMatching) -> bool {
        value >= self.min && matching.below_max(&value, &self.max)
    }
}

impl<T> MinMaxPair<T>
where
    T: Sub<Output = T> + Copy,
{
    /// Distance between the bounds
    pub fn span(&self) -> T {
        self.max - self.min
    }
}

impl<T: fmt::Display> fmt::Display for MinMaxPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A range where either bound may be absent, meaning unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionalRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for OptionalRange<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> OptionalRange<T> {
    /// A range that places no constraint on either side
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// True when neither bound is present
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T> OptionalRange<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    /// Create a range, validating `min <= max` when both bounds are present
    pub fn new(min: Option<T>, max: Option<T>) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            MinMaxPair::new(lo, hi)?;
        }
        Ok(Self { min, max })
    }

    /// Check whether `value` satisfies every present bound
    pub fn contains(&self, value: T, matching: RangeMatching) -> bool {
        let above_min = self.min.map_or(true, |min| value >= min);
        let below_max = self.max.map_or(true, |max| matching.below_max(&value, &max));
        above_min && below_max
    }
}

impl<T> From<MinMaxPair<T>> for OptionalRange<T> {
    fn from(pair: MinMaxPair<T>) -> Self {
        Self {
            min: Some(pair.min),
            max: Some(pair.max),
        }
    }
}

/// Check a value against a closed range
pub fn matches_range(value: f64, range: &MinMaxPair<f64>, matching: RangeMatching) -> bool {
    range.contains(value, matching)
}

/// Check a value against an optional range
///
/// Without a range any finite value matches.
pub fn matches_optional_range(
    value: f64,
    range: Option<&OptionalRange<f64>>,
    matching: RangeMatching,
) -> bool {
    match range {
        Some(range) => range.contains(value, matching),
        None => value.is_finite(),
    }
}
