//! Core types shared by the tally statistics crates
//!
//! This crate holds the pieces every other tally crate leans on:
//!
//! - [`Error`] and [`Result`]: the single error type for all operations
//! - [`MinMaxPair`] and [`OptionalRange`]: closed and half-open value ranges
//!   plus [`RangeMatching`] to pick inclusive or exclusive upper bounds
//! - [`CounterMap`]: the key to count store behind the discrete histograms
//! - [`almost_equal`]: relative float comparison used for degenerate ranges
//!
//! # Example
//!
//! ```rust
//! use tally_core::{CounterMap, MinMaxPair, RangeMatching};
//!
//! let range = MinMaxPair::new(1, 3).unwrap();
//! assert!(range.contains(3, RangeMatching::MaxIncluded));
//!
//! let mut counts = CounterMap::new();
//! counts.increase("apples").unwrap();
//! counts.increase_by("pears", 2).unwrap();
//! assert_eq!(counts.sum_of_positive_counters(), 3);
//! ```

pub mod counter;
pub mod error;
pub mod math;
pub mod range;

pub use counter::{CounterMap, CounterMapOptions};
pub use error::{check_min_len, check_paired, Error, Result};
pub use math::{almost_equal, DEFAULT_EPSILON};
pub use range::{matches_optional_range, matches_range, MinMaxPair, OptionalRange, RangeMatching};
