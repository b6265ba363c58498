//! Histogram binning for reporting and visualization
//!
//! This crate buckets materialized samples into frequency distributions with
//! exact, reproducible boundary rules.
//!
//! # Key Features
//!
//! - **Four histogram shapes**: categorical string keys, integer keys with an
//!   optional accepted range, continuous ranges split by cut points, and named
//!   segments that may overlap or leave gaps
//! - **Bin count estimators**: Square Root, Sturges, Scott and Freedman Diaconis
//! - **Bin size strategies**: equal width or "nice" human friendly boundaries
//! - **Scaling**: by number of data points or by the largest bin
//! - **Undefined values**: counted separately or rejected per histogram
//!
//! # Examples
//!
//! ## Continuous histogram from data
//!
//! ```rust
//! use tally_histogram::{BinScaling, FromDataConfig};
//!
//! let data = [1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0];
//! let hist = FromDataConfig::new().with_num_bins(4).build(&data).unwrap();
//!
//! for bin in hist.bins(BinScaling::ByNumDatapoints) {
//!     println!("{bin}");
//! }
//! assert_eq!(hist.num_data_points(), 10);
//! ```
//!
//! ## Categorical histogram with a locked key set
//!
//! ```rust
//! use tally_histogram::{CategoricalHistogram, CategoricalOptions};
//!
//! let mut hist =
//!     CategoricalHistogram::create_with_locked_bins(["red", "green"], CategoricalOptions::default())
//!         .unwrap();
//! hist.add("red").unwrap();
//! hist.add(None).unwrap();
//! assert!(hist.add("blue").is_err());
//! assert_eq!(hist.num_undefined(), 1);
//! ```
//!
//! ## Integer histogram with gap filling
//!
//! ```rust
//! use tally_histogram::{BinScaling, IntegerHistogram, IntegerOptions};
//!
//! let hist = IntegerHistogram::create_from_data([1.0, 3.0, 3.0], IntegerOptions::default()).unwrap();
//! let sizes: Vec<u64> = hist
//!     .bins_for_full_range(None, BinScaling::ByNumDatapoints)
//!     .iter()
//!     .map(|b| b.size)
//!     .collect();
//! assert_eq!(sizes, vec![1, 0, 2]);
//! ```

pub mod builders;
pub mod categorical;
pub mod continuous;
pub mod estimators;
pub mod histogram;
pub mod integer;
pub mod ops;
pub mod segment;
pub mod strategy;
pub mod types;

pub use builders::{BinCount, FromDataConfig, FromRangeConfig, SegmentHistogramBuilder, DEFAULT_RANGE_BINS};
pub use categorical::{CategoricalHistogram, CategoricalOptions};
pub use continuous::{ContinuousHistogram, ContinuousOptions};
pub use estimators::BinEstimator;
pub use histogram::Histogram;
pub use integer::{IntegerHistogram, IntegerOptions};
pub use ops::{scale_factor, sort_by_key, sort_by_size};
pub use segment::{Segment, SegmentHistogram, SegmentOptions};
pub use strategy::{create_nice_range, nice_number, BinLayout, BinSizeStrategy, NiceRange};
pub use types::{Bin, BinScaling, BinView, IntegerBin, RangeBin, SegmentBin, SortDirection};

// Re-export core types for convenience
pub use tally_core::{Error, MinMaxPair, OptionalRange, Result};
