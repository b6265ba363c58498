//! Bin output types shared by every histogram

use serde::{Deserialize, Serialize};
use std::fmt;
use tally_core::{MinMaxPair, OptionalRange};

/// Normalization applied to raw bin counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinScaling {
    /// Divide by the number of data points, so scaled sizes sum to 1
    #[default]
    ByNumDatapoints,
    /// Divide by the largest bin, so the largest scaled size is 1
    ByMaxBinSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Read access to the fields every bin shape carries
pub trait BinView {
    fn key(&self) -> &str;
    fn size(&self) -> u64;
    fn scaled_size(&self) -> f64;
}

/// A bin of a categorical histogram, and the common shape of all bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub key: String,
    pub size: u64,
    pub scaled_size: f64,
}

/// A bin keyed by an integer value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerBin {
    pub key: String,
    pub int_key: i64,
    pub size: u64,
    pub scaled_size: f64,
}

/// A bin of a continuous histogram covering a closed extent
///
/// Every bin but the last excludes its upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBin {
    pub key: String,
    pub size: u64,
    pub scaled_size: f64,
    pub extent: MinMaxPair<f64>,
}

/// A bin of a segment histogram; either end of the extent may be open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBin {
    pub key: String,
    pub size: u64,
    pub scaled_size: f64,
    pub extent: OptionalRange<f64>,
}

macro_rules! impl_bin_view {
    ($($ty:ty),*) => {
        $(
            impl BinView for $ty {
                fn key(&self) -> &str {
                    &self.key
                }

                fn size(&self) -> u64 {
                    self.size
                }

                fn scaled_size(&self) -> f64 {
                    self.scaled_size
                }
            }
        )*
    };
}

impl_bin_view!(Bin, IntegerBin, RangeBin, SegmentBin);

impl From<IntegerBin> for Bin {
    fn from(bin: IntegerBin) -> Self {
        Self {
            key: bin.key,
            size: bin.size,
            scaled_size: bin.scaled_size,
        }
    }
}

impl From<RangeBin> for Bin {
    fn from(bin: RangeBin) -> Self {
        Self {
            key: bin.key,
            size: bin.size,
            scaled_size: bin.scaled_size,
        }
    }
}

impl From<SegmentBin> for Bin {
    fn from(bin: SegmentBin) -> Self {
        Self {
            key: bin.key,
            size: bin.size,
            scaled_size: bin.scaled_size,
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: count={}, scaled={:.3}", self.key, self.size, self.scaled_size)
    }
}

impl fmt::Display for RangeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}]: count={}, scaled={:.3}",
            self.extent.min, self.extent.max, self.size, self.scaled_size
        )
    }
}
