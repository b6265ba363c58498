//! Bin size strategies
//!
//! A strategy turns a requested bin count and a value range into a
//! [`BinLayout`]: the outer bounds plus the interior cut points. A range
//! whose ends are almost equal always collapses to a single bin.
//!
//! # Nice ranges
//!
//! [`BinSizeStrategy::EqualNiceWidth`] widens the range so that every cut
//! point is a multiple of 1, 2 or 5 times a power of ten. The span is first
//! raised to the next nice number, then the tick spacing is rounded to the
//! nearest nice number over `span / (num_bins - 1)`. The resulting bin count
//! may differ from the requested one.

use serde::{Deserialize, Serialize};
use tally_core::{almost_equal, Error, MinMaxPair, Result, DEFAULT_EPSILON};
use tracing::debug;

/// Outer bounds and strictly increasing interior cut points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinLayout {
    pub min: f64,
    pub max: f64,
    pub cut_points: Vec<f64>,
}

impl BinLayout {
    pub fn num_bins(&self) -> usize {
        self.cut_points.len() + 1
    }
}

/// A human friendly range with regular tick spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceRange {
    pub min: f64,
    pub max: f64,
    pub num_ticks: usize,
    pub tick_spacing: f64,
}

/// How cut points are placed inside a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinSizeStrategy {
    /// Cut points at `min + i * (max - min) / num_bins`
    #[default]
    EqualWidth,
    /// Cut points on a nice tick grid covering the range
    EqualNiceWidth,
}

impl BinSizeStrategy {
    /// Layout for `num_bins` bins over `[min, max]`
    pub fn layout(&self, num_bins: usize, min: f64, max: f64) -> Result<BinLayout> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be positive".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("bin range"));
        }
        MinMaxPair::new(min, max)?;

        if almost_equal(min, max, DEFAULT_EPSILON) {
            debug!(min, max, num_bins, "degenerate range, using a single bin");
            return Ok(BinLayout {
                min,
                max,
                cut_points: Vec::new(),
            });
        }

        let layout = match self {
            BinSizeStrategy::EqualWidth => {
                let width = (max - min) / num_bins as f64;
                BinLayout {
                    min,
                    max,
                    cut_points: (1..num_bins).map(|i| min + i as f64 * width).collect(),
                }
            }
            BinSizeStrategy::EqualNiceWidth => {
                let nice = create_nice_range(min, max, num_bins);
                if nice.num_ticks != num_bins {
                    debug!(requested = num_bins, actual = nice.num_ticks, "nice range changed bin count");
                }
                // grid points that rounding pushed onto or past a bound are dropped
                let slack = nice.tick_spacing * 1e-9;
                let origin = (min / nice.tick_spacing).floor() * nice.tick_spacing;
                BinLayout {
                    min: nice.min,
                    max: nice.max,
                    cut_points: (1..nice.num_ticks)
                        .map(|i| origin + i as f64 * nice.tick_spacing)
                        .filter(|&cut| cut - nice.min > slack && nice.max - cut > slack)
                        .collect(),
                }
            }
        };
        Ok(layout)
    }

    /// Layout over the extremes of a sample
    pub fn layout_from_data(&self, num_bins: usize, data: &[f64]) -> Result<BinLayout> {
        let range = tally_stats::min_max(data)?;
        self.layout(num_bins, range.min, range.max)
    }
}

/// Round a positive value to 1, 2, 5 or 10 times a power of ten
///
/// With `round` the nearest nice fraction is chosen (thresholds 1.5, 3, 7),
/// otherwise the next nice fraction at or above the value (thresholds 1, 2, 5).
pub fn nice_number(value: f64, round: bool) -> f64 {
    let exponent = value.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = value / magnitude;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * magnitude
}

/// Nice range covering `[min, max]` with roughly `preferred_ticks` intervals
///
/// Expects `min < max`. The bounds are clamped outward when floating point
/// rounding lands a grid bound just inside the requested range, so the result
/// always contains `[min, max]`.
pub fn create_nice_range(min: f64, max: f64, preferred_ticks: usize) -> NiceRange {
    let span = nice_number(max - min, false);
    let divisor = preferred_ticks.saturating_sub(1).max(1) as f64;
    let tick_spacing = nice_number(span / divisor, true);
    let grid_min = (min / tick_spacing).floor() * tick_spacing;
    let grid_max = (max / tick_spacing).ceil() * tick_spacing;
    let num_ticks = ((grid_max - grid_min) / tick_spacing).round() as usize;
    let nice_min = grid_min.min(min);
    let nice_max = grid_max.max(max);

    NiceRange {
        min: nice_min,
        max: nice_max,
        num_ticks: num_ticks.max(1),
        tick_spacing,
    }
}
