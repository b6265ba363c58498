//! Bin count estimators
//!
//! Each estimator maps a sample to a recommended number of bins:
//!
//! - **Square Root**: `ceil(sqrt(n))`
//! - **Sturges**: `ceil(log2(n)) + 1`
//! - **Scott**: `range / (3.49 * sd / n^(1/3))`, rounded, using the population
//!   standard deviation
//! - **Freedman Diaconis**: `range / (2 * IQR / n^(1/3))`, rounded
//!
//! Scott and Freedman Diaconis never recommend fewer than one bin. A sample
//! with zero spread also yields one bin.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tally_core::{check_min_len, Error, Result};
use tally_stats::report;

/// Rule for deriving a bin count from a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinEstimator {
    #[default]
    SquareRoot,
    Sturges,
    Scott,
    FreedmanDiaconis,
}

impl BinEstimator {
    pub const ALL: [BinEstimator; 4] = [
        BinEstimator::SquareRoot,
        BinEstimator::Sturges,
        BinEstimator::Scott,
        BinEstimator::FreedmanDiaconis,
    ];

    /// Display name used for lookup by name
    pub fn name(&self) -> &'static str {
        match self {
            BinEstimator::SquareRoot => "Square Root",
            BinEstimator::Sturges => "Sturges",
            BinEstimator::Scott => "Scott",
            BinEstimator::FreedmanDiaconis => "Freedman Diaconis",
        }
    }

    /// Recommended number of bins for `data`
    ///
    /// Square Root and Sturges need one value; Scott and Freedman Diaconis
    /// need two because they consult the statistics report.
    pub fn estimate(&self, data: &[f64]) -> Result<usize> {
        check_min_len(data, 1, self.name())?;
        let n = data.len() as f64;

        let bins = match self {
            BinEstimator::SquareRoot => n.sqrt().ceil().to_usize(),
            BinEstimator::Sturges => (n.log2().ceil() + 1.0).to_usize(),
            BinEstimator::Scott => {
                let r = report(data)?;
                let width = 3.49 * r.std_dev_population / n.cbrt();
                rounded_bin_count(r.range() / width)
            }
            BinEstimator::FreedmanDiaconis => {
                let r = report(data)?;
                let width = 2.0 * r.iqr() / n.cbrt();
                rounded_bin_count(r.range() / width)
            }
        };
        Ok(bins.unwrap_or(1))
    }
}

fn rounded_bin_count(ratio: f64) -> Option<usize> {
    if !ratio.is_finite() {
        return Some(1);
    }
    ratio.round().to_usize().map(|bins| bins.max(1))
}

impl fmt::Display for BinEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BinEstimator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|estimator| estimator.name() == s)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown bin estimator '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [f64; 10] = [1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0];

    #[test]
    fn test_estimates_on_small_sample() {
        assert_eq!(BinEstimator::SquareRoot.estimate(&SMALL).unwrap(), 4);
        assert_eq!(BinEstimator::Sturges.estimate(&SMALL).unwrap(), 5);
        assert_eq!(BinEstimator::Scott.estimate(&SMALL).unwrap(), 2);
        assert_eq!(BinEstimator::FreedmanDiaconis.estimate(&SMALL).unwrap(), 1);
    }

    #[test]
    fn test_square_root_on_twenty_values() {
        let data: Vec<f64> = (0..20).map(f64::from).collect();
        assert_eq!(BinEstimator::SquareRoot.estimate(&data).unwrap(), 5);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(BinEstimator::SquareRoot.estimate(&[3.0]).unwrap(), 1);
        assert_eq!(BinEstimator::Sturges.estimate(&[3.0]).unwrap(), 1);
        assert!(matches!(
            BinEstimator::Scott.estimate(&[3.0]),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_zero_spread_gives_one_bin() {
        let flat = [5.0; 12];
        assert_eq!(BinEstimator::Scott.estimate(&flat).unwrap(), 1);
        assert_eq!(BinEstimator::FreedmanDiaconis.estimate(&flat).unwrap(), 1);
    }

    #[test]
    fn test_empty_input() {
        for estimator in BinEstimator::ALL {
            assert!(matches!(estimator.estimate(&[]), Err(Error::EmptyInput(_))));
        }
    }

    #[test]
    fn test_lookup_by_name() {
        for estimator in BinEstimator::ALL {
            assert_eq!(estimator.to_string().parse::<BinEstimator>().unwrap(), estimator);
        }
        assert_eq!(
            "Freedman Diaconis".parse::<BinEstimator>().unwrap(),
            BinEstimator::FreedmanDiaconis
        );
        assert!("Rice".parse::<BinEstimator>().is_err());
    }
}
