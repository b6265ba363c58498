//! Quartiles and five-number summaries
//!
//! Quartiles split the sorted sample in halves. On even counts the halves are
//! `[0, N/2)` and `[N/2, N)`; on odd counts the central value belongs to
//! neither half. Each quartile is the median of its half.

use crate::descriptive::{median_sorted, sorted, sum_squared_deviations};
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_core::{check_min_len, Result};

/// Five-number summary of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
}

impl Quartiles {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.third_quartile - self.first_quartile
    }
}

/// Quartiles plus mean, standard deviations and sample size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub first_quartile: f64,
    pub third_quartile: f64,
    pub std_dev_sample: f64,
    pub std_dev_population: f64,
    pub size: usize,
}

impl StatisticsReport {
    pub fn iqr(&self) -> f64 {
        self.third_quartile - self.first_quartile
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={:.3} q1={:.3} median={:.3} q3={:.3} max={:.3} mean={:.3} sd={:.3}",
            self.size,
            self.min,
            self.first_quartile,
            self.median,
            self.third_quartile,
            self.max,
            self.mean,
            self.std_dev_sample
        )
    }
}

fn quartiles_of_sorted(sorted: &[f64]) -> Result<Quartiles> {
    check_min_len(sorted, 2, "quartiles")?;
    let n = sorted.len();
    let half = n / 2;
    let upper_start = if n % 2 == 0 { half } else { half + 1 };

    Ok(Quartiles {
        min: sorted[0],
        max: sorted[n - 1],
        median: median_sorted(sorted)?,
        first_quartile: median_sorted(&sorted[..half])?,
        third_quartile: median_sorted(&sorted[upper_start..])?,
    })
}

/// Quartiles of a sample with at least two values
pub fn quartiles(data: &[f64]) -> Result<Quartiles> {
    quartiles_of_sorted(&sorted(data))
}

/// Full summary of a sample with at least two values
pub fn report(data: &[f64]) -> Result<StatisticsReport> {
    let q = quartiles(data)?;
    let n = data.len();
    let mean = data.iter().sum::<f64>() / n as f64;
    let ssd = sum_squared_deviations(data, mean);

    Ok(StatisticsReport {
        min: q.min,
        max: q.max,
        mean,
        median: q.median,
        first_quartile: q.first_quartile,
        third_quartile: q.third_quartile,
        std_dev_sample: (ssd / (n - 1) as f64).sqrt(),
        std_dev_population: (ssd / n as f64).sqrt(),
        size: n,
    })
}
