//! Kernel density estimation
//!
//! The estimate at `x` is `sum(kernel((x - s) / h)) / (h * n)` over every
//! sample `s`, where `h` is the bandwidth. The bandwidth defaults to
//! Silverman's rule of thumb and can be overridden.

use crate::kernels::Kernel;
use serde::{Deserialize, Serialize};
use tally_core::Result;
use tally_stats::std_dev_population;
use tracing::{debug, instrument};

/// Bandwidths below this are treated as degenerate
pub const MIN_BANDWIDTH: f64 = 1e-4;

/// Silverman's rule of thumb: `1.06 * sd * n^(-1/5)`
///
/// Uses the population standard deviation and needs at least two values.
pub fn silverman_bandwidth(data: &[f64]) -> Result<f64> {
    let sd = std_dev_population(data)?;
    Ok(1.06 * sd * (data.len() as f64).powf(-0.2))
}

/// A sampled location of the density curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Smoothed density of a one dimensional sample
#[derive(Debug, Clone)]
pub struct KernelDensityEstimation {
    data: Vec<f64>,
    kernel: Kernel,
    bandwidth: f64,
}

impl KernelDensityEstimation {
    /// Estimator over `data` with the Gaussian kernel and Silverman bandwidth
    ///
    /// Samples with fewer than two values get a zero bandwidth, which makes
    /// every evaluation return zeros.
    pub fn new(data: &[f64]) -> Self {
        let bandwidth = silverman_bandwidth(data).unwrap_or(0.0);
        debug!(n = data.len(), bandwidth, "Selected Silverman bandwidth");
        Self {
            data: data.to_vec(),
            kernel: Kernel::default(),
            bandwidth,
        }
    }

    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn degenerate_reason(&self) -> Option<&'static str> {
        if self.data.len() < 2 {
            Some("fewer than two samples")
        } else if self.bandwidth.is_nan() || self.bandwidth < MIN_BANDWIDTH {
            Some("bandwidth below threshold")
        } else {
            None
        }
    }

    fn density_unchecked(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let inv_norm = 1.0 / (h * self.data.len() as f64);
        let sum: f64 = self
            .data
            .iter()
            .map(|&s| self.kernel.evaluate((x - s) / h))
            .sum();
        sum * inv_norm
    }

    /// Density at a single location; 0 when the estimate is degenerate
    pub fn density_at(&self, x: f64) -> f64 {
        match self.degenerate_reason() {
            Some(_) => 0.0,
            None => self.density_unchecked(x),
        }
    }

    /// Density sampled at `num_samples` grid points
    ///
    /// Grid point `i` is `start + i * |end - start| / num_samples`, so `end`
    /// itself is not sampled. Degenerate estimates yield zeros. Requesting
    /// zero samples returns an empty vector rather than a single zero.
    #[instrument(skip(self), fields(n = self.data.len(), bandwidth = self.bandwidth, kernel = self.kernel.name()))]
    pub fn evaluate(&self, start: f64, end: f64, num_samples: usize) -> Vec<f64> {
        if num_samples == 0 {
            return Vec::new();
        }
        if let Some(reason) = self.degenerate_reason() {
            debug!(reason, "Density evaluates to zeros");
            return vec![0.0; num_samples];
        }

        let step = (end - start).abs() / num_samples as f64;
        (0..num_samples)
            .map(|i| self.density_unchecked(start + i as f64 * step))
            .collect()
    }

    /// Like [`evaluate`](Self::evaluate) but pairs each density with its grid location
    pub fn evaluate_points(&self, start: f64, end: f64, num_samples: usize) -> Vec<Point> {
        let step = if num_samples == 0 {
            0.0
        } else {
            (end - start).abs() / num_samples as f64
        };
        self.evaluate(start, end, num_samples)
            .into_iter()
            .enumerate()
            .map(|(i, y)| Point {
                x: start + i as f64 * step,
                y,
            })
            .collect()
    }
}
