//! Kernel density estimation for one dimensional samples
//!
//! # Examples
//!
//! ```rust
//! use tally_density::{Kernel, KernelDensityEstimation};
//!
//! let data = [1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0];
//! let kde = KernelDensityEstimation::new(&data).with_kernel(Kernel::Epanechnikov);
//!
//! let curve = kde.evaluate(0.0, 10.0, 50);
//! assert_eq!(curve.len(), 50);
//! assert!(curve.iter().all(|&y| y >= 0.0));
//! ```

pub mod kde;
pub mod kernels;

pub use kde::{silverman_bandwidth, KernelDensityEstimation, Point, MIN_BANDWIDTH};
pub use kernels::Kernel;

// Re-export core types for convenience
pub use tally_core::{Error, Result};
