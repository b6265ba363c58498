//! Smoothing kernels
//!
//! All built-in kernels are even functions integrating to one. The Gaussian
//! kernel has unbounded support; the others vanish outside `[-1, 1]`.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;
use tally_core::{Error, Result};

/// Kernel function used by [`crate::KernelDensityEstimation`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Kernel {
    #[default]
    Gaussian,
    Epanechnikov,
    Quartic,
    Cosine,
    /// Caller supplied kernel; not serializable
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

pub fn gaussian(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

pub fn epanechnikov(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        0.75 * (1.0 - x * x)
    } else {
        0.0
    }
}

pub fn quartic(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        let u = 1.0 - x * x;
        15.0 / 16.0 * u * u
    } else {
        0.0
    }
}

pub fn cosine(x: f64) -> f64 {
    if x.abs() <= 1.0 {
        FRAC_PI_4 * (FRAC_PI_2 * x).cos()
    } else {
        0.0
    }
}

impl Kernel {
    pub const BUILT_IN: [Kernel; 4] = [
        Kernel::Gaussian,
        Kernel::Epanechnikov,
        Kernel::Quartic,
        Kernel::Cosine,
    ];

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Kernel::Gaussian => gaussian(x),
            Kernel::Epanechnikov => epanechnikov(x),
            Kernel::Quartic => quartic(x),
            Kernel::Cosine => cosine(x),
            Kernel::Custom(f) => f(x),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Gaussian => "Gaussian",
            Kernel::Epanechnikov => "Epanechnikov",
            Kernel::Quartic => "Quartic",
            Kernel::Cosine => "Cosine",
            Kernel::Custom(_) => "Custom",
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Kernel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::BUILT_IN
            .into_iter()
            .find(|kernel| kernel.name() == s)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown kernel '{s}'")))
    }
}
