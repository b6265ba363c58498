//! Error types for descriptive statistics and histogram binning
//!
//! Provides a unified error type for all tally crates. Every failure is local
//! and synchronous: a rejected insert leaves the receiving structure untouched.

use std::fmt;
use thiserror::Error;

/// Core error type for statistics, binning and density operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input sequence was empty
    #[error("Empty input: {0} requires at least one value")]
    EmptyInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Paired sequences of different length
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// A range whose lower bound exceeds its upper bound
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// Cut points or bounds that cannot describe a continuous histogram
    #[error("Invalid bin configuration: {0}")]
    InvalidBinConfiguration(String),

    /// Key outside a locked key set
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Undefined value on a histogram that rejects undefined values
    #[error("Undefined values are not accepted")]
    UndefinedRejected,

    /// Integer histogram received a fractional or non-finite value
    #[error("Value {0} is not an integer")]
    NotInteger(f64),

    /// Value outside the accepted or configured range
    #[error("Value {0} is out of range")]
    OutOfRange(String),

    /// Segment histogram value matching no segment while outliers are rejected
    #[error("Value {0} does not match any segment")]
    OutlierRejected(f64),

    /// Negative amount passed to a counter increment or decrement
    #[error("Count must not be negative, got {0}")]
    NegativeCount(i64),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(operation.to_string())
    }

    /// Create an error for an undersized sample
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for a reversed range
    pub fn invalid_range<T: fmt::Display>(min: T, max: T) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an error for a value outside the permitted range
    pub fn out_of_range<T: fmt::Display>(value: T) -> Self {
        Self::OutOfRange(value.to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

/// Fail with [`Error::EmptyInput`] or [`Error::InsufficientData`] when `data`
/// holds fewer than `min_len` values.
pub fn check_min_len<T>(data: &[T], min_len: usize, operation: &str) -> Result<()> {
    if data.is_empty() && min_len > 0 {
        return Err(Error::empty_input(operation));
    }
    if data.len() < min_len {
        return Err(Error::insufficient(min_len, data.len()));
    }
    Ok(())
}

/// Fail unless both sequences have the same length and at least `min_len` values.
pub fn check_paired<A, B>(left: &[A], right: &[B], min_len: usize, operation: &str) -> Result<()> {
    if left.len() != right.len() {
        return Err(Error::size_mismatch(left.len(), right.len(), operation));
    }
    check_min_len(left, min_len, operation)
}
