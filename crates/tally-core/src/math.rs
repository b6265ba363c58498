//! Floating point helpers shared across the tally crates

/// Default relative tolerance used when deciding a value range is degenerate
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Compare two floats by relative error
///
/// Exactly equal values always compare equal. When either value is zero or
/// both are subnormal the difference is compared against
/// `epsilon * f64::MIN_POSITIVE`, otherwise against `epsilon` times the sum
/// of magnitudes.
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }

    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();

    if a == 0.0 || b == 0.0 || abs_a + abs_b < f64::MIN_POSITIVE {
        diff < epsilon * f64::MIN_POSITIVE
    } else {
        diff / (abs_a + abs_b).min(f64::MAX) < epsilon
    }
}
