//! Small numeric helpers
use nalgebra::Matrix2;

/// Round a value to the given number of decimal places.
///
/// Ties are rounded to the nearest even digit, so `0.125` becomes `0.12` while `0.375` becomes `0.38`.
/// Values too large to be scaled carry no fractional digits and are returned unchanged.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Returns `true` if all entries of the given matrix are finite.
#[must_use]
pub fn is_finite_matrix(matrix: &Matrix2<f64>) -> bool {
    matrix.iter().all(|v| v.is_finite())
}
