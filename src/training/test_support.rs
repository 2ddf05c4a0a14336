//! Helpers shared by the training unit tests

/// Float equality for values that went through 3-decimal rounding
pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
