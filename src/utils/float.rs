//! Floating point comparison helpers

/// Absolute tolerance for `real_is_equal` / `real_is_null`
pub const REAL_EPSILON: f64 = 1e-12;

pub fn real_is_null(v: f64) -> bool {
    v.abs() <= REAL_EPSILON
}

/// True when two values differ by no more than `REAL_EPSILON`
pub fn real_is_equal(a: f64, b: f64) -> bool {
    real_is_null(a - b)
}
