//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite sign
//! - `exact_root`    : `true` if the value is an exact zero

/// Returns `true` if `x` and `y` have strictly opposite signs, i.e. `x * y < 0`
/// without the underflow of the product.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `fx` is exactly zero (either sign).
#[inline]
pub(crate) fn exact_root(fx: f64) -> bool {
    fx == 0.0
}
