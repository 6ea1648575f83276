//! Numerical inverse of a monotone function by bisection.

use super::bisection::{bisection, BisectionCfg, BisectionError};


/// Returns `y -> x` with `f(x) = y` for `x` in `[a, b]`.
///
/// Each call solves `f(x) - y = 0` with [`bisection`]; the inverse is only
/// defined for `y` between `f(a)` and `f(b)`. Outside that range the call
/// fails with [`BisectionError::NoSignChange`]. A bracket that collapses
/// without a real solution yields `Ok(None)`.
pub fn inverse<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> impl FnMut(f64) -> Result<Option<f64>, BisectionError>
where F: FnMut(f64) -> f64 {
    move |y: f64| {
        let report = bisection(|x| func(x) - y, a, b, cfg)?;
        Ok(report.root)
    }
}
