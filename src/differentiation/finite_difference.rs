//! Finite-difference derivative estimates
//!
//! - forward : `(f(x + h) - f(x)) / h`            first order
//! - central : `(f(x + h) - f(x - h)) / (2 h)`    second order
//!
//! Steps below roughly `1e-10` lose digits to cancellation in
//! `f(x + h) - f(x)`; below `1e-16` the perturbed point usually rounds
//! back onto `x`, which is rejected as [`DifferentiationError::StepUnrepresentable`].


use crate::differentiation::errors::DifferentiationError;


/// Default finite-difference step.
pub const DEFAULT_STEP: f64 = 1e-10;


/// Finite-difference scheme and its step `h`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Difference {
    Forward { h: f64 },
    Central { h: f64 },
}
impl Difference {
    /// Forward difference with [`DEFAULT_STEP`].
    pub const fn forward() -> Self { Difference::Forward { h: DEFAULT_STEP } }

    /// Central difference with [`DEFAULT_STEP`].
    pub const fn central() -> Self { Difference::Central { h: DEFAULT_STEP } }

    pub const fn step(&self) -> f64 {
        match self {
            Difference::Forward { h } | Difference::Central { h } => *h,
        }
    }

    pub const fn scheme_name(&self) -> &'static str {
        match self {
            Difference::Forward { .. } => "forward",
            Difference::Central { .. } => "central",
        }
    }

    /// Function evaluations consumed per estimate.
    pub const fn evaluations(&self) -> usize { 2 }

    /// Estimate `f'(x)` with this scheme.
    pub fn derivative<F>(&self, f: F, x: f64) -> Result<f64, DifferentiationError>
    where F: FnMut(f64) -> f64 {
        match *self {
            Difference::Forward { h } => forward_difference(f, x, h),
            Difference::Central { h } => central_difference(f, x, h),
        }
    }
}
impl Default for Difference {
    fn default() -> Self { Self::forward() }
}


#[inline]
fn check_inputs(x: f64, h: f64) -> Result<(), DifferentiationError> {
    if !x.is_finite() {
        return Err(DifferentiationError::InvalidPoint { x });
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(DifferentiationError::InvalidStep { h });
    }
    Ok(())
}

#[inline]
fn perturb(x: f64, dx: f64, h: f64) -> Result<f64, DifferentiationError> {
    let xp = x + dx;
    if !xp.is_finite() || xp == x {
        return Err(DifferentiationError::StepUnrepresentable { x, h });
    }
    Ok(xp)
}

#[inline]
fn sample<F>(f: &mut F, x: f64) -> Result<f64, DifferentiationError>
where F: FnMut(f64) -> f64 {
    let fx = f(x);
    if !fx.is_finite() {
        return Err(DifferentiationError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}


/// Forward-difference estimate of `f'(x)`.
///
/// # Errors
/// - [`DifferentiationError::InvalidPoint`]        : `x` non-finite
/// - [`DifferentiationError::InvalidStep`]         : `h <= 0` or non-finite
/// - [`DifferentiationError::StepUnrepresentable`] : `x + h` rounds to `x` or overflows
/// - [`DifferentiationError::NonFiniteEvaluation`] : `f` produced NaN/inf
pub fn forward_difference<F>(mut f: F, x: f64, h: f64) -> Result<f64, DifferentiationError>
where F: FnMut(f64) -> f64 {
    check_inputs(x, h)?;
    let xp = perturb(x, h, h)?;

    let fxp = sample(&mut f, xp)?;
    let fx  = sample(&mut f, x)?;
    Ok((fxp - fx) / h)
}


/// Central-difference estimate of `f'(x)`.
///
/// Same errors as [`forward_difference`], checked on both `x + h` and `x - h`.
pub fn central_difference<F>(mut f: F, x: f64, h: f64) -> Result<f64, DifferentiationError>
where F: FnMut(f64) -> f64 {
    check_inputs(x, h)?;
    let xp = perturb(x,  h, h)?;
    let xm = perturb(x, -h, h)?;

    let fxp = sample(&mut f, xp)?;
    let fxm = sample(&mut f, xm)?;
    Ok((fxp - fxm) / (2.0 * h))
}
