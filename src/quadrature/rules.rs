//! Composite Newton–Cotes rules on `n` uniform subintervals.
//!
//! With `h = (b - a) / n` and left nodes `x_k = a + k h`, `k = 0..n`:
//!
//! ┌ rectangle : `h Σ f(x_k)`                                   O(h)
//! ├ trapezoid : `h Σ f(x_k) + (f(b) - f(a)) h / 2`             O(h²)
//! ├ midpoint  : `h Σ f(x_k + h/2)`                             O(h²)
//! └ simpson   : `(4 Σ f(x_k + h/2) + 2 Σ f(x_k) + f(b) - f(a)) h / 6`  O(h⁴)
//!
//! `b < a` is allowed and flips the sign of the result.


use crate::quadrature::errors::QuadratureError;


/// Default number of subintervals.
pub const DEFAULT_SUBINTERVALS: usize = 10_000;


/// Quadrature rule selector for [`integrate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Rectangle,
    Trapezoid,
    Midpoint,
    Simpson,
}
impl Rule {
    pub const ALL: [Rule; 4] = [Rule::Rectangle, Rule::Trapezoid, Rule::Midpoint, Rule::Simpson];

    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Rectangle => "rectangle",
            Rule::Trapezoid => "trapezoid",
            Rule::Midpoint  => "midpoint",
            Rule::Simpson   => "simpson",
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}


/// Checked evaluation shared by every rule.
#[inline]
fn eval<F>(f: &mut F, x: f64) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let fx = f(x);
    if !fx.is_finite() {
        return Err(QuadratureError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

#[inline]
fn step(a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::ZeroSubintervals { got: n });
    }
    if !(a.is_finite() && b.is_finite()) {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    Ok((b - a) / n as f64)
}

/// `Σ f(a + k h + offset)` over `k = 0..n`.
fn node_sum<F>(f: &mut F, a: f64, h: f64, n: usize, offset: f64) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    (0..n).try_fold(0.0, |acc, k| Ok(acc + eval(f, a + k as f64 * h + offset)?))
}


/// Left-rectangle rule.
pub fn rectangle<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h = step(a, b, n)?;
    Ok(node_sum(&mut f, a, h, n, 0.0)? * h)
}

/// Trapezoid rule, written as the rectangle sum plus the endpoint correction.
pub fn trapezoid<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h    = step(a, b, n)?;
    let left = node_sum(&mut f, a, h, n, 0.0)?;
    let fa   = eval(&mut f, a)?;
    let fb   = eval(&mut f, b)?;
    Ok(left * h + (fb - fa) * h / 2.0)
}

/// Midpoint rule.
pub fn midpoint<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h = step(a, b, n)?;
    Ok(node_sum(&mut f, a, h, n, h / 2.0)? * h)
}

/// Composite Simpson rule with one midpoint per subinterval.
pub fn simpson<F>(mut f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h    = step(a, b, n)?;
    let mids = node_sum(&mut f, a, h, n, h / 2.0)?;
    let left = node_sum(&mut f, a, h, n, 0.0)?;
    let fa   = eval(&mut f, a)?;
    let fb   = eval(&mut f, b)?;
    Ok((4.0 * mids + 2.0 * left + fb - fa) * h / 6.0)
}


/// Integrates `f` over `[a, b]` with `n` subintervals using `rule`.
///
/// # Errors
/// - [`QuadratureError::ZeroSubintervals`]    : `n == 0`
/// - [`QuadratureError::InvalidBounds`]       : `a` or `b` NaN/inf
/// - [`QuadratureError::NonFiniteEvaluation`] : `f` produced NaN/inf at a node
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize, rule: Rule) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    match rule {
        Rule::Rectangle => rectangle(f, a, b, n),
        Rule::Trapezoid => trapezoid(f, a, b, n),
        Rule::Midpoint  => midpoint(f, a, b, n),
        Rule::Simpson   => simpson(f, a, b, n),
    }
}
