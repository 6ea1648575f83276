use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::algorithms::bisection_theoretical_iter;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Trace};
use super::signs::{exact_root, opposite_sign};
use thiserror::Error;
use tracing::{debug, trace, warn};


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange  { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Bisection configuration
///
/// # Fields
/// ┌ `common`         : [`CommonCfg`] with `x_tol`, `y_tol` and optional `max_iter`
/// ├ `residual_bound` : largest `|f(root)|` accepted as a real root (default 1.0)
/// └ `trace`          : record every bracket visited (default off)
///
/// # Notes:
/// └ If `max_iter` is None, it will be set to the theoretical number of
///   bisections `floor(log2((b - a) / x_tol)) + 1`, clamped to
///   [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
    residual_bound: f64,
    trace: bool,
}
impl BisectionCfg {
    pub const DEFAULT_RESIDUAL_BOUND: f64 = 1.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            residual_bound: Self::DEFAULT_RESIDUAL_BOUND,
            trace: false,
        }
    }

    /// Bound on `|f(root)|` past which a converged bracket is reported as
    /// "not found". `f64::INFINITY` disables the check.
    pub fn set_residual_bound(mut self, v: f64) -> Result<Self, ToleranceError> {
        if v.is_nan() || v <= 0.0 {
            return Err(ToleranceError::InvalidResidualBound { got: v });
        }
        self.residual_bound = v;
        Ok(self)
    }

    #[must_use]
    pub fn with_trace(mut self, v: bool) -> Self { self.trace = v; self }

    #[inline] pub fn residual_bound(&self) -> f64 { self.residual_bound }
    #[inline] pub fn trace(&self) -> bool { self.trace }
}
impl_common_cfg!(BisectionCfg);

impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}


/// Calculates midpoint of [a, b]; halves each end first if `b - a` overflows.
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    let w = b - a;
    if w.is_finite() {
        a + w * 0.5
    } else {
        a * 0.5 + b * 0.5
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]
///    Defaults:
///    ├ x_tol          = 1e-8
///    ├ y_tol          = 1e-8
///    └ residual_bound = 1.0
///
/// # Behavior
///
/// ┌ An exact zero at `a` or `b` is returned immediately with 0 iterations.
/// ├ Each step evaluates the midpoint `m`; the loop stops once
/// │  `|b - a| < x_tol` or `|f(m)| <= y_tol`, returning `m`.
/// ├ Otherwise `[a, m]` is kept if `f(m) * f(a) < 0`, else `[m, b]`.
/// └ A tiny bracket does not prove a root (jumps, poles): if
///    `|f(m)| > residual_bound` the report carries `root: None` and
///    [`TerminationReason::ResidualCheckFailed`]. Running out of
///    iterations also yields `root: None`.
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]  - `f(a)` and `f(b)` are nonzero with the same sign.
/// └ [`RootFindingError::NonFiniteEvaluation`] (via [`BisectionError::RootFinding`])
///    - `func(x)` produced NaN or inf.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    let algo_name = algorithm.algorithm_name();

    let x_tol          = cfg.x_tol();
    let y_tol          = cfg.y_tol();
    let residual_bound = cfg.residual_bound();
    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or_else(|| {
            bisection_theoretical_iter(a, b, x_tol).min(GLOBAL_MAX_ITER_FALLBACK)
        }),
    };

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut intervals = cfg.trace().then(|| vec![(a, b)]);

    // immediate bounds are roots
    let mut fa = eval(a)?;
    if exact_root(fa) {
        debug!(algorithm = algo_name, root = a, "left endpoint is an exact root");
        return Ok(RootFindingReport {
            root                : Some(a),
            f_root              : Some(fa),
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            trace               : intervals.map(Trace::Intervals),
            algorithm_name      : algo_name,
        });
    }
    let fb = eval(b)?;
    if exact_root(fb) {
        debug!(algorithm = algo_name, root = b, "right endpoint is an exact root");
        return Ok(RootFindingReport {
            root                : Some(b),
            f_root              : Some(fb),
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            trace               : intervals.map(Trace::Intervals),
            algorithm_name      : algo_name,
        });
    }

    if !opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    // algorithm
    let mut iterations = 0;
    let (midpoint, fm, termination, tolerance) = loop {
        let midpoint = calculate_bisection(a, b);
        let fm       = eval(midpoint)?;

        if (b - a).abs() < x_tol {
            break (midpoint, fm, TerminationReason::ToleranceReached,
                   ToleranceSatisfied::WidthTolReached);
        }
        if fm.abs() <= y_tol {
            break (midpoint, fm, TerminationReason::ToleranceReached,
                   ToleranceSatisfied::AbsFxReached);
        }
        // bracket can no longer be split in floating point
        if midpoint <= a || midpoint >= b {
            break (midpoint, fm, TerminationReason::MachinePrecisionReached,
                   ToleranceSatisfied::WidthTolReached);
        }
        if iterations == num_iter {
            break (midpoint, fm, TerminationReason::IterationLimit,
                   ToleranceSatisfied::ToleranceNotReached);
        }

        // shrink interval
        if opposite_sign(fm, fa) {
            b = midpoint;
        } else {
            a = midpoint;
            fa = fm;
        }
        iterations += 1;

        if let Some(v) = intervals.as_mut() {
            v.push((a, b));
        }
        trace!(algorithm = algo_name, iteration = iterations, a, b, "bracket shrunk");
    };

    let (root, f_root, termination_reason) = match termination {
        TerminationReason::IterationLimit => {
            warn!(
                algorithm = algo_name, iterations, a, b,
                "iteration limit reached before tolerance; no root reported"
            );
            (None, None, termination)
        }
        _ if fm.abs() > residual_bound => {
            warn!(
                algorithm = algo_name, x = midpoint, fx = fm, residual_bound,
                "bracket converged but |f(x)| exceeds residual bound; no root reported"
            );
            (None, None, TerminationReason::ResidualCheckFailed)
        }
        _ => (Some(midpoint), Some(fm), termination),
    };

    debug!(
        algorithm = algo_name, iterations, evaluations = evals,
        root = ?root, "bisection finished"
    );

    Ok(RootFindingReport {
        root,
        f_root,
        iterations,
        evaluations         : evals,
        termination_reason,
        tolerance_satisfied : tolerance,
        trace               : intervals.map(Trace::Intervals),
        algorithm_name      : algo_name,
    })
}
