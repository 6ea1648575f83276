//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Trace};
use crate::differentiation::{Difference, DifferentiationError};
use thiserror::Error;
use tracing::{debug, trace, warn};


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Differentiation(#[from] DifferentiationError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative vanishes at x={x}; newton step f(x)/f'(x) undefined")]
    ZeroDerivative { x: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x - step undefined")]
    StepNotFinite { x: f64, step: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common`     : [`CommonCfg`]; `x_tol` bounds the step size `|f(x)/f'(x)|`.
/// - `difference` : finite-difference scheme used when no analytic
///                  derivative is passed (default forward, `h = 1e-10`).
/// - `trace`      : record every iterate (default off).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    difference: Difference,
    trace: bool,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            difference: Difference::default(),
            trace: false,
        }
    }

    /// Select the numeric derivative. The step is validated on first use.
    #[must_use]
    pub fn with_difference(mut self, v: Difference) -> Self { self.difference = v; self }

    #[must_use]
    pub fn with_trace(mut self, v: bool) -> Self { self.trace = v; self }

    #[inline] pub fn difference(&self) -> Difference { self.difference }
    #[inline] pub fn trace(&self) -> bool { self.trace }
}
impl_common_cfg!(NewtonCfg);

impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}


/// Helpers
/// - `eval_fx_checked`   : evaluates `f(x)` with finite-check
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : finite-difference estimate from [`Difference`]
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_analytic<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_fd<F>(
    f: &mut F,
    x: f64,
    difference: Difference,
    evals: &mut usize
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    *evals += difference.evaluations();
    let dfx = difference.derivative(&mut *f, x)?;
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}


fn newton_loop<F, G>(
    mut f: F,
    mut df: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let algorithm  = Algorithm::Open(OpenFamily::Newton);
    let algo_name  = algorithm.algorithm_name();

    let x_tol      = cfg.x_tol();
    let y_tol      = cfg.y_tol();
    let difference = cfg.difference();
    let num_iter   = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm
            .default_max_iter()
            .unwrap_or(GLOBAL_MAX_ITER_FALLBACK)
    };

    let mut evals: usize = 0;
    let mut iterates = cfg.trace().then(|| vec![x0]);

    // early exit: x0 is root
    let mut x  = x0;
    let mut fx = eval_fx_checked(&mut f, x, &mut evals)?;
    if fx.abs() < y_tol {
        debug!(algorithm = algo_name, root = x0, "initial guess is a root");
        return Ok(RootFindingReport {
            root                : Some(x0),
            f_root              : Some(fx),
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            trace               : iterates.map(Trace::Iterates),
            algorithm_name      : algo_name,
        });
    }

    // main loop
    for iter in 1..=num_iter {
        // compute derivative
        let dfx = match df.as_mut() {
            Some(v) => eval_dfx_analytic(v, x, &mut evals)?,
            None    => eval_dfx_fd(&mut f, x, difference, &mut evals)?
        };
        if dfx == 0.0 {
            return Err(NewtonError::ZeroDerivative { x });
        }

        let step = fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let x_next = x - step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }
        if let Some(v) = iterates.as_mut() {
            v.push(x_next);
        }

        let fx_next = eval_fx_checked(&mut f, x_next, &mut evals)?;
        trace!(algorithm = algo_name, iteration = iter, x = x_next, fx = fx_next, step, "newton step");

        let outcome = if step.abs() < x_tol {
            Some((TerminationReason::ToleranceReached, ToleranceSatisfied::StepSizeReached))
        } else if fx_next.abs() < y_tol {
            Some((TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached))
        } else {
            None
        };

        if let Some((termination_reason, tolerance_satisfied)) = outcome {
            debug!(
                algorithm = algo_name, iterations = iter, evaluations = evals,
                root = x_next, "newton converged"
            );
            return Ok(RootFindingReport {
                root                : Some(x_next),
                f_root              : Some(fx_next),
                iterations          : iter,
                evaluations         : evals,
                termination_reason,
                tolerance_satisfied,
                trace               : iterates.map(Trace::Iterates),
                algorithm_name      : algo_name,
            });
        }

        // stagnated with |f(x)| still above y_tol
        if x_next == x {
            warn!(
                algorithm = algo_name, iterations = iter, x, fx = fx_next, step,
                "step no longer moves x; no root reported"
            );
            return Ok(RootFindingReport {
                root                : None,
                f_root              : None,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::MachinePrecisionReached,
                tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
                trace               : iterates.map(Trace::Iterates),
                algorithm_name      : algo_name,
            });
        }

        x  = x_next;
        fx = fx_next;
    }

    warn!(
        algorithm = algo_name, iterations = num_iter, last_x = x, last_fx = fx,
        "iteration limit reached before tolerance; no root reported"
    );

    Ok(RootFindingReport {
        root                : None,
        f_root              : None,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        trace               : iterates.map(Trace::Iterates),
        algorithm_name      : algo_name,
    })
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use `cfg.difference()`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerances, optional `max_iter`, difference scheme, trace)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : approximate root, `None` if `max_iter` ran out
/// - `iterations`          : number of newton steps performed
/// - `evaluations`         : total evaluations (f and f')
/// - `trace`               : `[x0, x1, ...]` when tracing
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::ZeroDerivative`]      : `f'(x) == 0` at an iterate
/// - [`NewtonError::DerivativeNotFinite`] : derivative NaN/inf
/// - [`NewtonError::StepNotFinite`]       : step or `x - step` not representable
/// - [`NewtonError::Differentiation`]     : finite-difference estimate failed
/// - [`RootFindingError::NonFiniteEvaluation`] (via [`NewtonError::RootFinding`])
///
/// # Behavior
/// - Step: `x <- x - f(x)/f'(x)`; stop on `|step| < x_tol` or `|f(x)| < y_tol`.
/// - Stagnation: if `x - step == x` before either tolerance holds, the report
///   carries `root: None` and [`TerminationReason::MachinePrecisionReached`].
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. For guaranteed convergence, use [`super::bisection::bisection`].
pub fn newton<F, G>(
    func: F,
    dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, dfunc, x0, cfg)
}
