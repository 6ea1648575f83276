use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Trace};
use super::signs::{exact_root, opposite_sign};
use thiserror::Error;
use tracing::{debug, trace, warn};


#[derive(Debug, Error)]
pub enum SecantError{
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: a and b must be finite and distinct. got a={a}, b={b}")]
    InvalidGuess { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("degenerate secant at a={a}, b={b}: f(a) == f(b)")]
    DegenerateSecantStep { a: f64, b: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common`        : [`CommonCfg`]; `x_tol` bounds `|z - b|` between successive estimates.
/// - `bracket_check` : require `f(a) * f(b) < 0` for the initial guesses (default on).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
    bracket_check: bool,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            bracket_check: true,
        }
    }

    /// Disable to run the plain open method from non-bracketing guesses.
    #[must_use]
    pub fn with_bracket_check(mut self, v: bool) -> Self { self.bracket_check = v; self }

    #[inline] pub fn bracket_check(&self) -> bool { self.bracket_check }
}
impl_common_cfg!(SecantCfg);

impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}


/// Calculates the secant x-intercept for the line
/// connecting `(a, fa)` and `(b, fb)`
///
/// # Returns
/// - `Ok(z)` if denominator `fb - fa` is well-scaled
/// - `Err(DegenerateSecantStep)` if denominator is too small.
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
)-> Result<f64, SecantError> {
    let denom  = fb - fa;
    let scale  = fa.abs().max(fb.abs());
    let thresh = f64::EPSILON * scale;

    if denom == 0.0 || denom.abs() <= thresh {
        return Err(SecantError::DegenerateSecantStep { a, b });
    }

    Ok(( a * fb - b * fa ) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : First initial point.  Must be finite and not equal to `b`
/// - `b`    : Second initial point. Must be finite and not equal to `a`
/// - `cfg`  : [`SecantCfg`] (tolerances, optional `max_iter`, bracket check)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : approximate root, `None` if `max_iter` ran out
/// - `iterations`     : number of secant steps
/// - `trace`          : always [`Trace::Windows`], the `(a, b)` pair used by each step
/// - `algorithm_name` : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]         : `a` or `b` is NaN/inf or equal
/// - [`SecantError::NoSignChange`]         : bracket check on and `f(a) * f(b) >= 0`
/// - [`SecantError::DegenerateSecantStep`] : `f(a) == f(b)` at some step
/// - [`RootFindingError::NonFiniteEvaluation`] (via [`SecantError::RootFinding`])
///
/// # Behavior
/// - Update: `z = (a f(b) - b f(a)) / (f(b) - f(a))`, window `(a, b) <- (b, z)`
/// - Stops once `|z - b| < x_tol`.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use [`super::bisection::bisection`].
pub fn secant<F> (
    mut func: F,
    a: f64,
    b: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(SecantError::InvalidGuess { a, b });
    }

    let x_tol      = cfg.x_tol();
    let algorithm  = Algorithm::Open(OpenFamily::Secant);
    let algo_name  = algorithm.algorithm_name();
    let num_iter   = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        }

        Ok(fx)
    };

    let mut left  = Vec::new();
    let mut right = Vec::new();

    // early exit: a or b is an exact root
    let fa = eval(a)?;
    let fb = eval(b)?;
    if let Some((x, fx)) = [(a, fa), (b, fb)].into_iter().find(|&(_, fx)| exact_root(fx)) {
        debug!(algorithm = algo_name, root = x, "initial point is an exact root");
        return Ok(RootFindingReport {
            root                : Some(x),
            f_root              : Some(fx),
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
            trace               : Some(Trace::Windows { left, right }),
            algorithm_name      : algo_name
        });
    }

    if cfg.bracket_check() && !opposite_sign(fa, fb) {
        return Err(SecantError::NoSignChange { a, b, fa, fb });
    }

    // main loop
    let (mut a, mut b)   = (a, b);
    let (mut fa, mut fb) = (fa, fb);
    for iter in 1..=num_iter {
        let z = calculate_secant_x_intercept((a, fa), (b, fb))?;
        if !z.is_finite() {
            return Err(SecantError::DegenerateSecantStep { a, b });
        }
        left.push(a);
        right.push(b);
        trace!(algorithm = algo_name, iteration = iter, a, b, z, "secant step");

        if (z - b).abs() < x_tol {
            let fz = eval(z)?;
            debug!(
                algorithm = algo_name, iterations = iter, evaluations = evals,
                root = z, "secant converged"
            );
            return Ok(RootFindingReport {
                root                : Some(z),
                f_root              : Some(fz),
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                trace               : Some(Trace::Windows { left, right }),
                algorithm_name      : algo_name
            });
        }

        let fz = eval(z)?;
        (a, fa) = (b, fb);
        (b, fb) = (z, fz);
    }

    warn!(
        algorithm = algo_name, iterations = num_iter, last_x = b, last_fx = fb,
        "iteration limit reached before tolerance; no root reported"
    );

    Ok(RootFindingReport {
        root                : None,
        f_root              : None,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        trace               : Some(Trace::Windows { left, right }),
        algorithm_name      : algo_name
    })
}
