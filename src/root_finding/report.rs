//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, and the optional iteration [`Trace`].

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    MachinePrecisionReached,
    /// Tolerances were met but `|f(root)|` exceeded the residual bound.
    ResidualCheckFailed,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - All methods
///     - |f(x)| within `y_tol`, or an exact zero
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - [a, b] -> (b - a).abs() < x_tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - newton, secant
///     - |x_n - x_{n - 1}| < x_tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Tolerance not reached, usually with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached
}


/// Intermediate states recorded during a single solve call.
/// - [`Trace::Intervals`] : bisection brackets, initial bracket first
/// - [`Trace::Iterates`]  : newton iterates, `x0` first
/// - [`Trace::Windows`]   : secant `(a, b)` pairs as parallel sequences
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Intervals(Vec<(f64, f64)>),
    Iterates(Vec<f64>),
    Windows { left: Vec<f64>, right: Vec<f64> },
}
impl Trace {
    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        match self {
            Trace::Intervals(v)       => v.len(),
            Trace::Iterates(v)        => v.len(),
            Trace::Windows { left, .. } => left.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn intervals(&self) -> Option<&[(f64, f64)]> {
        match self {
            Trace::Intervals(v) => Some(v),
            _ => None,
        }
    }

    pub fn iterates(&self) -> Option<&[f64]> {
        match self {
            Trace::Iterates(v) => Some(v),
            _ => None,
        }
    }

    /// Left and right secant endpoints, in step order.
    pub fn windows(&self) -> Option<(&[f64], &[f64])> {
        match self {
            Trace::Windows { left, right } => Some((left, right)),
            _ => None,
        }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : root estimate, `None` when no root was found
/// - `f_root`              : function value at `root` (`None` alongside `root`)
/// - `iterations`          : total iterations
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `trace`               : intermediate states, when recorded
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : Option<f64>,
    pub f_root              : Option<f64>,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub trace               : Option<Trace>,
    pub algorithm_name      : &'static str,
}
impl RootFindingReport {
    /// `true` unless the solver returned the not-found sentinel.
    pub fn is_found(&self) -> bool { self.root.is_some() }

    pub fn trace(&self) -> Option<&Trace> { self.trace.as_ref() }
}
