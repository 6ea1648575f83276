//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid `x_tol` / `y_tol`
//!     └ invalid residual bound for the bisection soft check
//!
//! Non-convergence is *not* an error: solvers report it through the
//! `root: None` sentinel of [`super::report::RootFindingReport`].


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration errors.
///
/// ┌ Invalid input tolerances (`x_tol`, `y_tol`)
/// └ Invalid residual bound (bisection)
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `x_tol` tolerance: must be finite and > 0. got {got}")]
    InvalidXTol { got: f64 },

    #[error("invalid `y_tol` tolerance: must be finite and >= 0. got {got}")]
    InvalidYTol { got: f64 },

    #[error("invalid residual bound: must be > 0 (may be infinite). got {got}")]
    InvalidResidualBound { got: f64 },
}
