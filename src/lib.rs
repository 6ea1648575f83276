//! Scalar numerical routines over `f64`.
//!
//! ┌ [`root_finding`]    : bisection, newton, secant, numerical inverse
//! ├ [`differentiation`] : forward / central finite differences
//! ├ [`quadrature`]      : rectangle, trapezoid, midpoint, simpson rules
//! ├ [`search`]          : first index `>= v` in a sorted slice
//! └ [`memoize`]         : unbounded argument-to-result call caches
//!
//! Root finders report non-convergence through `root: None` in
//! [`root_finding::report::RootFindingReport`] and log it with `tracing`;
//! domain errors (no sign change, vanishing derivative, ...) are returned
//! as `Err`.

pub mod differentiation;
pub mod memoize;
pub mod quadrature;
pub mod root_finding;
pub mod search;
