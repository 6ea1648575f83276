// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod secant;
pub mod newton;
pub mod inverse;

pub use config::{DEFAULT_X_TOL, DEFAULT_Y_TOL};
