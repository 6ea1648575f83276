use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("number of subintervals must be >= 1. got {got}")]
    ZeroSubintervals { got: usize },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
