use thiserror::Error;

#[derive(Debug, Error)]
pub enum DifferentiationError {
    #[error("invalid step: h must be finite and > 0. got h={h}")]
    InvalidStep { h: f64 },

    #[error("invalid point: x must be finite. got x={x}")]
    InvalidPoint { x: f64 },

    #[error("step not representable at x={x}, h={h}; x +/- h collapses onto x or overflows")]
    StepUnrepresentable { x: f64, h: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
