pub mod errors;
pub mod rules;

pub use errors::QuadratureError;
pub use rules::{
    integrate, midpoint, rectangle, simpson, trapezoid, Rule, DEFAULT_SUBINTERVALS
};
