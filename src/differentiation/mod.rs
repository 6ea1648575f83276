pub mod errors;
pub mod finite_difference;

pub use errors::DifferentiationError;
pub use finite_difference::{
    central_difference, forward_difference, Difference, DEFAULT_STEP
};
