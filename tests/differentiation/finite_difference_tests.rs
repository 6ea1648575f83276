use approx::assert_abs_diff_eq;
use std::f64::consts::E;
use tributary::differentiation::{
    central_difference, forward_difference, Difference, DifferentiationError, DEFAULT_STEP,
};

type TestResult = Result<(), DifferentiationError>;

#[test]
fn forward_derivative_of_sin_at_0() -> TestResult {
    let d = forward_difference(f64::sin, 0.0, 1e-6)?;
    assert_abs_diff_eq!(d, 1.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn central_derivative_of_exp_at_1() -> TestResult {
    let d = central_difference(f64::exp, 1.0, 1e-5)?;
    assert_abs_diff_eq!(d, E, epsilon = 1e-8);
    Ok(())
}

#[test]
fn default_step_on_square() -> TestResult {
    let d = forward_difference(|x: f64| x * x, 3.0, DEFAULT_STEP)?;
    assert_abs_diff_eq!(d, 6.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn central_beats_forward_at_moderate_step() -> TestResult {
    let h  = 1e-3;
    let fw = (forward_difference(f64::exp, 0.0, h)? - 1.0).abs();
    let ce = (central_difference(f64::exp, 0.0, h)? - 1.0).abs();
    assert!(ce < fw);
    Ok(())
}

#[test]
fn scheme_dispatch() -> TestResult {
    let f = |x: f64| x.powi(3);
    assert_eq!(
        Difference::Central { h: 1e-4 }.derivative(f, 2.0)?,
        central_difference(f, 2.0, 1e-4)?
    );
    assert_eq!(
        Difference::Forward { h: 1e-4 }.derivative(f, 2.0)?,
        forward_difference(f, 2.0, 1e-4)?
    );
    assert_eq!(Difference::central().step(), DEFAULT_STEP);
    Ok(())
}

#[test]
fn invalid_steps() {
    for h in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let err = central_difference(f64::exp, 0.0, h).unwrap_err();
        assert!(matches!(err, DifferentiationError::InvalidStep { .. }));
    }
}

#[test]
fn invalid_point() {
    let err = forward_difference(f64::exp, f64::NAN, 1e-6).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidPoint { .. }));
}

#[test]
fn log_at_zero_is_non_finite() {
    let err = forward_difference(f64::ln, 0.0, 1e-6).unwrap_err();
    assert!(matches!(err, DifferentiationError::NonFiniteEvaluation { x, .. } if x == 0.0));
}
