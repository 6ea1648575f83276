//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;
use tributary::root_finding::errors::RootFindingError;
use tributary::root_finding::report::{TerminationReason, ToleranceSatisfied};
use tributary::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_half_pi_from_cos() -> TestResult {
    let res = secant(f64::cos, 0.0, 2.0, SecantCfg::new())?;

    assert_abs_diff_eq!(res.root.unwrap(), FRAC_PI_2, epsilon = 1e-8);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.algorithm_name, "secant");
    Ok(())
}

#[test]
fn windows_are_always_recorded() -> TestResult {
    let res = secant(f64::cos, 0.0, 2.0, SecantCfg::new())?;

    let (left, right) = res.trace().and_then(|t| t.windows()).unwrap();
    assert_eq!(left.len(), res.iterations);
    assert_eq!(right.len(), res.iterations);
    assert_eq!((left[0], right[0]), (0.0, 2.0));
    // window advances (a, b) -> (b, z)
    for k in 1..left.len() {
        assert_eq!(left[k], right[k - 1]);
    }
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_x_tol(1e-12)?;
    let res = secant(f, 1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-12);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn open_method_without_bracket() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().with_bracket_check(false);
    let res = secant(f, 3.0, 4.0, cfg)?;

    assert_abs_diff_eq!(res.root.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-8);
    Ok(())
}

#[test]
fn no_sign_change_with_bracket_check() {
    let f   = |x: f64| x * x + 1.0;
    let err = secant(f, 0.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::NoSignChange { a, b, .. } if a == 0.0 && b == 1.0));
}

#[test]
fn equal_values_are_degenerate() {
    let f   = |x: f64| x * x;
    let cfg = SecantCfg::new().with_bracket_check(false);
    let err = secant(f, -1.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err, SecantError::DegenerateSecantStep { a, b } if a == -1.0 && b == 1.0));
}

#[test]
fn exact_root_at_first_point() -> TestResult {
    let f   = |x: f64| x;
    let res = secant(f, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.root, Some(0.0));
    assert_eq!(res.iterations, 0);
    assert!(res.trace().unwrap().is_empty());
    Ok(())
}

#[test]
fn iteration_limit_yields_not_found() -> TestResult {
    let cfg = SecantCfg::new().set_max_iter(2)?;
    let res = secant(f64::cos, 0.0, 2.0, cfg)?;

    assert_eq!(res.root, None);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.trace().unwrap().len(), 2);
    Ok(())
}

#[test]
fn invalid_equal_guesses() {
    let f   = |x: f64| x;
    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { a, b } if a == 1.0 && b == 1.0));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| 1.0 / x - 1.0;
    let err = secant(f, 0.0, 2.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { x, .. }) if x == 0.0
    ));
}
