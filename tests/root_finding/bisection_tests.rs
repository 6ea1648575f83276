//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use tributary::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use tributary::root_finding::errors::{RootFindingError, ToleranceError};
use tributary::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_2_within_theoretical_steps() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, 0.0, 5.0, BisectionCfg::new())?;

    let root = res.root.expect("root of a linear function");
    assert_abs_diff_eq!(root, 2.0, epsilon = 1e-8);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.iterations > 0);
    assert!(res.iterations <= 29);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn finds_sqrt_2_with_tight_tolerances() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new()
        .set_x_tol(1e-12)?
        .set_y_tol(1e-12)?;

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-11);
    assert!(res.f_root.unwrap().abs() <= 1.0);
    Ok(())
}

#[test]
fn endpoint_a_is_root_iterations_0() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, 0.0, 5.0, BisectionCfg::new())?;

    assert_eq!(res.root, Some(0.0));
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn endpoint_b_is_root_iterations_0() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, -5.0, 0.0, BisectionCfg::new())?;

    assert_eq!(res.root, Some(0.0));
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 2);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::NoSignChange { a, b, fa, fb }
        if a == -1.0 && b == 1.0 && fa == 2.0 && fb == 2.0
    ));
}

#[test]
fn detects_invalid_bounds() {
    let f   = |x: f64| x;
    let err = bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { a, b } if a == 2.0 && b == 0.0));

    let err = bisection(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn pole_is_not_reported_as_root() -> TestResult {
    // sign change across x = 0 without a zero
    let f   = |x: f64| 1.0 / x;
    let res = bisection(f, -1.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.root, None);
    assert_eq!(res.f_root, None);
    assert_eq!(res.termination_reason, TerminationReason::ResidualCheckFailed);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert!(!res.is_found());
    Ok(())
}

#[test]
fn jump_is_not_reported_as_root() -> TestResult {
    let f   = |x: f64| if x < 1.0 { -5.0 } else { 5.0 };
    let res = bisection(f, 0.0, 3.0, BisectionCfg::new())?;

    assert_eq!(res.root, None);
    assert_eq!(res.termination_reason, TerminationReason::ResidualCheckFailed);
    Ok(())
}

#[test]
fn infinite_residual_bound_disables_check() -> TestResult {
    let f   = |x: f64| 1.0 / x;
    let cfg = BisectionCfg::new().set_residual_bound(f64::INFINITY)?;
    let res = bisection(f, -1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root.unwrap(), 0.0, epsilon = 1e-8);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn iteration_limit_yields_not_found() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let cfg = BisectionCfg::new().set_max_iter(5)?;
    let res = bisection(f, 0.0, 5.0, cfg)?;

    assert_eq!(res.root, None);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    Ok(())
}

#[test]
fn power_of_two_x_tol_converges_without_max_iter() -> TestResult {
    let f = |x: f64| x - 0.3;

    let cfg = BisectionCfg::new().set_x_tol(0.25)?.set_y_tol(1e-12)?;
    let res = bisection(f, 0.0, 1.0, cfg)?;
    assert_eq!(res.iterations, 3);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_abs_diff_eq!(res.root.unwrap(), 0.3125, epsilon = 1e-15);

    let cfg = BisectionCfg::new().set_x_tol(1.0 / 1024.0)?.set_y_tol(1e-12)?;
    let res = bisection(f, 0.0, 1.0, cfg)?;
    assert_eq!(res.iterations, 11);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert!((res.root.unwrap() - 0.3).abs() < 1.0 / 1024.0);
    Ok(())
}

#[test]
fn full_f64_range_bracket_has_finite_midpoint() -> TestResult {
    let res = bisection(f64::tanh, -f64::MAX, f64::MAX, BisectionCfg::new())?;

    assert_eq!(res.root, Some(0.0));
    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn full_f64_range_bracket_shrinks_to_finite_values() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let cfg = BisectionCfg::new().set_max_iter(3)?.with_trace(true);
    let res = bisection(f, -f64::MAX, f64::MAX, cfg)?;

    let trace = res.trace().and_then(|t| t.intervals()).unwrap();
    assert!(trace.iter().all(|&(a, b)| a.is_finite() && b.is_finite() && a < b));
    assert_eq!(trace[1], (0.0, f64::MAX));
    assert_eq!(res.root, None);
    Ok(())
}

#[test]
fn trace_records_every_bracket() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let cfg = BisectionCfg::new().set_max_iter(3)?.with_trace(true);
    let res = bisection(f, 0.0, 5.0, cfg)?;

    let trace = res.trace().expect("trace requested");
    assert_eq!(
        trace.intervals().unwrap(),
        &[(0.0, 5.0), (0.0, 2.5), (1.25, 2.5), (1.875, 2.5)]
    );
    assert_eq!(trace.len(), res.iterations + 1);
    Ok(())
}

#[test]
fn trace_absent_by_default() -> TestResult {
    let res = bisection(|x: f64| x - 2.0, 0.0, 5.0, BisectionCfg::new())?;
    assert!(res.trace.is_none());
    Ok(())
}

#[test]
fn pathological_flat() -> TestResult {
    let f   = |x: f64| (x - 1.0).powi(3);
    let res = bisection(f, -2.0, 2.0, BisectionCfg::new())?;

    // |f| <= y_tol is met well before the bracket is narrow
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_abs_diff_eq!(res.root.unwrap(), 1.0, epsilon = 1e-2);
    Ok(())
}

#[test]
fn invalid_config_values() {
    assert!(matches!(
        BisectionCfg::new().set_x_tol(0.0).unwrap_err(),
        ToleranceError::InvalidXTol { got } if got == 0.0
    ));
    assert!(matches!(
        BisectionCfg::new().set_y_tol(-1.0).unwrap_err(),
        ToleranceError::InvalidYTol { got } if got == -1.0
    ));
    assert!(matches!(
        BisectionCfg::new().set_residual_bound(0.0).unwrap_err(),
        ToleranceError::InvalidResidualBound { .. }
    ));
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0).unwrap_err(),
        RootFindingError::InvalidMaxIter { got: 0 }
    ));
}
