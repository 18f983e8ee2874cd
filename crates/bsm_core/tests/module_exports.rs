//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_distributions_module_exports() {
    use bsm_core::math::distributions::norm_cdf;
    use bsm_core::math::distributions::norm_pdf;

    assert_eq!(norm_cdf(0.0), 0.5);
    assert!(norm_pdf(0.0) > 0.39);
}

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use bsm_core::math::solvers::NewtonRaphsonSolver;
    use bsm_core::math::solvers::RootOutcome;
    use bsm_core::math::solvers::SolverConfig;

    let solver = NewtonRaphsonSolver::new(SolverConfig::<f64>::new(1e-12, 500));
    let outcome = solver.solve(|x| x * x - 4.0, |x| 2.0 * x, 3.0);

    match outcome {
        RootOutcome::Converged { root, .. } => assert!((root - 2.0).abs() < 1e-10),
        other => panic!("Expected convergence, got {:?}", other),
    }
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use bsm_core::types::error::PricingError;
    use bsm_core::types::SolverError;

    let err: PricingError = SolverError::NumericalInstability("overflow".to_string()).into();
    assert!(matches!(err, PricingError::NumericalInstability(_)));
}

/// Test that a solver failure surfaces as an error through `into_result`.
#[test]
fn test_outcome_into_result() {
    use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    use bsm_core::types::SolverError;

    // x² + 1 has no real root.
    let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 20));
    let result = solver.solve(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.5).into_result();

    assert!(matches!(
        result,
        Err(SolverError::MaxIterationsExceeded { iterations: 20, .. })
    ));
}

/// Test that an unbracketed interval surfaces as `NoBracket`.
#[test]
fn test_bracketed_outcome_into_no_bracket() {
    use bsm_core::math::solvers::{IllCondition, NewtonRaphsonSolver, RootOutcome, SolverConfig};
    use bsm_core::types::SolverError;

    let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 20));
    let outcome =
        solver.solve_bracketed(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.5, 0.0, 2.0, 1e-8);

    assert!(matches!(
        outcome,
        RootOutcome::IllConditioned {
            reason: IllCondition::NotBracketed { .. },
            ..
        }
    ));
    assert_eq!(
        outcome.into_result(),
        Err(SolverError::NoBracket { a: 0.0, b: 2.0 })
    );
}
