//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Categorised errors from pricing operations
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Layer-specific errors (contract validation, analytical pricing, implied
/// volatility) convert into this type so callers can handle every failure
/// through one enum.
///
/// # Variants
/// - `InvalidInput`: Invalid contract data or parameters
/// - `NumericalInstability`: Computation failed to converge or went non-finite
///
/// # Examples
/// ```
/// use bsm_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Solver-related errors.
///
/// Produced when a tagged [`RootOutcome`](crate::math::solvers::RootOutcome)
/// is turned into a `Result`.
///
/// # Examples
/// ```
/// use bsm_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, best_estimate: 0.3 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations (last estimate {best_estimate})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Last iterate when the limit was reached
        best_estimate: f64,
    },

    /// The search interval does not bracket a root.
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}
