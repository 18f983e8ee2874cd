//! Tagged result of an iterative root search.

use crate::types::SolverError;
use num_traits::Float;

/// Why a search was abandoned as ill-conditioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IllCondition<T: Float> {
    /// The interval is empty, inverted or has a NaN endpoint.
    InvalidInterval {
        /// Requested lower end
        lower: T,
        /// Requested upper end
        upper: T,
    },

    /// `f(lower)` and `f(upper)` do not have opposite finite signs.
    NotBracketed {
        /// Lower end of the interval
        lower: T,
        /// Upper end of the interval
        upper: T,
    },

    /// `f` returned NaN or ±Inf inside the bracket.
    NonFiniteResidual,
}

/// How an iterative root search ended.
///
/// Every variant carries the value the search stopped on, so callers that
/// only want a number can use [`RootOutcome::value`] and still see the same
/// result an unchecked Newton iteration would produce.
///
/// # Examples
/// ```
/// use bsm_core::math::solvers::{IllCondition, RootOutcome};
/// use bsm_core::types::SolverError;
///
/// let ok = RootOutcome::Converged { root: 1.5_f64, iterations: 4 };
/// assert!(ok.is_converged());
/// assert_eq!(ok.value(), 1.5);
///
/// let stalled = RootOutcome::MaxIterationsExceeded { best_estimate: 0.7_f64, iterations: 100 };
/// assert_eq!(stalled.value(), 0.7);
/// assert!(stalled.into_result().is_err());
///
/// let unbracketed = RootOutcome::IllConditioned {
///     estimate: 0.2_f64,
///     iterations: 0,
///     reason: IllCondition::NotBracketed { lower: 1e-6, upper: 5.0 },
/// };
/// assert_eq!(
///     unbracketed.into_result(),
///     Err(SolverError::NoBracket { a: 1e-6, b: 5.0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootOutcome<T: Float> {
    /// The residual dropped below tolerance.
    Converged {
        /// Accepted root
        root: T,
        /// Newton/bisection updates performed before acceptance
        iterations: usize,
    },

    /// The iteration limit was reached without meeting tolerance.
    MaxIterationsExceeded {
        /// Last iterate
        best_estimate: T,
        /// Updates performed (equals the configured limit)
        iterations: usize,
    },

    /// The problem cannot be solved on the requested interval, e.g. the
    /// target is not bracketed.
    IllConditioned {
        /// Iterate at the point the search gave up
        estimate: T,
        /// Updates performed before giving up
        iterations: usize,
        /// What made the search give up
        reason: IllCondition<T>,
    },
}

impl<T: Float> RootOutcome<T> {
    /// The value the search stopped on, whatever the outcome.
    #[inline]
    pub fn value(&self) -> T {
        match *self {
            RootOutcome::Converged { root, .. } => root,
            RootOutcome::MaxIterationsExceeded { best_estimate, .. } => best_estimate,
            RootOutcome::IllConditioned { estimate, .. } => estimate,
        }
    }

    /// Number of updates performed.
    #[inline]
    pub fn iterations(&self) -> usize {
        match *self {
            RootOutcome::Converged { iterations, .. }
            | RootOutcome::MaxIterationsExceeded { iterations, .. }
            | RootOutcome::IllConditioned { iterations, .. } => iterations,
        }
    }

    /// Returns true only for [`RootOutcome::Converged`].
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, RootOutcome::Converged { .. })
    }

    /// Converts the outcome into a `Result`, rejecting anything but convergence.
    ///
    /// # Errors
    /// - `SolverError::MaxIterationsExceeded` for an exhausted iteration budget
    /// - `SolverError::NoBracket` when the interval does not bracket a root
    /// - `SolverError::NumericalInstability` for an invalid interval or a
    ///   non-finite residual
    pub fn into_result(self) -> Result<T, SolverError> {
        match self {
            RootOutcome::Converged { root, .. } => Ok(root),
            RootOutcome::MaxIterationsExceeded {
                best_estimate,
                iterations,
            } => Err(SolverError::MaxIterationsExceeded {
                iterations,
                best_estimate: to_f64(best_estimate),
            }),
            RootOutcome::IllConditioned {
                estimate,
                iterations,
                reason,
            } => Err(match reason {
                IllCondition::NotBracketed { lower, upper } => SolverError::NoBracket {
                    a: to_f64(lower),
                    b: to_f64(upper),
                },
                IllCondition::InvalidInterval { lower, upper } => {
                    SolverError::NumericalInstability(format!(
                        "invalid interval [{}, {}]",
                        to_f64(lower),
                        to_f64(upper)
                    ))
                }
                IllCondition::NonFiniteResidual => SolverError::NumericalInstability(format!(
                    "non-finite residual at {} after {} iterations",
                    to_f64(estimate),
                    iterations
                )),
            }),
        }
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
