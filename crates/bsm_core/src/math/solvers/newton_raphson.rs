//! Newton-Raphson root-finding solver.

use super::{IllCondition, RootOutcome, SolverConfig};
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// Two entry points are provided:
/// - [`solve`](Self::solve): the plain iteration. No guard on a vanishing
///   derivative, no clamping, no early exit on non-finite iterates. The loop
///   always runs until tolerance is met or the budget is spent.
/// - [`solve_bracketed`](Self::solve_bracketed): safeguarded Newton. A sign
///   bracket is kept around the root and a bisection step replaces any Newton
///   step that is non-finite, leaves the bracket, or divides by a derivative
///   smaller than the floor.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.solve(f, f_prime, 1.0).into_result().unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Plain Newton iteration from `x0`.
    ///
    /// Each iteration evaluates `f(x)`; if `|f(x)| < tolerance` the current
    /// iterate is accepted. Otherwise `x` is replaced by
    /// `x - f(x) / f_prime(x)`, even if that quotient is huge or non-finite.
    ///
    /// # Returns
    ///
    /// * `RootOutcome::Converged` with the number of updates performed
    /// * `RootOutcome::MaxIterationsExceeded` with the last iterate, which may
    ///   be NaN or infinite when the derivative vanished along the way
    ///
    /// # Example
    ///
    /// ```
    /// use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, RootOutcome};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// match solver.solve(f, f_prime, 1.5) {
    ///     RootOutcome::Converged { root, .. } => assert!(f(root).abs() < 1e-12),
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> RootOutcome<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return RootOutcome::Converged {
                    root: x,
                    iterations: iteration,
                };
            }

            let f_prime_val = f_prime(x);

            tracing::trace!(
                iteration,
                x = x.to_f64(),
                residual = f_val.to_f64(),
                derivative = f_prime_val.to_f64(),
                "newton step"
            );

            #[allow(clippy::assign_op_pattern)]
            {
                x = x - f_val / f_prime_val;
            }
        }

        RootOutcome::MaxIterationsExceeded {
            best_estimate: x,
            iterations: self.config.max_iterations,
        }
    }

    /// Safeguarded Newton iteration inside `[lower, upper]`.
    ///
    /// `f(lower)` and `f(upper)` must have opposite signs. The bracket is
    /// narrowed on every evaluation using the sign of `f(x)`. A bisection step
    /// is taken whenever `|f'(x)| < derivative_floor`, the Newton step is not
    /// finite, or it falls outside the current bracket.
    ///
    /// # Returns
    ///
    /// * `RootOutcome::Converged` once `|f(x)| < tolerance`
    /// * `RootOutcome::IllConditioned` with [`IllCondition::InvalidInterval`]
    ///   if `lower >= upper`, [`IllCondition::NotBracketed`] if `f(lower)` and
    ///   `f(upper)` are not finite values of opposite sign, or
    ///   [`IllCondition::NonFiniteResidual`] if `f` goes non-finite inside the
    ///   bracket
    /// * `RootOutcome::MaxIterationsExceeded` with the last iterate
    ///
    /// # Example
    ///
    /// ```
    /// use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 200));
    ///
    /// // The derivative of x³ vanishes at 0; bisection takes over there.
    /// let f = |x: f64| x * x * x - 0.001;
    /// let f_prime = |x: f64| 3.0 * x * x;
    ///
    /// let outcome = solver.solve_bracketed(f, f_prime, 0.0, -1.0, 1.0, 1e-8);
    /// assert!(outcome.is_converged());
    /// assert!((outcome.value() - 0.1).abs() < 1e-6);
    /// ```
    pub fn solve_bracketed<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
        derivative_floor: T,
    ) -> RootOutcome<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let two = T::one() + T::one();
        let tolerance = self.config.tolerance;
        let start = if x0.is_finite() && x0 > lower && x0 < upper {
            x0
        } else {
            (lower + upper) / two
        };

        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return RootOutcome::IllConditioned {
                estimate: start,
                iterations: 0,
                reason: IllCondition::InvalidInterval { lower, upper },
            };
        }

        let f_lower = f(lower);
        if f_lower.abs() < tolerance {
            return RootOutcome::Converged {
                root: lower,
                iterations: 0,
            };
        }
        let f_upper = f(upper);
        if f_upper.abs() < tolerance {
            return RootOutcome::Converged {
                root: upper,
                iterations: 0,
            };
        }

        let zero = T::zero();
        let bracketed = f_lower.is_finite()
            && f_upper.is_finite()
            && ((f_lower < zero && f_upper > zero) || (f_lower > zero && f_upper < zero));
        if !bracketed {
            tracing::trace!(
                lower = lower.to_f64(),
                upper = upper.to_f64(),
                f_lower = f_lower.to_f64(),
                f_upper = f_upper.to_f64(),
                "root not bracketed"
            );
            return RootOutcome::IllConditioned {
                estimate: start,
                iterations: 0,
                reason: IllCondition::NotBracketed { lower, upper },
            };
        }

        // `negative` always has f < 0, `positive` always has f > 0.
        let (mut negative, mut positive) = if f_lower < zero {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let mut x = start;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < tolerance {
                return RootOutcome::Converged {
                    root: x,
                    iterations: iteration,
                };
            }
            if !f_val.is_finite() {
                return RootOutcome::IllConditioned {
                    estimate: x,
                    iterations: iteration,
                    reason: IllCondition::NonFiniteResidual,
                };
            }

            if f_val < zero {
                negative = x;
            } else {
                positive = x;
            }

            let lo = negative.min(positive);
            let hi = negative.max(positive);
            let f_prime_val = f_prime(x);
            let newton = x - f_val / f_prime_val;

            let take_newton = f_prime_val.abs() >= derivative_floor
                && newton.is_finite()
                && newton > lo
                && newton < hi;

            tracing::trace!(
                iteration,
                x = x.to_f64(),
                residual = f_val.to_f64(),
                derivative = f_prime_val.to_f64(),
                bisection = !take_newton,
                "safeguarded newton step"
            );

            x = if take_newton { newton } else { (lo + hi) / two };
        }

        RootOutcome::MaxIterationsExceeded {
            best_estimate: x,
            iterations: self.config.max_iterations,
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
