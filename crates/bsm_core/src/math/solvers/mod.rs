//! Root-finding solvers for numerical inversion.
//!
//! Used by the implied volatility solver to invert price → volatility.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: plain Newton iteration ([`NewtonRaphsonSolver::solve`])
//!   and a safeguarded variant with bisection fallback
//!   ([`NewtonRaphsonSolver::solve_bracketed`])
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries:
//! - `tolerance`: residual tolerance (default: 1e-4)
//! - `max_iterations`: iteration budget (default: 100)
//!
//! ## Outcomes
//!
//! Solvers never fail silently and never return a bare number: they return a
//! [`RootOutcome`] telling converged answers apart from exhausted or
//! ill-conditioned searches. `RootOutcome::value` still yields the iterate the
//! search stopped on.
//!
//! ## Example
//!
//! ```
//! use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let outcome = solver.solve(f, f_prime, 1.0);
//! assert!(outcome.is_converged());
//! assert!((outcome.value() - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;
mod outcome;

pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
pub use outcome::{IllCondition, RootOutcome};
