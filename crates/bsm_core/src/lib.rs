//! # bsm_core: Numerical Foundation for Black-Scholes-Merton Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! bsm_core is the bottom layer of the workspace, providing:
//! - Standard normal primitives: `norm_cdf`, `norm_pdf` (`math::distributions`)
//! - Root-finding: `NewtonRaphsonSolver`, `SolverConfig`, `RootOutcome` (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bsm_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - libm: Double-precision `erf`
//! - thiserror: Error derivation
//! - tracing: Solver diagnostics
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_core::math::distributions::{norm_cdf, norm_pdf};
//! use bsm_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!(norm_pdf(0.0) > norm_pdf(1.0));
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
//! let outcome = solver.solve(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
//! assert!(outcome.is_converged());
//! assert!((outcome.value() - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
