//! Implied volatility by Newton-Raphson on the Black-Scholes price.
//!
//! - [`implied_volatility`]: bare-number entry point with the default strict
//!   configuration
//! - [`ImpliedVolatilitySolver`]: configurable search returning an
//!   [`ImpliedVolOutcome`]
//! - [`ImpliedVolConfig`]: tolerance, budget and mode, loadable from TOML or
//!   `BSM_IV_*` environment variables
//!
//! # Examples
//!
//! ```
//! use bsm_models::implied_vol::{ImpliedVolConfig, ImpliedVolatilitySolver, SolverMode};
//! use bsm_models::instruments::{Contract, OptionType};
//!
//! let config = ImpliedVolConfig {
//!     mode: SolverMode::Guarded,
//!     tolerance: 1e-10,
//!     ..ImpliedVolConfig::default()
//! };
//! let solver = ImpliedVolatilitySolver::try_new(config).unwrap();
//!
//! let put = Contract::new(3.0, 100.0, 60.0, 0.02, 100.0, OptionType::Put);
//! let sigma = solver.solve_checked(&put).unwrap();
//! assert!(sigma > 0.0 && sigma < 1.0);
//! ```

mod config;
mod solver;

pub use config::{ConfigError, ImpliedVolConfig, SolverMode};
pub use solver::{implied_volatility, ImpliedVolError, ImpliedVolOutcome, ImpliedVolatilitySolver};
