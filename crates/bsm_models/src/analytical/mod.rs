//! Closed-form Black-Scholes-Merton pricing.
//!
//! ## Functions
//!
//! - [`price`]: theoretical call or put value
//! - [`vega`], [`delta`], [`gamma`]: sensitivities sharing the same d₁
//! - [`greeks`]: all of the above from one evaluation
//!
//! [`BlackScholes`] is a validated view over the same formulas.
//!
//! ## Example
//!
//! ```
//! use bsm_models::analytical::{delta, norm_cdf, price};
//! use bsm_models::instruments::{Contract, OptionType};
//!
//! let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
//! assert!(price(&call, 0.2) > 0.0);
//! assert!((delta(&call, 0.2) - norm_cdf(0.1)).abs() < 0.02);
//! ```

mod black_scholes;
mod error;

pub use black_scholes::{d1, d2, delta, gamma, greeks, price, vega, BlackScholes, Greeks};
pub use bsm_core::math::distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
