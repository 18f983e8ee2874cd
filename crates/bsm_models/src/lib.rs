//! # bsm_models (L2: Model)
//!
//! Black-Scholes-Merton valuation of European options.
//!
//! This crate provides:
//! - The [`Contract`](instruments::Contract) value object and
//!   [`OptionType`](instruments::OptionType)
//! - Closed-form price, vega, delta and gamma (`analytical`)
//! - Newton-Raphson implied volatility with a tagged outcome (`implied_vol`)
//!
//! ## Design Principles
//!
//! - **Stateless free functions** over an immutable contract plus a scalar
//!   volatility; nothing is cached
//! - **NaN-in, NaN-out** on the unchecked path; validation is opt-in through
//!   [`BlackScholes::new`](analytical::BlackScholes::new),
//!   [`Contract::try_new`](instruments::Contract::try_new) and
//!   `ImpliedVolatilitySolver::solve_checked`
//! - **Time in calendar days**, converted with a flat 365-day year
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` on `Contract`, `OptionType`,
//!   `Greeks` and `ImpliedVolConfig`, plus TOML configuration loading
//!
//! ## Example
//!
//! ```
//! use bsm_models::analytical::{delta, gamma, price, vega};
//! use bsm_models::implied_vol::implied_volatility;
//! use bsm_models::instruments::{Contract, OptionType};
//!
//! let contract = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
//!
//! let call = price(&contract, 0.2);
//! assert!((call - 2.493376).abs() < 1e-5);
//! assert!(vega(&contract, 0.2) > 0.0);
//! assert!(gamma(&contract, 0.2) > 0.0);
//! assert!(delta(&contract, 0.2) > 0.5);
//!
//! let vol = implied_volatility(&contract.with_price(call));
//! assert!((vol - 0.2).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;
