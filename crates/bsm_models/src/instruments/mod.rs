//! Option contract definitions.
//!
//! - [`Contract`]: immutable contract and market parameters
//! - [`OptionType`]: call/put flag, matched exhaustively by the formulas
//! - [`ContractError`]: failures of the opt-in validation layer
//!
//! # Examples
//!
//! ```
//! use bsm_models::instruments::{Contract, OptionType};
//!
//! let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
//! let put = call.with_option_type(OptionType::Put);
//! assert_eq!(put.strike(), call.strike());
//! ```

mod contract;
mod error;
mod option_type;

pub use contract::{Contract, DAYS_PER_YEAR};
pub use error::ContractError;
pub use option_type::OptionType;
