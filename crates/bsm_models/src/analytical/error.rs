//! Error types for analytical pricing operations.

use bsm_core::types::PricingError;
use thiserror::Error;

use crate::instruments::ContractError;

/// Analytical pricing errors.
///
/// Returned only by the checked [`BlackScholes`](super::BlackScholes) view.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidContract`: The contract failed validation
///
/// # Examples
/// ```
/// use bsm_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive or not finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Contract parameters violate the pricing invariants.
    #[error(transparent)]
    InvalidContract(#[from] ContractError),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
