//! Contract validation errors.

use bsm_core::types::PricingError;
use thiserror::Error;

/// Contract-related errors.
///
/// Only produced by the opt-in validation layer; the unchecked pricing
/// functions never inspect their inputs.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidUnderlyingPrice`: Underlying price is non-positive or not finite
/// - `InvalidExpiry`: Days to expiration is non-positive or not finite
/// - `NonFiniteRate`: Risk-free rate is NaN or infinite
/// - `NonFinitePrice`: Quoted option price is NaN or infinite
/// - `UnknownOptionType`: Text that names neither a call nor a put
///
/// # Examples
/// ```
/// use bsm_models::instruments::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid underlying price (non-positive).
    #[error("Invalid underlying price: S = {underlying_price}")]
    InvalidUnderlyingPrice {
        /// The invalid underlying price
        underlying_price: f64,
    },

    /// Invalid time to expiration (non-positive).
    #[error("Invalid expiry: {days} days")]
    InvalidExpiry {
        /// The invalid number of days
        days: f64,
    },

    /// Risk-free rate is not a finite number.
    #[error("Non-finite risk-free rate: r = {rate}")]
    NonFiniteRate {
        /// The offending rate
        rate: f64,
    },

    /// Quoted option price is not a finite number.
    #[error("Non-finite option price: {price}")]
    NonFinitePrice {
        /// The offending price
        price: f64,
    },

    /// Option type string could not be parsed.
    #[error("Unknown option type: {0}")]
    UnknownOptionType(String),
}

impl From<ContractError> for PricingError {
    fn from(err: ContractError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", ContractError::InvalidStrike { strike: 0.0 }),
            "Invalid strike: K = 0"
        );
        assert_eq!(
            format!(
                "{}",
                ContractError::InvalidUnderlyingPrice {
                    underlying_price: -5.0
                }
            ),
            "Invalid underlying price: S = -5"
        );
        assert_eq!(
            format!("{}", ContractError::InvalidExpiry { days: 0.0 }),
            "Invalid expiry: 0 days"
        );
        assert!(format!("{}", ContractError::NonFiniteRate { rate: f64::NAN }).contains("NaN"));
        assert!(
            format!("{}", ContractError::NonFinitePrice { price: f64::INFINITY }).contains("inf")
        );
        assert_eq!(
            format!("{}", ContractError::UnknownOptionType("straddle".to_string())),
            "Unknown option type: straddle"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = ContractError::InvalidExpiry { days: -1.0 }.into();
        assert_eq!(err, PricingError::InvalidInput("Invalid expiry: -1 days".to_string()));
    }
}
