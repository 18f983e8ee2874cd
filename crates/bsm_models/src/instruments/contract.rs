//! European option contract.

use super::error::ContractError;
use super::option_type::OptionType;

/// Calendar days per year used to convert `days_to_expiration` to years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Contract and market parameters of a European option.
///
/// An immutable value object. Volatility is deliberately not a field: pricing
/// functions take it as a separate argument so the implied volatility solver
/// can search over it.
///
/// [`Contract::new`] performs no validation, so degenerate inputs flow through
/// to NaN/Inf prices. Use [`Contract::try_new`] or [`Contract::validate`] to
/// reject them up front. Deserialisation is unchecked as well.
///
/// # Examples
/// ```
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let contract = Contract::new(2.5, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// assert_eq!(contract.strike(), 100.0);
/// assert!((contract.time_to_expiration() - 30.0 / 365.0).abs() < 1e-15);
///
/// assert!(Contract::try_new(2.5, -100.0, 30.0, 0.05, 100.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    price: f64,
    strike: f64,
    days_to_expiration: f64,
    risk_free_rate: f64,
    underlying_price: f64,
    option_type: OptionType,
}

impl Contract {
    /// Creates a contract without validation.
    ///
    /// # Arguments
    /// * `price` - Observed option price (target for implied volatility only)
    /// * `strike` - Strike price (K)
    /// * `days_to_expiration` - Calendar days to expiry
    /// * `risk_free_rate` - Continuously compounded annual rate (r)
    /// * `underlying_price` - Spot price of the underlying (S)
    /// * `option_type` - Call or put
    pub fn new(
        price: f64,
        strike: f64,
        days_to_expiration: f64,
        risk_free_rate: f64,
        underlying_price: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            price,
            strike,
            days_to_expiration,
            risk_free_rate,
            underlying_price,
            option_type,
        }
    }

    /// Creates a contract, rejecting parameters the formulas cannot handle.
    ///
    /// # Errors
    /// See [`Contract::validate`].
    pub fn try_new(
        price: f64,
        strike: f64,
        days_to_expiration: f64,
        risk_free_rate: f64,
        underlying_price: f64,
        option_type: OptionType,
    ) -> Result<Self, ContractError> {
        let contract = Self::new(
            price,
            strike,
            days_to_expiration,
            risk_free_rate,
            underlying_price,
            option_type,
        );
        contract.validate()?;
        Ok(contract)
    }

    /// Checks the pricing invariants.
    ///
    /// `strike`, `underlying_price` and `days_to_expiration` must be finite
    /// and positive; `risk_free_rate` (which may be negative) and `price`
    /// must be finite.
    ///
    /// # Errors
    /// The first violated invariant as a [`ContractError`].
    pub fn validate(&self) -> Result<(), ContractError> {
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(ContractError::InvalidStrike {
                strike: self.strike,
            });
        }

        if !(self.underlying_price.is_finite() && self.underlying_price > 0.0) {
            return Err(ContractError::InvalidUnderlyingPrice {
                underlying_price: self.underlying_price,
            });
        }

        if !(self.days_to_expiration.is_finite() && self.days_to_expiration > 0.0) {
            return Err(ContractError::InvalidExpiry {
                days: self.days_to_expiration,
            });
        }

        if !self.risk_free_rate.is_finite() {
            return Err(ContractError::NonFiniteRate {
                rate: self.risk_free_rate,
            });
        }

        if !self.price.is_finite() {
            return Err(ContractError::NonFinitePrice { price: self.price });
        }

        Ok(())
    }

    /// Returns a copy with a different quoted price.
    #[inline]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Returns the observed option price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the number of calendar days to expiry.
    #[inline]
    pub fn days_to_expiration(&self) -> f64 {
        self.days_to_expiration
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the underlying price.
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Time to expiry in years, `days_to_expiration / 365`.
    #[inline]
    pub fn time_to_expiration(&self) -> f64 {
        self.days_to_expiration / DAYS_PER_YEAR
    }
}
