//! Black-Scholes-Merton pricing and Greeks for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - T = days to expiration / 365
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! The free functions do not special-case σ = 0, T = 0 or non-positive
//! prices. Those inputs divide by zero or take the log of a non-positive
//! number inside d₁ and come back as NaN or ±Inf. Use [`BlackScholes::new`]
//! to reject them with an [`AnalyticalError`] instead.
//!
//! Every Greek goes through the same [`d1`] as [`price`], so vega is the
//! exact local derivative the implied volatility solver steps along.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use crate::instruments::{Contract, OptionType};

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(contract: &Contract, volatility: f64) -> f64 {
    let expiry = contract.time_to_expiration();
    let log_moneyness = (contract.underlying_price() / contract.strike()).ln();
    let drift = (contract.risk_free_rate() + 0.5 * volatility * volatility) * expiry;

    (log_moneyness + drift) / (volatility * expiry.sqrt())
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(contract: &Contract, volatility: f64) -> f64 {
    d1(contract, volatility) - volatility * contract.time_to_expiration().sqrt()
}

/// Theoretical price of the contract at the given volatility.
///
/// The contract's quoted `price` is ignored.
///
/// # Examples
/// ```
/// use bsm_models::analytical::price;
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// assert!((price(&call, 0.2) - 2.493376).abs() < 1e-5);
///
/// let put = call.with_option_type(OptionType::Put);
/// assert!((price(&put, 0.2) - 2.08326).abs() < 1e-5);
/// ```
#[inline]
pub fn price(contract: &Contract, volatility: f64) -> f64 {
    let d1 = d1(contract, volatility);
    let d2 = d1 - volatility * contract.time_to_expiration().sqrt();
    price_from_d(contract, d1, d2)
}

#[inline]
fn price_from_d(contract: &Contract, d1: f64, d2: f64) -> f64 {
    let spot = contract.underlying_price();
    let strike = contract.strike();
    let discount = (-contract.risk_free_rate() * contract.time_to_expiration()).exp();

    match contract.option_type() {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionType::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionType::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Computes Vega (∂V/∂σ).
///
/// Vega = S·√T·φ(d₁), identical for calls and puts. Not guarded against
/// σ = 0; it is the derivative term of the Newton step.
///
/// # Examples
/// ```
/// use bsm_models::analytical::vega;
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// assert!((vega(&call, 0.2) - 11.37988).abs() < 1e-5);
/// ```
#[inline]
pub fn vega(contract: &Contract, volatility: f64) -> f64 {
    let d1 = d1(contract, volatility);
    contract.underlying_price() * contract.time_to_expiration().sqrt() * norm_pdf(d1)
}

/// Computes Delta (∂V/∂S).
///
/// - Call Delta = N(d₁)
/// - Put Delta = N(d₁) - 1
#[inline]
pub fn delta(contract: &Contract, volatility: f64) -> f64 {
    delta_from_d1(contract.option_type(), d1(contract, volatility))
}

#[inline]
fn delta_from_d1(option_type: OptionType, d1: f64) -> f64 {
    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    }
}

/// Computes Gamma (∂²V/∂S²).
///
/// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts. Diverges as σ or
/// T approach zero.
#[inline]
pub fn gamma(contract: &Contract, volatility: f64) -> f64 {
    let d1 = d1(contract, volatility);
    norm_pdf(d1)
        / (contract.underlying_price() * volatility * contract.time_to_expiration().sqrt())
}

/// Price and first/second order sensitivities at one volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Theoretical option price
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
}

/// Computes price, delta, gamma and vega from a single d₁/d₂ evaluation.
///
/// Each field is bit-for-bit equal to the corresponding free function.
///
/// # Examples
/// ```
/// use bsm_models::analytical::{greeks, price};
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// let g = greeks(&call, 0.2);
/// assert_eq!(g.price, price(&call, 0.2));
/// assert!((g.gamma - 0.0692276).abs() < 1e-5);
/// ```
pub fn greeks(contract: &Contract, volatility: f64) -> Greeks {
    let spot = contract.underlying_price();
    let sqrt_t = contract.time_to_expiration().sqrt();
    let d1 = d1(contract, volatility);
    let d2 = d1 - volatility * sqrt_t;
    let pdf_d1 = norm_pdf(d1);

    Greeks {
        price: price_from_d(contract, d1, d2),
        delta: delta_from_d1(contract.option_type(), d1),
        gamma: pdf_d1 / (spot * volatility * sqrt_t),
        vega: spot * sqrt_t * pdf_d1,
    }
}

/// Validated view of a contract at a fixed volatility.
///
/// Construction checks the contract invariants and requires a finite,
/// positive volatility. The methods then call the same formulas as the free
/// functions.
///
/// # Examples
/// ```
/// use bsm_models::analytical::BlackScholes;
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let call = Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// let bs = BlackScholes::new(&call, 0.2).unwrap();
/// assert!(bs.price() > 0.0);
///
/// // Invalid volatility
/// assert!(BlackScholes::new(&call, 0.0).is_err());
///
/// // Invalid contract
/// let bad = Contract::new(0.0, 100.0, 0.0, 0.05, 100.0, OptionType::Call);
/// assert!(BlackScholes::new(&bad, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    contract: Contract,
    volatility: f64,
}

impl BlackScholes {
    /// Validates the contract and volatility.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidContract` if [`Contract::validate`] fails
    /// - `AnalyticalError::InvalidVolatility` if volatility is not finite or <= 0
    pub fn new(contract: &Contract, volatility: f64) -> Result<Self, AnalyticalError> {
        contract.validate()?;

        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            contract: *contract,
            volatility,
        })
    }

    /// Returns the validated contract.
    #[inline]
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// See [`price`].
    #[inline]
    pub fn price(&self) -> f64 {
        price(&self.contract, self.volatility)
    }

    /// See [`vega`].
    #[inline]
    pub fn vega(&self) -> f64 {
        vega(&self.contract, self.volatility)
    }

    /// See [`delta`].
    #[inline]
    pub fn delta(&self) -> f64 {
        delta(&self.contract, self.volatility)
    }

    /// See [`gamma`].
    #[inline]
    pub fn gamma(&self) -> f64 {
        gamma(&self.contract, self.volatility)
    }

    /// See [`greeks`].
    #[inline]
    pub fn greeks(&self) -> Greeks {
        greeks(&self.contract, self.volatility)
    }
}
