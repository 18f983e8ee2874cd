//! Newton-Raphson implied volatility.

use bsm_core::math::solvers::{NewtonRaphsonSolver, RootOutcome, SolverConfig};
use bsm_core::types::{PricingError, SolverError};
use thiserror::Error;

use super::config::{ConfigError, ImpliedVolConfig, SolverMode};
use crate::analytical::{price, vega};
use crate::instruments::{Contract, ContractError};

/// Outcome of an implied volatility search.
pub type ImpliedVolOutcome = RootOutcome<f64>;

/// Implied volatility errors.
///
/// # Examples
/// ```
/// use bsm_core::types::SolverError;
/// use bsm_models::implied_vol::ImpliedVolError;
///
/// let err: ImpliedVolError = SolverError::MaxIterationsExceeded {
///     iterations: 100,
///     best_estimate: f64::NAN,
/// }
/// .into();
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// The contract failed validation before the search started.
    #[error(transparent)]
    InvalidContract(#[from] ContractError),

    /// The search did not converge.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::InvalidContract(e) => e.into(),
            ImpliedVolError::Solver(e) => e.into(),
        }
    }
}

/// Solves for the volatility at which the model price equals the contract's
/// quoted price.
///
/// The residual is `price(contract, σ) - contract.price()` and its derivative
/// is [`vega`]. In [`SolverMode::Strict`] the plain Newton iteration runs from
/// `initial_guess`; in [`SolverMode::Guarded`] the search is confined to
/// `[lower_bound, upper_bound]` with bisection fallback.
///
/// # Examples
/// ```
/// use bsm_models::implied_vol::{ImpliedVolConfig, ImpliedVolatilitySolver};
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let contract = Contract::new(10.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
///
/// let strict = ImpliedVolatilitySolver::with_defaults().solve(&contract);
/// assert!(strict.is_converged());
/// assert!((strict.value() - 0.86021805).abs() < 1e-5);
///
/// let guarded = ImpliedVolatilitySolver::new(ImpliedVolConfig::guarded()).solve(&contract);
/// assert!((guarded.value() - strict.value()).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolatilitySolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolatilitySolver {
    /// Creates a solver without validating the configuration.
    ///
    /// A zero iteration budget returns the initial guess as
    /// `MaxIterationsExceeded`; a non-positive tolerance never converges.
    pub fn new(config: ImpliedVolConfig) -> Self {
        Self { config }
    }

    /// Creates a solver after [`ImpliedVolConfig::validate`].
    pub fn try_new(config: ImpliedVolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Strict mode, σ₀ = 0.2, tolerance 1e-4, 100 iterations.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Runs the search and reports how it ended.
    ///
    /// Never fails: degenerate contracts produce non-finite estimates or an
    /// `IllConditioned` outcome rather than an error.
    pub fn solve(&self, contract: &Contract) -> ImpliedVolOutcome {
        let target = contract.price();
        let config = &self.config;

        tracing::debug!(
            target_price = target,
            strike = contract.strike(),
            days = contract.days_to_expiration(),
            option_type = %contract.option_type(),
            mode = %config.mode,
            "solving implied volatility"
        );

        let newton = NewtonRaphsonSolver::new(SolverConfig {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        });
        let residual = |sigma: f64| price(contract, sigma) - target;
        let derivative = |sigma: f64| vega(contract, sigma);

        let outcome = match config.mode {
            SolverMode::Strict => newton.solve(residual, derivative, config.initial_guess),
            SolverMode::Guarded => newton.solve_bracketed(
                residual,
                derivative,
                config.initial_guess,
                config.lower_bound,
                config.upper_bound,
                config.vega_floor,
            ),
        };

        match outcome {
            RootOutcome::Converged { root, iterations } => {
                tracing::debug!(volatility = root, iterations, "implied volatility converged");
            }
            RootOutcome::MaxIterationsExceeded {
                best_estimate,
                iterations,
            } => {
                tracing::warn!(
                    volatility = best_estimate,
                    iterations,
                    target_price = target,
                    error = price(contract, best_estimate) - target,
                    "implied volatility did not converge"
                );
            }
            RootOutcome::IllConditioned {
                estimate,
                iterations,
                reason,
            } => {
                tracing::warn!(
                    volatility = estimate,
                    iterations,
                    ?reason,
                    target_price = target,
                    lower_bound = config.lower_bound,
                    upper_bound = config.upper_bound,
                    "implied volatility ill-conditioned"
                );
            }
        }

        outcome
    }

    /// Validates the contract, solves, and rejects anything but convergence.
    ///
    /// # Errors
    /// - `ImpliedVolError::InvalidContract` if [`Contract::validate`] fails
    /// - `ImpliedVolError::Solver` if the search did not converge, with
    ///   `SolverError::NoBracket` when a guarded search cannot bracket the
    ///   target price
    pub fn solve_checked(&self, contract: &Contract) -> Result<f64, ImpliedVolError> {
        contract.validate()?;
        self.solve(contract)
            .into_result()
            .map_err(ImpliedVolError::from)
    }
}

/// Implied volatility with the default strict configuration.
///
/// Returns the last iterate whether or not the search converged, which can be
/// NaN or infinite when vega vanishes along the way. Use
/// [`ImpliedVolatilitySolver::solve`] to tell the cases apart.
///
/// # Examples
/// ```
/// use bsm_models::implied_vol::implied_volatility;
/// use bsm_models::instruments::{Contract, OptionType};
///
/// let contract = Contract::new(10.0, 100.0, 30.0, 0.05, 100.0, OptionType::Call);
/// assert!((implied_volatility(&contract) - 0.86021805).abs() < 1e-5);
/// ```
pub fn implied_volatility(contract: &Contract) -> f64 {
    ImpliedVolatilitySolver::with_defaults().solve(contract).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OptionType;
    use approx::assert_relative_eq;
    use bsm_core::math::solvers::IllCondition;

    fn atm(option_type: OptionType) -> Contract {
        Contract::new(0.0, 100.0, 30.0, 0.05, 100.0, option_type)
    }

    fn precise_guarded() -> ImpliedVolatilitySolver {
        ImpliedVolatilitySolver::new(ImpliedVolConfig {
            tolerance: 1e-10,
            max_iterations: 200,
            ..ImpliedVolConfig::guarded()
        })
    }

    #[test]
    fn test_reference_scenario() {
        let contract = atm(OptionType::Call).with_price(10.0);
        let iv = implied_volatility(&contract);
        assert_relative_eq!(iv, 0.86021805, epsilon = 1e-5);
        assert_relative_eq!(price(&contract, iv), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_strict_round_trip_atm() {
        let solver = ImpliedVolatilitySolver::with_defaults();

        for option_type in [OptionType::Call, OptionType::Put] {
            for sigma in [0.05, 0.1, 0.2, 0.35, 0.5, 0.75, 1.0, 1.25, 1.5] {
                let contract = atm(option_type);
                let quoted = contract.with_price(price(&contract, sigma));
                let outcome = solver.solve(&quoted);

                assert!(outcome.is_converged(), "{} at σ = {}: {:?}", option_type, sigma, outcome);
                assert!(
                    (outcome.value() - sigma).abs() < 1e-4,
                    "{} at σ = {}: got {}",
                    option_type,
                    sigma,
                    outcome.value()
                );
            }
        }
    }

    #[test]
    fn test_exact_start_converges_immediately() {
        let contract = atm(OptionType::Call);
        let quoted = contract.with_price(price(&contract, 0.2));
        assert_eq!(
            ImpliedVolatilitySolver::with_defaults().solve(&quoted),
            RootOutcome::Converged {
                root: 0.2,
                iterations: 0
            }
        );
    }

    #[test]
    fn test_iteration_budget_is_respected() {
        let contract = atm(OptionType::Call).with_price(10.0);
        let solver = ImpliedVolatilitySolver::new(ImpliedVolConfig {
            max_iterations: 1,
            ..ImpliedVolConfig::default()
        });

        // One Newton update from 0.2, then the budget runs out.
        let expected = 0.2 - (price(&contract, 0.2) - 10.0) / vega(&contract, 0.2);
        assert_eq!(
            solver.solve(&contract),
            RootOutcome::MaxIterationsExceeded {
                best_estimate: expected,
                iterations: 1
            }
        );
    }

    #[test]
    fn test_strict_vanishing_vega_diverges() {
        // Far out of the money: vega at σ₀ is ~1e-31 and the first step explodes.
        let contract = Contract::new(1.0, 200.0, 30.0, 0.05, 100.0, OptionType::Call);
        let outcome = ImpliedVolatilitySolver::with_defaults().solve(&contract);

        match outcome {
            RootOutcome::MaxIterationsExceeded {
                best_estimate,
                iterations,
            } => {
                assert_eq!(iterations, 100);
                assert!(!best_estimate.is_finite());
            }
            other => panic!("Expected MaxIterationsExceeded, got {:?}", other),
        }
        assert!(!implied_volatility(&contract).is_finite());
    }

    #[test]
    fn test_guarded_handles_vanishing_vega() {
        let contract = Contract::new(1.0, 200.0, 30.0, 0.05, 100.0, OptionType::Call);
        let outcome = precise_guarded().solve(&contract);

        assert!(outcome.is_converged(), "{:?}", outcome);
        assert_relative_eq!(price(&contract, outcome.value()), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_guarded_unbracketed_target_is_ill_conditioned() {
        // A call can never be worth more than the underlying.
        let contract = atm(OptionType::Call).with_price(150.0);
        let outcome = precise_guarded().solve(&contract);

        assert_eq!(
            outcome,
            RootOutcome::IllConditioned {
                estimate: 0.2,
                iterations: 0,
                reason: IllCondition::NotBracketed {
                    lower: 1e-6,
                    upper: 5.0
                },
            }
        );
    }

    #[test]
    fn test_guarded_agrees_with_strict() {
        let contract = atm(OptionType::Put).with_price(4.0);
        let strict = ImpliedVolatilitySolver::with_defaults().solve(&contract);
        let guarded = ImpliedVolatilitySolver::new(ImpliedVolConfig::guarded()).solve(&contract);

        assert!(strict.is_converged());
        assert!(guarded.is_converged());
        assert_relative_eq!(strict.value(), guarded.value(), epsilon = 1e-4);
    }

    #[test]
    fn test_solve_checked_ok() {
        let contract = atm(OptionType::Call).with_price(10.0);
        let iv = ImpliedVolatilitySolver::with_defaults()
            .solve_checked(&contract)
            .unwrap();
        assert_eq!(iv, implied_volatility(&contract));
    }

    #[test]
    fn test_solve_checked_rejects_invalid_contract() {
        let contract = Contract::new(10.0, 100.0, 0.0, 0.05, 100.0, OptionType::Call);
        assert_eq!(
            ImpliedVolatilitySolver::with_defaults().solve_checked(&contract),
            Err(ImpliedVolError::InvalidContract(ContractError::InvalidExpiry {
                days: 0.0
            }))
        );
    }

    #[test]
    fn test_solve_checked_reports_non_convergence() {
        let contract = Contract::new(1.0, 200.0, 30.0, 0.05, 100.0, OptionType::Call);
        let result = ImpliedVolatilitySolver::with_defaults().solve_checked(&contract);
        assert!(matches!(
            result,
            Err(ImpliedVolError::Solver(SolverError::MaxIterationsExceeded {
                iterations: 100,
                ..
            }))
        ));
    }

    #[test]
    fn test_solve_checked_reports_unbracketed_target() {
        let contract = atm(OptionType::Call).with_price(150.0);
        let result = precise_guarded().solve_checked(&contract);
        assert!(matches!(
            result,
            Err(ImpliedVolError::Solver(SolverError::NoBracket { .. }))
        ));
        assert_eq!(
            result,
            Err(ImpliedVolError::Solver(SolverError::NoBracket { a: 1e-6, b: 5.0 }))
        );
    }

    #[test]
    fn test_try_new_validates() {
        let bad = ImpliedVolConfig {
            tolerance: 0.0,
            ..ImpliedVolConfig::default()
        };
        assert!(ImpliedVolatilitySolver::try_new(bad.clone()).is_err());

        // The unchecked constructor accepts it and simply never converges.
        let contract = atm(OptionType::Call).with_price(10.0);
        let outcome = ImpliedVolatilitySolver::new(bad).solve(&contract);
        assert!(!outcome.is_converged());
    }

    #[test]
    fn test_zero_budget_returns_initial_guess() {
        let solver = ImpliedVolatilitySolver::new(ImpliedVolConfig {
            max_iterations: 0,
            initial_guess: 0.4,
            ..ImpliedVolConfig::default()
        });
        let outcome = solver.solve(&atm(OptionType::Call).with_price(10.0));
        assert_eq!(
            outcome,
            RootOutcome::MaxIterationsExceeded {
                best_estimate: 0.4,
                iterations: 0
            }
        );
    }

    #[test]
    fn test_error_into_pricing_error() {
        let err: PricingError = ImpliedVolError::InvalidContract(ContractError::InvalidStrike {
            strike: 0.0,
        })
        .into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = ImpliedVolError::Solver(SolverError::MaxIterationsExceeded {
            iterations: 100,
            best_estimate: 0.5,
        })
        .into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn test_guarded_round_trip(
                strike in 90.0_f64..110.0,
                days in 90.0_f64..365.0,
                rate in 0.0_f64..0.05,
                sigma in 0.1_f64..1.0,
                is_call in any::<bool>(),
            ) {
                let option_type = if is_call { OptionType::Call } else { OptionType::Put };
                let contract = Contract::new(0.0, strike, days, rate, 100.0, option_type);
                let quoted = contract.with_price(price(&contract, sigma));

                let outcome = precise_guarded().solve(&quoted);
                prop_assert!(outcome.is_converged(), "{:?}", outcome);
                prop_assert!((outcome.value() - sigma).abs() < 1e-6);
            }
        }
    }
}
