//! Implied volatility solver configuration.
//!
//! Loaded from TOML files (`serde` feature, on by default) or `BSM_IV_*`
//! environment variables. Unset keys keep the defaults: σ₀ = 0.2, tolerance
//! 1e-4, 100 iterations, strict mode.

#[cfg(feature = "serde")]
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised solver mode string.
    #[error("Invalid solver mode: {0}. Must be one of: strict, guarded")]
    InvalidMode(String),

    /// A numeric field violates its constraint.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field name
        field: &'static str,
        /// Constraint that was violated
        reason: String,
    },

    /// Reading or parsing a configuration file failed.
    #[cfg(feature = "serde")]
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// An environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Newton iteration flavour used by the implied volatility solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolverMode {
    /// Unguarded Newton from the initial guess. No clamp and no vega guard,
    /// so the iterate may diverge.
    #[default]
    Strict,
    /// Safeguarded Newton with bisection fallback inside
    /// `[lower_bound, upper_bound]`.
    Guarded,
}

impl FromStr for SolverMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(SolverMode::Strict),
            "guarded" => Ok(SolverMode::Guarded),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for SolverMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverMode::Strict => write!(f, "strict"),
            SolverMode::Guarded => write!(f, "guarded"),
        }
    }
}

/// Implied volatility solver configuration.
///
/// # Examples
/// ```
/// use bsm_models::implied_vol::{ImpliedVolConfig, SolverMode};
///
/// let config = ImpliedVolConfig::from_toml_str(r#"
///     mode = "guarded"
///     tolerance = 1e-8
/// "#).unwrap();
///
/// assert_eq!(config.mode, SolverMode::Guarded);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpliedVolConfig {
    /// Starting volatility of the Newton iteration
    pub initial_guess: f64,
    /// Absolute price error accepted as converged
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
    /// Strict or guarded iteration
    pub mode: SolverMode,
    /// Lower end of the volatility bracket (guarded mode only)
    pub lower_bound: f64,
    /// Upper end of the volatility bracket (guarded mode only)
    pub upper_bound: f64,
    /// Vega below which a bisection step is taken (guarded mode only)
    pub vega_floor: f64,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            tolerance: 1e-4,
            max_iterations: 100,
            mode: SolverMode::Strict,
            lower_bound: 1e-6,
            upper_bound: 5.0,
            vega_floor: 1e-8,
        }
    }
}

impl ImpliedVolConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with [`SolverMode::Guarded`].
    pub fn guarded() -> Self {
        Self {
            mode: SolverMode::Guarded,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ImpliedVolConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from `BSM_IV_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BSM_IV_INITIAL_GUESS") {
            config.initial_guess = parse_env("BSM_IV_INITIAL_GUESS", &value)?;
        }
        if let Some(value) = lookup("BSM_IV_TOLERANCE") {
            config.tolerance = parse_env("BSM_IV_TOLERANCE", &value)?;
        }
        if let Some(value) = lookup("BSM_IV_MAX_ITERATIONS") {
            config.max_iterations = parse_env("BSM_IV_MAX_ITERATIONS", &value)?;
        }
        if let Some(value) = lookup("BSM_IV_MODE") {
            config.mode = SolverMode::from_str(&value)?;
        }
        if let Some(value) = lookup("BSM_IV_LOWER_BOUND") {
            config.lower_bound = parse_env("BSM_IV_LOWER_BOUND", &value)?;
        }
        if let Some(value) = lookup("BSM_IV_UPPER_BOUND") {
            config.upper_bound = parse_env("BSM_IV_UPPER_BOUND", &value)?;
        }
        if let Some(value) = lookup("BSM_IV_VEGA_FLOOR") {
            config.vega_floor = parse_env("BSM_IV_VEGA_FLOOR", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_guess.is_finite() {
            return Err(invalid("initial_guess", "must be finite"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid("tolerance", "must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be > 0"));
        }
        if !(self.lower_bound.is_finite() && self.lower_bound > 0.0) {
            return Err(invalid("lower_bound", "must be positive"));
        }
        if !(self.upper_bound.is_finite() && self.upper_bound > self.lower_bound) {
            return Err(invalid("upper_bound", "must exceed lower_bound"));
        }
        if self.vega_floor.is_nan() || self.vega_floor < 0.0 {
            return Err(invalid("vega_floor", "must be non-negative"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid number", key, value)))
}
