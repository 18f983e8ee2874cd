//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ(x)
//! - `norm_pdf`: Probability density function φ(x)
//!
//! Both are total functions over `f64`: they never panic, saturate (or
//! underflow) for large |x|, and propagate NaN.

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) through the error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// # Accuracy
/// Uses the double-precision `erf` from `libm`, so results agree with the
/// closed form to within a few ulps. Φ saturates to exactly 0 or 1 once
/// `erf` rounds to ∓1 (|x| above roughly 8.3).
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// assert_eq!(norm_cdf(40.0), 1.0);
/// assert_eq!(norm_cdf(-40.0), 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Returns
/// The density, in [0, 1/sqrt(2π)]. Underflows to 0 for large |x|.
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// assert_eq!(norm_pdf(50.0), 0.0);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}
