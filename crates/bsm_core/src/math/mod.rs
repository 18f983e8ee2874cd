//! Mathematical building blocks.
//!
//! - [`distributions`]: standard normal CDF and density
//! - [`solvers`]: Newton-Raphson root finding with a tagged outcome

pub mod distributions;
pub mod solvers;
