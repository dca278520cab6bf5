//! # Distribution Module
//!
//! Continuous probability distributions.
//!
//! Every distribution validates its parameters at construction and returns
//! [`crate::StatsError`] for invalid input; once built, evaluation is total.
//! Sampling goes through [`rand::distributions::Distribution`] so any
//! `rand` RNG works as the randomness source.

mod normal;
mod pareto;

#[cfg(feature = "nightly")]
mod multivariate_normal;

pub use normal::Normal;
pub use pareto::Pareto;

#[cfg(feature = "nightly")]
pub use multivariate_normal::MultivariateNormal;

use crate::statistics::{Max, Min};

/// Evaluation of a continuous density.
pub trait Continuous<K, T> {
    /// Probability density function at `x`.
    fn pdf(&self, x: K) -> T;

    /// Natural log of the probability density function at `x`.
    fn ln_pdf(&self, x: K) -> T;
}

/// A univariate distribution with a cumulative distribution function over
/// the domain given by [`Min`] and [`Max`].
pub trait Univariate<T>: Min<T> + Max<T> {
    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: T) -> T;
}

// =============================================================================
// TEST SUPPORT
// =============================================================================
