//! # Statistics Module
//!
//! Traits shared by data containers and probability distributions.
//!
//! A distribution implements the moment traits ([`Mean`], [`Variance`],
//! [`Entropy`], ...) analytically; a slice of observations implements
//! [`Statistics`], [`OrderStatistics`] and [`Median`] empirically. Both
//! sides use the same vocabulary so calling code reads identically.

mod order_statistics;
mod slice_stats;

pub use order_statistics::{OrderStatistics, RankTieBreaker};
pub use slice_stats::Statistics;

/// Minimum value in the domain of a distribution or data set.
pub trait Min<T> {
    /// Returns the minimum.
    fn min(&self) -> T;
}

/// Maximum value in the domain of a distribution or data set.
pub trait Max<T> {
    /// Returns the maximum.
    fn max(&self) -> T;
}

/// First moment.
pub trait Mean<T> {
    /// Returns the mean.
    fn mean(&self) -> T;
}

/// Second central moment, for implementors whose variance is scalar-shaped
/// like their mean.
pub trait Variance<T>: Mean<T> {
    /// Returns the variance.
    fn variance(&self) -> T;

    /// Returns the standard deviation.
    fn std_dev(&self) -> T;
}

/// Covariance for multivariate implementors, where the second moment is a
/// matrix rather than a scalar.
pub trait Covariance<T> {
    /// Returns the covariance matrix.
    fn variance(&self) -> T;
}

/// Differential entropy.
pub trait Entropy<T> {
    /// Returns the entropy.
    fn entropy(&self) -> T;
}

/// Third standardized moment.
pub trait Skewness<T> {
    /// Returns the skewness, or `NAN` where the moment is undefined.
    fn skewness(&self) -> T;
}

/// Median of a distribution or data set.
pub trait Median<T> {
    /// Returns the median.
    fn median(&self) -> T;
}

/// Mode of a distribution.
pub trait Mode<T> {
    /// Returns the mode.
    fn mode(&self) -> T;
}
