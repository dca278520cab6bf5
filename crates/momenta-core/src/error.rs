//! # Error Module
//!
//! Error types for distribution construction and data validation.
//!
//! Evaluation functions (pdf, cdf, moments) are total and never return an
//! error: undefined results surface as `NAN` or infinities. Errors exist
//! only at the boundaries where parameters or data enter the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors raised when constructing a distribution or validating data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A parameter that must be strictly positive was zero or negative.
    #[error("argument `{0}` must be positive")]
    ArgMustBePositive(&'static str),

    /// A parameter was NaN.
    #[error("argument `{0}` must not be NaN")]
    ArgNotNan(&'static str),

    /// The covariance matrix is not symmetric positive-definite.
    #[error("covariance matrix must be symmetric and positive-definite")]
    InvalidCovariance,

    /// The mean vector and covariance matrix dimensions disagree.
    #[error("mean vector has {mean} entries but covariance is {rows}x{cols}")]
    DimensionMismatch {
        /// Length of the mean vector.
        mean: usize,
        /// Covariance row count.
        rows: usize,
        /// Covariance column count.
        cols: usize,
    },

    /// An operation that requires data received an empty container.
    #[error("data container must not be empty")]
    EmptyData,
}

// =============================================================================
// TESTS
// =============================================================================
