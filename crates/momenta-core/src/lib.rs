//! # Momenta Core
//!
//! Pure statistics engine: continuous probability distributions and
//! descriptive statistics over `f64` data.
//!
//! The crate has three layers:
//! - [`statistics`] — traits shared by data containers and distributions
//!   (moments, order statistics, ranking),
//! - [`distribution`] — parametric distributions implementing those traits
//!   plus pdf/cdf evaluation and `rand` sampling,
//! - [`function`] — the special functions the distributions need.
//!
//! All operations are synchronous and never touch the filesystem or the
//! network. Invalid parameters are rejected at construction time through
//! [`StatsError`]; evaluation itself is total and reports undefined moments
//! as `NAN` or infinities.

pub mod distribution;
pub mod error;
pub mod function;
pub mod prec;
pub mod statistics;

pub use error::{Result, StatsError};
