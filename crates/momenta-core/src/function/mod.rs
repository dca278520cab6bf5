//! # Function Module
//!
//! Special functions used by the distributions.

mod erf;

pub use erf::{erf, erfc};
