//! # Momenta Library
//!
//! This library exposes the Momenta CLI modules for testing and
//! integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export momenta_core for convenience
pub use momenta_core;
