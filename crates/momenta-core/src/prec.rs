//! # Precision Module
//!
//! Floating-point comparison helpers for the crate and its tests.

/// Default accuracy for comparisons where the caller has no better bound.
pub const DEFAULT_ACC: f64 = 1e-13;

/// Compare two floats for near-equality within an absolute accuracy.
///
/// Infinite values compare by equality (same sign of infinity matches).
/// NaN never compares equal to anything.
#[must_use]
pub fn almost_eq(a: f64, b: f64, acc: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < acc
}

/// Compare two floats with the default accuracy.
#[must_use]
pub fn almost_eq_default(a: f64, b: f64) -> bool {
    almost_eq(a, b, DEFAULT_ACC)
}

/// Assert that two floats are within `acc` of each other.
///
/// Test helper used across the crate's unit tests.
#[macro_export]
macro_rules! assert_almost_eq {
    ($a:expr, $b:expr, $acc:expr) => {
        let (a, b, acc): (f64, f64, f64) = ($a, $b, $acc);
        assert!(
            $crate::prec::almost_eq(a, b, acc),
            "assertion failed: `{}` is not within `{}` of `{}`",
            a,
            acc,
            b
        );
    };
}

// =============================================================================
// TESTS
// =============================================================================
