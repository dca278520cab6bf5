//! # Descriptive Statistics
//!
//! Empirical moments over `f64` slices.
//!
//! Empty input yields `NAN`, and NaN observations propagate into every
//! result, so callers validating their data do it once at the boundary
//! (the CLI layer rejects empty and malformed files before reaching here).

use super::{Median, OrderStatistics};

/// Empirical moments of a data container.
pub trait Statistics {
    /// Arithmetic mean, `NAN` for empty data.
    fn mean(&self) -> f64;

    /// Unbiased sample variance (n − 1 denominator), `NAN` for fewer than
    /// two observations.
    fn variance(&self) -> f64;

    /// Sample standard deviation.
    fn std_dev(&self) -> f64;

    /// Smallest observation, `NAN` for empty data.
    fn min(&self) -> f64;

    /// Largest observation, `NAN` for empty data.
    fn max(&self) -> f64;
}

impl Statistics for [f64] {
    fn mean(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.iter().sum::<f64>() / self.len() as f64
    }

    fn variance(&self) -> f64 {
        if self.len() < 2 {
            return f64::NAN;
        }
        // Two-pass algorithm: numerically stable for the data sizes the
        // crate targets
        let mean = self.mean();
        let sum_sq: f64 = self.iter().map(|&x| (x - mean) * (x - mean)).sum();
        sum_sq / (self.len() - 1) as f64
    }

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    fn min(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        // f64::min ignores NaN, so keep it sticky by hand
        self.iter().fold(f64::INFINITY, |acc, &x| {
            if x.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                acc.min(x)
            }
        })
    }

    fn max(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.iter().fold(f64::NEG_INFINITY, |acc, &x| {
            if x.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                acc.max(x)
            }
        })
    }
}

impl Median<f64> for [f64] {
    /// Empirical median via selection on a scratch copy, so the original
    /// ordering is preserved.
    fn median(&self) -> f64 {
        let n = self.len();
        if n == 0 {
            return f64::NAN;
        }
        let mut scratch = self.to_vec();
        if n % 2 == 1 {
            scratch.order_statistic(n / 2 + 1)
        } else {
            let lower = scratch.order_statistic(n / 2);
            let mut scratch = self.to_vec();
            let upper = scratch.order_statistic(n / 2 + 1);
            0.5 * (lower + upper)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_almost_eq;

    #[test]
    fn mean_of_simple_data() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_almost_eq!(data.mean(), 3.0, 1e-14);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        let data: [f64; 0] = [];
        assert!(data.mean().is_nan());
    }

    #[test]
    fn sample_variance_uses_n_minus_one() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_almost_eq!(data.variance(), 2.5, 1e-14);
        assert_almost_eq!(data.std_dev(), 2.5_f64.sqrt(), 1e-14);
    }

    #[test]
    fn variance_needs_two_observations() {
        let data = [1.0];
        assert!(data.variance().is_nan());
    }

    #[test]
    fn min_max() {
        let data = [3.0, -1.0, 7.0, 0.0];
        assert_eq!(data.min(), -1.0);
        assert_eq!(data.max(), 7.0);
    }

    #[test]
    fn nan_propagates() {
        let data = [1.0, f64::NAN, 3.0];
        assert!(data.mean().is_nan());
        assert!(data.min().is_nan());
        assert!(data.max().is_nan());
    }

    #[test]
    fn nan_propagates_regardless_of_position() {
        // Later non-NaN elements must not wash the NaN back out
        let data = [f64::NAN, 2.0, 3.0, 4.0];
        assert!(data.min().is_nan());
        assert!(data.max().is_nan());

        let data = [2.0, 3.0, f64::NAN];
        assert!(data.min().is_nan());
        assert!(data.max().is_nan());
    }

    #[test]
    fn median_odd_and_even() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(data.median(), 2.0);

        let data = [4.0, 1.0, 3.0, 2.0];
        assert_almost_eq!(data.median(), 2.5, 1e-14);
    }

    #[test]
    fn median_preserves_input_order() {
        let data = [3.0, 1.0, 2.0];
        let _ = data.median();
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }
}
