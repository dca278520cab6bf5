//! # Normal Distribution
//!
//! Univariate normal (Gaussian) distribution parameterized by mean and
//! standard deviation.

use crate::distribution::{Continuous, Univariate};
use crate::function::erfc;
use crate::statistics::{Entropy, Max, Mean, Median, Min, Mode, Skewness, Variance};
use crate::{Result, StatsError};
use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};

/// ln(sqrt(2 * pi))
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// The normal distribution `N(mean, std_dev^2)`.
///
/// # Examples
///
/// ```
/// use momenta_core::distribution::{Continuous, Normal, Univariate};
/// use momenta_core::statistics::Mean;
///
/// let n = Normal::new(0.0, 1.0).unwrap();
/// assert_eq!(n.mean(), 0.0);
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-7);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Constructs a new normal distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if `mean` or `std_dev` are NaN, or if `std_dev`
    /// is not strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Normal> {
        if mean.is_nan() {
            return Err(StatsError::ArgNotNan("mean"));
        }
        if std_dev.is_nan() {
            return Err(StatsError::ArgNotNan("std_dev"));
        }
        if std_dev <= 0.0 {
            return Err(StatsError::ArgMustBePositive("std_dev"));
        }
        Ok(Normal { mean, std_dev })
    }

    /// The standard normal distribution `N(0, 1)`.
    #[must_use]
    pub fn standard() -> Normal {
        Normal {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Distribution<f64> for Normal {
    /// Generates a sample using the Box-Muller transform.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen_range samples [0, 1); shift to (0, 1] so ln() stays finite
        let u1: f64 = 1.0 - rng.gen_range(0.0..1.0);
        let u2: f64 = rng.gen_range(0.0..1.0);
        let radius = (-2.0 * u1.ln()).sqrt();
        self.mean + self.std_dev * radius * (2.0 * PI * u2).cos()
    }
}

impl Min<f64> for Normal {
    fn min(&self) -> f64 {
        f64::NEG_INFINITY
    }
}

impl Max<f64> for Normal {
    fn max(&self) -> f64 {
        f64::INFINITY
    }
}

impl Mean<f64> for Normal {
    fn mean(&self) -> f64 {
        self.mean
    }
}

impl Variance<f64> for Normal {
    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Entropy<f64> for Normal {
    /// Returns the entropy `ln(std_dev * sqrt(2 * pi * e))`.
    fn entropy(&self) -> f64 {
        self.std_dev.ln() + LN_SQRT_2PI + 0.5
    }
}

impl Skewness<f64> for Normal {
    fn skewness(&self) -> f64 {
        0.0
    }
}

impl Median<f64> for Normal {
    fn median(&self) -> f64 {
        self.mean
    }
}

impl Mode<f64> for Normal {
    fn mode(&self) -> f64 {
        self.mean
    }
}

impl Univariate<f64> for Normal {
    /// Calculates the cumulative distribution function via the
    /// complementary error function.
    fn cdf(&self, x: f64) -> f64 {
        0.5 * erfc((self.mean - x) / (self.std_dev * SQRT_2))
    }
}

impl Continuous<f64, f64> for Normal {
    /// Calculates the probability density function at `x`.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// (1 / (σ * sqrt(2π))) * e^(-(x - μ)^2 / (2σ^2))
    /// ```
    fn pdf(&self, x: f64) -> f64 {
        let d = (x - self.mean) / self.std_dev;
        (-0.5 * d * d).exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    /// Calculates the log probability density function at `x`.
    fn ln_pdf(&self, x: f64) -> f64 {
        let d = (x - self.mean) / self.std_dev;
        -0.5 * d * d - LN_SQRT_2PI - self.std_dev.ln()
    }
}

// =============================================================================
// TESTS
// =============================================================================
