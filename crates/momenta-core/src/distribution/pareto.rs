//! # Pareto Distribution
//!
//! Pareto (type I) distribution parameterized by scale `x_m` and shape `α`.

use crate::distribution::{Continuous, Univariate};
use crate::statistics::{Entropy, Max, Mean, Median, Min, Mode, Skewness, Variance};
use crate::{Result, StatsError};
use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};

/// The Pareto distribution with scale `x_m` and shape `α`.
///
/// # Examples
///
/// ```
/// use momenta_core::distribution::{Continuous, Pareto};
/// use momenta_core::statistics::Mean;
/// use momenta_core::prec;
///
/// let p = Pareto::new(1.0, 2.0).unwrap();
/// assert_eq!(p.mean(), 2.0);
/// assert!(prec::almost_eq(p.pdf(2.0), 0.25, 1e-15));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pareto {
    scale: f64,
    shape: f64,
}

impl Pareto {
    /// Constructs a new Pareto distribution with scale `scale` and shape
    /// `shape`.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is NaN or not strictly
    /// positive.
    pub fn new(scale: f64, shape: f64) -> Result<Pareto> {
        if scale.is_nan() {
            return Err(StatsError::ArgNotNan("scale"));
        }
        if shape.is_nan() {
            return Err(StatsError::ArgNotNan("shape"));
        }
        if scale <= 0.0 {
            return Err(StatsError::ArgMustBePositive("scale"));
        }
        if shape <= 0.0 {
            return Err(StatsError::ArgMustBePositive("shape"));
        }
        Ok(Pareto { scale, shape })
    }

    /// Returns the scale `x_m`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the shape `α`.
    #[must_use]
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Distribution<f64> for Pareto {
    /// Generates a sample by inverse transform sampling.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen_range samples [0, 1); shift to (0, 1] so the power stays finite
        let u: f64 = 1.0 - rng.gen_range(0.0..1.0);
        self.scale * u.powf(-1.0 / self.shape)
    }
}

impl Min<f64> for Pareto {
    /// Returns the minimum of the domain, the scale `x_m`.
    fn min(&self) -> f64 {
        self.scale
    }
}

impl Max<f64> for Pareto {
    fn max(&self) -> f64 {
        f64::INFINITY
    }
}

impl Mean<f64> for Pareto {
    /// Returns the mean.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// if α <= 1 { INF } else { (α * x_m) / (α - 1) }
    /// ```
    fn mean(&self) -> f64 {
        if self.shape <= 1.0 {
            f64::INFINITY
        } else {
            (self.shape * self.scale) / (self.shape - 1.0)
        }
    }
}

impl Variance<f64> for Pareto {
    /// Returns the variance.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// if α <= 2 { INF } else { (x_m / (α - 1))^2 * (α / (α - 2)) }
    /// ```
    fn variance(&self) -> f64 {
        if self.shape <= 2.0 {
            f64::INFINITY
        } else {
            let a = self.scale / (self.shape - 1.0);
            a * a * self.shape / (self.shape - 2.0)
        }
    }

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Entropy<f64> for Pareto {
    /// Returns the entropy `ln(α / x_m) - 1/α - 1`.
    fn entropy(&self) -> f64 {
        self.shape.ln() - self.scale.ln() - (1.0 / self.shape) - 1.0
    }
}

impl Skewness<f64> for Pareto {
    /// Returns the skewness, or `NAN` when `α <= 3` where the moment does
    /// not exist.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// (2 * (α + 1) / (α - 3)) * sqrt((α - 2) / α)
    /// ```
    fn skewness(&self) -> f64 {
        if self.shape <= 3.0 {
            return f64::NAN;
        }
        (2.0 * (self.shape + 1.0) / (self.shape - 3.0)) * ((self.shape - 2.0) / self.shape).sqrt()
    }
}

impl Median<f64> for Pareto {
    /// Returns the median `x_m * 2^(1/α)`.
    fn median(&self) -> f64 {
        self.scale * 2.0_f64.powf(1.0 / self.shape)
    }
}

impl Mode<f64> for Pareto {
    /// Returns the mode, the scale `x_m`.
    fn mode(&self) -> f64 {
        self.scale
    }
}

impl Univariate<f64> for Pareto {
    /// Calculates the cumulative distribution function at `x`.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// if x < x_m { 0 } else { 1 - (x_m / x)^α }
    /// ```
    fn cdf(&self, x: f64) -> f64 {
        if x < self.scale {
            0.0
        } else {
            1.0 - (self.scale / x).powf(self.shape)
        }
    }
}

impl Continuous<f64, f64> for Pareto {
    /// Calculates the probability density function at `x`.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// if x < x_m { 0 } else { (α * x_m^α) / x^(α + 1) }
    /// ```
    fn pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            0.0
        } else {
            (self.shape * self.scale.powf(self.shape)) / x.powf(self.shape + 1.0)
        }
    }

    /// Calculates the log probability density function at `x`.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// if x < x_m { -INF } else { ln(α) + α*ln(x_m) - (α + 1)*ln(x) }
    /// ```
    fn ln_pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            f64::NEG_INFINITY
        } else {
            self.shape.ln() + self.shape * self.scale.ln() - (self.shape + 1.0) * x.ln()
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
    use crate::distribution::internal::check_continuous_distribution;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn try_create(scale: f64, shape: f64) -> Pareto {
        let p = Pareto::new(scale, shape);
        assert!(p.is_ok());
        p.unwrap_or_else(|_| Pareto { scale, shape })
    }

    fn test_case<F>(scale: f64, shape: f64, expected: f64, eval: F)
    where
        F: Fn(Pareto) -> f64,
    {
        let p = try_create(scale, shape);
        assert_eq!(expected, eval(p));
    }

    fn test_almost<F>(scale: f64, shape: f64, expected: f64, acc: f64, eval: F)
    where
        F: Fn(Pareto) -> f64,
    {
        let p = try_create(scale, shape);
        assert_almost_eq!(expected, eval(p), acc);
    }

    #[test]
    fn test_create() {
        for (scale, shape) in [
            (10.0, 0.1),
            (5.0, 1.0),
            (0.1, 10.0),
            (10.0, 100.0),
            (1.0, f64::INFINITY),
        ] {
            let p = try_create(scale, shape);
            assert_eq!(scale, p.scale());
            assert_eq!(shape, p.shape());
        }
    }

    #[test]
    fn test_bad_create() {
        assert!(Pareto::new(0.0, 0.0).is_err());
        assert!(Pareto::new(1.0, -1.0).is_err());
        assert!(Pareto::new(-1.0, 1.0).is_err());
        assert!(Pareto::new(f64::NAN, 1.0).is_err());
        assert!(Pareto::new(1.0, f64::NAN).is_err());
        assert_eq!(
            Pareto::new(1.0, 0.0),
            Err(StatsError::ArgMustBePositive("shape"))
        );
    }

    #[test]
    fn test_mean() {
        test_case(1.0, 0.5, f64::INFINITY, |p| p.mean());
        test_case(1.0, 1.0, f64::INFINITY, |p| p.mean());
        test_case(1.0, 2.0, 2.0, |p| p.mean());
        test_case(2.0, 3.0, 3.0, |p| p.mean());
    }

    #[test]
    fn test_variance() {
        test_case(1.0, 1.0, f64::INFINITY, |p| p.variance());
        test_case(1.0, 2.0, f64::INFINITY, |p| p.variance());
        test_case(1.0, 3.0, 0.75, |p| p.variance());
        test_almost(10.0, 10.0, 125.0 / 81.0, 1e-13, |p| p.variance());
    }

    #[test]
    fn test_entropy() {
        test_case(1.0, 1.0, -2.0, |p| p.entropy());
        test_almost(1.0, 2.0, 2.0_f64.ln() - 1.5, 1e-14, |p| p.entropy());
        test_almost(0.5, 4.0, 8.0_f64.ln() - 1.25, 1e-14, |p| p.entropy());
    }

    #[test]
    fn test_skewness() {
        // Undefined for shape <= 3
        let p = try_create(1.0, 3.0);
        assert!(p.skewness().is_nan());
        let p = try_create(1.0, 1.0);
        assert!(p.skewness().is_nan());

        test_almost(1.0, 4.0, 10.0 * 0.5_f64.sqrt(), 1e-13, |p| p.skewness());
        test_almost(2.0, 5.0, 6.0 * 0.6_f64.sqrt(), 1e-13, |p| p.skewness());
    }

    #[test]
    fn test_median() {
        test_case(1.0, 1.0, 2.0, |p| p.median());
        test_almost(3.0, 2.0, 3.0 * 2.0_f64.sqrt(), 1e-13, |p| p.median());
    }

    #[test]
    fn test_mode() {
        test_case(0.1, 1.0, 0.1, |p| p.mode());
        test_case(2.0, 1.0, 2.0, |p| p.mode());
    }

    #[test]
    fn test_min_max() {
        test_case(0.2, 1.0, 0.2, |p| p.min());
        test_case(10.0, 2.0, 10.0, |p| p.min());
        test_case(1.0, 0.1, f64::INFINITY, |p| p.max());
        test_case(3.0, 10.0, f64::INFINITY, |p| p.max());
    }

    #[test]
    fn test_pdf() {
        test_case(1.0, 1.0, 0.0, |p| p.pdf(0.1));
        test_case(1.0, 1.0, 1.0, |p| p.pdf(1.0));
        test_almost(1.0, 1.0, 4.0 / 9.0, 1e-15, |p| p.pdf(1.5));
        test_almost(1.0, 1.0, 1.0 / 25.0, 1e-15, |p| p.pdf(5.0));
        test_case(1.0, 4.0, 4.0, |p| p.pdf(1.0));
        test_almost(1.0, 4.0, 128.0 / 243.0, 1e-15, |p| p.pdf(1.5));
        test_almost(3.0, 2.0, 2.0 / 3.0, 1e-15, |p| p.pdf(3.0));
        test_almost(3.0, 2.0, 18.0 / 125.0, 1e-15, |p| p.pdf(5.0));
        test_almost(25.0, 100.0, 1.5777218104420236e-30, 1e-40, |p| p.pdf(50.0));
    }

    #[test]
    fn test_ln_pdf() {
        test_case(1.0, 1.0, f64::NEG_INFINITY, |p| p.ln_pdf(0.1));
        test_case(1.0, 1.0, 0.0, |p| p.ln_pdf(1.0));
        test_almost(1.0, 1.0, (4.0_f64 / 9.0).ln(), 1e-14, |p| p.ln_pdf(1.5));
        test_almost(1.0, 4.0, 4.0_f64.ln(), 1e-14, |p| p.ln_pdf(1.0));
        test_almost(3.0, 2.0, (2.0_f64 / 3.0).ln(), 1e-14, |p| p.ln_pdf(3.0));
        test_almost(25.0, 100.0, 1.5777218104420236e-30_f64.ln(), 1e-12, |p| {
            p.ln_pdf(50.0)
        });
    }

    #[test]
    fn test_cdf() {
        test_case(1.0, 1.0, 0.0, |p| p.cdf(0.5));
        test_case(1.0, 1.0, 0.0, |p| p.cdf(1.0));
        test_case(1.0, 1.0, 0.5, |p| p.cdf(2.0));
        test_almost(1.0, 1.0, 0.9, 1e-14, |p| p.cdf(10.0));
        test_almost(3.0, 2.0, 1.0 - 9.0 / 25.0, 1e-14, |p| p.cdf(5.0));
    }

    #[test]
    fn samples_stay_in_domain() {
        let p = try_create(2.0, 3.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = p.sample(&mut rng);
            assert!(x >= 2.0, "sample below scale: {x}");
        }
    }

    #[test]
    fn sampled_mean_is_close() {
        // shape 3 has finite mean (3/2 * scale) and variance
        let p = try_create(1.0, 3.0);
        let mut rng = StdRng::seed_from_u64(42);
        let sum: f64 = (0..20_000).map(|_| p.sample(&mut rng)).sum();
        let mean = sum / 20_000.0;
        assert!((mean - 1.5).abs() < 0.05, "sampled mean drifted: {mean}");
    }

    #[test]
    fn test_continuous() {
        check_continuous_distribution(&try_create(1.0, 10.0), 1.0, 10.0);
        check_continuous_distribution(&try_create(0.1, 2.0), 0.1, 100.0);
    }
}
