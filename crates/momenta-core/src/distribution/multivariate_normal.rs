//! # Multivariate Normal Distribution
//!
//! Multivariate normal distribution over dynamically sized `nalgebra`
//! vectors, parameterized by a mean vector and covariance matrix.
//!
//! Gated behind the `nightly` feature together with the nalgebra
//! dependency.

use crate::distribution::{Continuous, Normal};
use crate::statistics::{Covariance, Entropy, Max, Mean, Min, Mode};
use crate::{Result, StatsError};
use nalgebra::{Cholesky, DMatrix, DVector};
use rand::Rng;
use rand::distributions::Distribution;
use std::f64::consts::{E, PI};

/// The multivariate normal distribution `N(μ, Σ)`.
///
/// # Examples
///
/// ```
/// use momenta_core::distribution::{Continuous, MultivariateNormal};
/// use momenta_core::statistics::Mean;
/// use nalgebra::DVector;
///
/// let mvn = MultivariateNormal::new(
///     vec![0.0, 0.0],
///     vec![1.0, 0.0, 0.0, 1.0],
/// ).unwrap();
/// let x = DVector::from_vec(vec![1.0, 1.0]);
/// assert!((mvn.pdf(&x) - 0.05854983152431917).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct MultivariateNormal {
    dim: usize,
    cov_chol: DMatrix<f64>,
    mu: DVector<f64>,
    cov: DMatrix<f64>,
    precision: DMatrix<f64>,
    ln_pdf_const: f64,
}

impl MultivariateNormal {
    /// Constructs a new multivariate normal distribution with mean vector
    /// `mean` and row-major covariance `cov` of length `mean.len()^2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions disagree, any entry is NaN, or
    /// the covariance matrix is not symmetric positive-definite.
    pub fn new(mean: Vec<f64>, cov: Vec<f64>) -> Result<Self> {
        let dim = mean.len();
        if dim == 0 {
            return Err(StatsError::EmptyData);
        }
        if cov.len() != dim * dim {
            return Err(StatsError::DimensionMismatch {
                mean: dim,
                rows: cov.len() / dim.max(1),
                cols: dim,
            });
        }

        let mu = DVector::from_vec(mean);
        let cov = DMatrix::from_row_slice(dim, dim, &cov);

        if mu.iter().any(|f| f.is_nan()) {
            return Err(StatsError::ArgNotNan("mean"));
        }
        if cov.iter().any(|f| f.is_nan()) {
            return Err(StatsError::ArgNotNan("cov"));
        }
        // Symmetry check before attempting the decomposition
        if cov.lower_triangle() != cov.upper_triangle().transpose() {
            return Err(StatsError::InvalidCovariance);
        }

        let Some(chol) = Cholesky::new(cov.clone()) else {
            return Err(StatsError::InvalidCovariance);
        };

        // ln((2π)^(-k/2) * det(Σ)^(-1/2)), precomputed once
        let ln_det = chol.determinant().ln();
        let ln_pdf_const = -0.5 * (dim as f64 * (2.0 * PI).ln() + ln_det);

        Ok(MultivariateNormal {
            dim,
            precision: chol.inverse(),
            cov_chol: chol.unpack(),
            mu,
            cov,
            ln_pdf_const,
        })
    }

    /// Returns the dimension `k` of the distribution.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn mahalanobis_squared(&self, x: &DVector<f64>) -> f64 {
        let dv = x - &self.mu;
        (&self.precision * &dv).dot(&dv)
    }
}

impl Distribution<DVector<f64>> for MultivariateNormal {
    /// Samples `L * z + μ` where `L` is the Cholesky factor of the
    /// covariance matrix and `z` is a vector of standard normal draws.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        let standard = Normal::standard();
        let z = DVector::from_fn(self.dim, |_, _| standard.sample(rng));
        &self.cov_chol * z + &self.mu
    }
}

impl Min<DVector<f64>> for MultivariateNormal {
    fn min(&self) -> DVector<f64> {
        DVector::repeat(self.dim, f64::NEG_INFINITY)
    }
}

impl Max<DVector<f64>> for MultivariateNormal {
    fn max(&self) -> DVector<f64> {
        DVector::repeat(self.dim, f64::INFINITY)
    }
}

impl Mean<DVector<f64>> for MultivariateNormal {
    /// Returns the mean vector used to construct the distribution.
    fn mean(&self) -> DVector<f64> {
        self.mu.clone()
    }
}

impl Covariance<DMatrix<f64>> for MultivariateNormal {
    /// Returns the covariance matrix used to construct the distribution.
    fn variance(&self) -> DMatrix<f64> {
        self.cov.clone()
    }
}

impl Entropy<f64> for MultivariateNormal {
    /// Returns the entropy `(1/2) * ln(det(2πe * Σ))`.
    fn entropy(&self) -> f64 {
        let scaled = self.cov.clone() * (2.0 * PI * E);
        match Cholesky::new(scaled) {
            Some(chol) => 0.5 * chol.determinant().ln(),
            // Construction guarantees positive-definiteness
            None => f64::NAN,
        }
    }
}

impl Mode<DVector<f64>> for MultivariateNormal {
    /// Returns the mode, which equals the mean `μ`.
    fn mode(&self) -> DVector<f64> {
        self.mu.clone()
    }
}

impl Continuous<&DVector<f64>, f64> for MultivariateNormal {
    /// Calculates the probability density function at `x`.
    ///
    /// # Formula
    ///
    /// ```ignore
    /// (2π)^(-k/2) * det(Σ)^(-1/2) * e^(-(1/2) * (x - μ)ᵀ * Σ⁻¹ * (x - μ))
    /// ```
    fn pdf(&self, x: &DVector<f64>) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// Calculates the log probability density function at `x`.
    fn ln_pdf(&self, x: &DVector<f64>) -> f64 {
        self.ln_pdf_const - 0.5 * self.mahalanobis_squared(x)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_almost_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn identity_2d() -> MultivariateNormal {
        match MultivariateNormal::new(vec![0.0, 0.0], vec![1.0, 0.0, 0.0, 1.0]) {
            Ok(mvn) => mvn,
            Err(e) => unreachable!("identity covariance is valid: {e}"),
        }
    }

    #[test]
    fn create_accepts_valid_input() {
        assert!(MultivariateNormal::new(vec![0.0], vec![1.0]).is_ok());
        assert!(MultivariateNormal::new(vec![1.0, 2.0], vec![2.0, 0.5, 0.5, 1.0]).is_ok());
    }

    #[test]
    fn create_rejects_dimension_mismatch() {
        let result = MultivariateNormal::new(vec![0.0, 0.0], vec![1.0, 0.0, 0.0]);
        assert!(matches!(
            result,
            Err(StatsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn create_rejects_empty_mean() {
        let result = MultivariateNormal::new(vec![], vec![]);
        assert_eq!(result.err(), Some(StatsError::EmptyData));
    }

    #[test]
    fn create_rejects_nan() {
        let result = MultivariateNormal::new(vec![f64::NAN, 0.0], vec![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(result.err(), Some(StatsError::ArgNotNan("mean")));

        let result = MultivariateNormal::new(vec![0.0, 0.0], vec![f64::NAN, 0.0, 0.0, 1.0]);
        assert_eq!(result.err(), Some(StatsError::ArgNotNan("cov")));
    }

    #[test]
    fn create_rejects_asymmetric_covariance() {
        let result = MultivariateNormal::new(vec![0.0, 0.0], vec![1.0, 0.5, 0.2, 1.0]);
        assert_eq!(result.err(), Some(StatsError::InvalidCovariance));
    }

    #[test]
    fn create_rejects_non_positive_definite() {
        // Symmetric but indefinite: eigenvalues 3 and -1
        let result = MultivariateNormal::new(vec![0.0, 0.0], vec![1.0, 2.0, 2.0, 1.0]);
        assert_eq!(result.err(), Some(StatsError::InvalidCovariance));
    }

    #[test]
    fn pdf_identity_covariance() {
        let mvn = identity_2d();
        let x = DVector::from_vec(vec![1.0, 1.0]);
        assert_almost_eq!(mvn.pdf(&x), 0.05854983152431917, 1e-15);

        let origin = DVector::from_vec(vec![0.0, 0.0]);
        assert_almost_eq!(mvn.pdf(&origin), 1.0 / (2.0 * PI), 1e-15);
    }

    #[test]
    fn ln_pdf_matches_pdf() {
        let mvn = identity_2d();
        let x = DVector::from_vec(vec![1.0, 1.0]);
        assert_almost_eq!(mvn.ln_pdf(&x), mvn.pdf(&x).ln(), 1e-12);
        assert_almost_eq!(mvn.ln_pdf(&x), -(2.0 * PI).ln() - 1.0, 1e-14);
    }

    #[test]
    fn mean_and_covariance_round_trip() {
        let mean = vec![1.0, -2.0];
        let cov = vec![2.0, 0.5, 0.5, 1.0];
        let mvn = match MultivariateNormal::new(mean, cov) {
            Ok(mvn) => mvn,
            Err(e) => unreachable!("valid parameters: {e}"),
        };
        assert_eq!(mvn.mean(), DVector::from_vec(vec![1.0, -2.0]));
        assert_eq!(mvn.mode(), DVector::from_vec(vec![1.0, -2.0]));
        assert_eq!(
            Covariance::variance(&mvn),
            DMatrix::from_row_slice(2, 2, &[2.0, 0.5, 0.5, 1.0])
        );
    }

    #[test]
    fn entropy_identity_covariance() {
        let mvn = identity_2d();
        // (1/2) ln(det(2πe I)) = ln(2πe) in two dimensions
        assert_almost_eq!(mvn.entropy(), (2.0 * PI * E).ln(), 1e-12);
    }

    #[test]
    fn domain_is_all_of_r_k() {
        let mvn = identity_2d();
        assert_eq!(mvn.min(), DVector::repeat(2, f64::NEG_INFINITY));
        assert_eq!(mvn.max(), DVector::repeat(2, f64::INFINITY));
    }

    #[test]
    fn samples_have_right_dimension() {
        let mvn = identity_2d();
        let mut rng = StdRng::seed_from_u64(11);
        let sample = mvn.sample(&mut rng);
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn sampled_mean_is_close() {
        let mvn = match MultivariateNormal::new(vec![3.0, -1.0], vec![1.0, 0.0, 0.0, 1.0]) {
            Ok(mvn) => mvn,
            Err(e) => unreachable!("valid parameters: {e}"),
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut acc = DVector::repeat(2, 0.0);
        for _ in 0..10_000 {
            acc += mvn.sample(&mut rng);
        }
        acc /= 10_000.0;
        assert!((acc[0] - 3.0).abs() < 0.05, "component 0 drifted: {}", acc[0]);
        assert!((acc[1] + 1.0).abs() < 0.05, "component 1 drifted: {}", acc[1]);
    }
}
