//! Sample generators: "real" standard-normal batches and uniform noise batches.
//!
//! This module defines the **trait** ([`SampleSource`]) and the free functions that
//! draw a batch from any [`rand::Rng`]. Implementations (e.g. [`SeededSampler`],
//! which owns a reproducible `StdRng`) are in the `impls` submodule.

mod impls;

use rand::distr::StandardUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{ensure_positive, Result};
use crate::matrix::Matrix;

pub use impls::SeededSampler;

/// Draws an `n_samples x n_dim` batch of i.i.d. standard-normal values.
///
/// # Errors
///
/// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `n_samples` or `n_dim` is zero.
pub fn make_gaussian_batch<R>(rng: &mut R, n_samples: usize, n_dim: usize) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    ensure_positive("n_samples", n_samples)?;
    ensure_positive("n_dim", n_dim)?;
    Matrix::from_fn(n_samples, n_dim, |_, _| StandardNormal.sample(&mut *rng))
}

/// Draws an `n_samples x n_dim` batch of i.i.d. uniform values in `[0, 1)`.
///
/// # Errors
///
/// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `n_samples` or `n_dim` is zero.
pub fn make_uniform_batch<R>(rng: &mut R, n_samples: usize, n_dim: usize) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    ensure_positive("n_samples", n_samples)?;
    ensure_positive("n_dim", n_dim)?;
    Matrix::from_fn(n_samples, n_dim, |_, _| StandardUniform.sample(&mut *rng))
}

/// A source of training and evaluation batches.
///
/// The trainer and [`evaluate`](crate::eval::evaluate) draw through this trait so one
/// seeded stream drives the whole run.
pub trait SampleSource {
    /// Real data: `n_samples x n_dim` standard-normal values.
    fn gaussian_batch(&mut self, n_samples: usize, n_dim: usize) -> Result<Matrix>;

    /// Noise: `n_samples x n_dim` uniform `[0, 1)` values.
    fn uniform_batch(&mut self, n_samples: usize, n_dim: usize) -> Result<Matrix>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::GanError;

    #[test]
    fn gaussian_batch_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = make_gaussian_batch(&mut rng, 128, 1).unwrap();
        assert_eq!(m.shape(), (128, 1));
    }

    #[test]
    fn uniform_batch_values_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = make_uniform_batch(&mut rng, 64, 10).unwrap();
        assert_eq!(m.shape(), (64, 10));
        assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn zero_sizes_are_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            make_gaussian_batch(&mut rng, 0, 1),
            Err(GanError::InvalidArgument {
                name: "n_samples",
                ..
            })
        ));
        assert!(matches!(
            make_uniform_batch(&mut rng, 4, 0),
            Err(GanError::InvalidArgument { name: "n_dim", .. })
        ));
    }

    #[test]
    fn gaussian_batch_moments_are_plausible() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = make_gaussian_batch(&mut rng, 20_000, 1).unwrap();
        let xs = m.as_slice();
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var.sqrt() - 1.0).abs() < 0.05, "std {}", var.sqrt());
    }

    #[test]
    fn same_seed_same_batches() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        assert_eq!(
            make_uniform_batch(&mut a, 5, 3).unwrap(),
            make_uniform_batch(&mut b, 5, 3).unwrap()
        );
    }

    proptest! {
        #[test]
        fn batches_always_have_requested_shape(s in 1usize..64, d in 1usize..16, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = make_gaussian_batch(&mut rng, s, d).unwrap();
            let u = make_uniform_batch(&mut rng, s, d).unwrap();
            prop_assert_eq!(g.shape(), (s, d));
            prop_assert_eq!(u.shape(), (s, d));
        }
    }
}
