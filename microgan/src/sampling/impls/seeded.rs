//! [`SampleSource`](super::super::SampleSource) backed by a seeded `StdRng`.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::super::{make_gaussian_batch, make_uniform_batch, SampleSource};
use crate::error::Result;
use crate::matrix::Matrix;

/// Reproducible sample source: the same seed yields the same sequence of batches.
///
/// The generator also exposes its RNG ([`SeededSampler::rng`]) so parameter
/// initialization draws from the same stream as the batches.
#[derive(Clone, Debug)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    /// Creates a sampler seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        SeededSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Mutable access to the underlying RNG.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl SampleSource for SeededSampler {
    fn gaussian_batch(&mut self, n_samples: usize, n_dim: usize) -> Result<Matrix> {
        make_gaussian_batch(&mut self.rng, n_samples, n_dim)
    }

    fn uniform_batch(&mut self, n_samples: usize, n_dim: usize) -> Result<Matrix> {
        make_uniform_batch(&mut self.rng, n_samples, n_dim)
    }
}
