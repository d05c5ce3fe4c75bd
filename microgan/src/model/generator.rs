//! Generator network: maps an `N`-dimensional noise vector to one synthetic sample.

use rand::Rng;

use super::{Affine, Module};
use crate::autograd::{MatrixValue, ValueRef};
use crate::error::{ensure_extent, ensure_positive, Result};
use crate::matrix::Matrix;

/// Affine `[N] -> [1]` followed by leaky ReLU (`x` if `x > 0`, else `slope * x`).
///
/// Output is deterministic for fixed parameters and input, and differentiable with
/// respect to the weight `[N, 1]` and bias `[1]`.
#[derive(Clone, Debug)]
pub struct Generator {
    layer: Affine,
    leaky_slope: f64,
}

impl Generator {
    /// Creates a generator for `noise_dim`-wide noise with randomly initialized parameters.
    ///
    /// # Errors
    ///
    /// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `noise_dim` is zero.
    pub fn new<R>(noise_dim: usize, leaky_slope: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        ensure_positive("noise_dim", noise_dim)?;
        Ok(Generator {
            layer: Affine::new(noise_dim, 1, rng)?,
            leaky_slope,
        })
    }

    /// Creates a generator with explicit weights (one per noise dimension) and bias.
    ///
    /// # Errors
    ///
    /// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `weights` is empty.
    pub fn from_parameters(weights: &[f64], bias: f64, leaky_slope: f64) -> Result<Self> {
        ensure_positive("noise_dim", weights.len())?;
        Ok(Generator {
            layer: Affine::from_values(weights, &[bias])?,
            leaky_slope,
        })
    }

    /// Width of the noise vectors this generator accepts.
    #[must_use]
    pub fn noise_dim(&self) -> usize {
        self.layer.in_dim()
    }

    /// Negative-side slope of the leaky ReLU.
    #[must_use]
    pub fn leaky_slope(&self) -> f64 {
        self.leaky_slope
    }

    /// Maps a `[B, N]` noise batch to a `[B, 1]` batch of synthetic samples.
    ///
    /// The result is attached to the graph: a loss computed from it reaches the
    /// generator's parameters. Detach it before handing it to a step that must not.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `noise.cols() != noise_dim`.
    pub fn generate(&self, noise: &Matrix) -> Result<MatrixValue> {
        ensure_extent("generate", self.noise_dim(), noise.cols())?;
        let pre = self.layer.forward(&MatrixValue::constant(noise))?;
        let slope = self.leaky_slope;
        Ok(pre.map(|x| x.leaky_relu(slope)))
    }
}

impl Module for Generator {
    fn parameters(&self) -> Vec<ValueRef> {
        self.layer.parameters()
    }
}
