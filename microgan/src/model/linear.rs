//! Affine layer `x @ W + b` with uniform fan-in initialization.

use rand::distr::StandardUniform;
use rand::Rng;
use rand_distr::Distribution;

use super::Module;
use crate::autograd::{MatrixValue, ValueRef};
use crate::error::{ensure_extent, ensure_positive, Result};

/// A fully connected layer: weight `[in_dim, out_dim]`, bias `[1, out_dim]`.
#[derive(Clone, Debug)]
pub struct Affine {
    weight: MatrixValue,
    bias: MatrixValue,
}

impl Affine {
    /// Initializes weight and bias from `U(-1/sqrt(in_dim), 1/sqrt(in_dim))`.
    ///
    /// # Errors
    ///
    /// [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when either dimension is zero.
    pub fn new<R>(in_dim: usize, out_dim: usize, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        ensure_positive("in_dim", in_dim)?;
        ensure_positive("out_dim", out_dim)?;
        let bound = 1.0 / (in_dim as f64).sqrt();
        let mut draw = || {
            let u: f64 = StandardUniform.sample(&mut *rng);
            bound * (2.0 * u - 1.0)
        };
        let weight = MatrixValue::leaves(in_dim, out_dim, |_, _| draw())?;
        let bias = MatrixValue::leaves(1, out_dim, |_, _| draw())?;
        Ok(Affine { weight, bias })
    }

    /// Builds a layer from explicit row-major weights and a bias row.
    ///
    /// # Errors
    ///
    /// - [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `bias` is empty.
    /// - [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `weight.len()` is not a multiple of `bias.len()`.
    pub fn from_values(weight: &[f64], bias: &[f64]) -> Result<Self> {
        let out_dim = bias.len();
        ensure_positive("out_dim", out_dim)?;
        let in_dim = weight.len() / out_dim;
        ensure_positive("in_dim", in_dim)?;
        ensure_extent("Affine::from_values", in_dim * out_dim, weight.len())?;
        let weight = MatrixValue::leaves(in_dim, out_dim, |r, c| weight[r * out_dim + c])?;
        let bias = MatrixValue::leaves(1, out_dim, |_, c| bias[c])?;
        Ok(Affine { weight, bias })
    }

    /// Input width.
    #[must_use]
    pub fn in_dim(&self) -> usize {
        self.weight.rows()
    }

    /// Output width.
    #[must_use]
    pub fn out_dim(&self) -> usize {
        self.weight.cols()
    }

    /// `x @ W + b` for a batch `x` of shape `[B, in_dim]`.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `x.cols() != in_dim`.
    pub fn forward(&self, x: &MatrixValue) -> Result<MatrixValue> {
        x.matmul(&self.weight)?.add_row(&self.bias)
    }
}

impl Module for Affine {
    fn parameters(&self) -> Vec<ValueRef> {
        self.weight
            .nodes()
            .iter()
            .chain(self.bias.nodes())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::autograd::ScalarNode;
    use crate::matrix::Matrix;

    #[test]
    fn init_respects_fan_in_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Affine::new(16, 1, &mut rng).unwrap();
        assert_eq!((layer.in_dim(), layer.out_dim()), (16, 1));
        assert_eq!(layer.parameter_count(), 17);
        assert!(layer.parameter_values().iter().all(|v| v.abs() <= 0.25));
    }

    #[test]
    fn forward_computes_affine_map() {
        let layer = Affine::from_values(&[2.0, -1.0], &[0.5]).unwrap();
        let x = MatrixValue::constant(&Matrix::new(2, 2, vec![1.0, 1.0, 3.0, 2.0]).unwrap());
        let y = layer.forward(&x).unwrap();
        assert_eq!(y.shape(), (2, 1));
        assert_eq!(y.data(), vec![1.5, 4.5]);
    }

    #[test]
    fn forward_backpropagates_into_parameters() {
        let layer = Affine::from_values(&[2.0], &[0.0]).unwrap();
        let x = MatrixValue::constant(&Matrix::column(vec![1.0, 2.0]).unwrap());
        let y = layer.forward(&x).unwrap();
        ValueRef::sum(y.nodes()).backward();
        let grads: Vec<f64> = layer.parameters().iter().map(ValueRef::grad).collect();
        assert_eq!(grads, vec![3.0, 2.0]);
        layer.zero_grad();
        assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    }

    #[test]
    fn from_values_rejects_ragged_weights() {
        assert!(Affine::from_values(&[1.0, 2.0, 3.0], &[0.0, 0.0]).is_err());
        assert!(Affine::from_values(&[1.0], &[]).is_err());
    }
}
