//! Discriminator network: maps one sample to the probability that it is real.

use rand::Rng;

use super::{Affine, Module};
use crate::autograd::{MatrixValue, ValueRef, VectorValue};
use crate::error::{ensure_extent, Result};

/// Affine `[1] -> [1]` followed by the logistic sigmoid.
///
/// Outputs lie strictly inside `(0, 1)` and are differentiable with respect to
/// the weight `[1, 1]` and bias `[1]`.
#[derive(Clone, Debug)]
pub struct Discriminator {
    layer: Affine,
}

impl Discriminator {
    /// Width of the samples the discriminator accepts.
    pub const INPUT_DIM: usize = 1;

    /// Creates a discriminator with randomly initialized parameters.
    pub fn new<R>(rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        Ok(Discriminator {
            layer: Affine::new(Self::INPUT_DIM, 1, rng)?,
        })
    }

    /// Creates a discriminator with an explicit weight and bias.
    pub fn from_parameters(weight: f64, bias: f64) -> Result<Self> {
        Ok(Discriminator {
            layer: Affine::from_values(&[weight], &[bias])?,
        })
    }

    /// One probability per row of a `[B, 1]` batch.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `samples.cols() != 1`.
    pub fn discriminate(&self, samples: &MatrixValue) -> Result<VectorValue> {
        ensure_extent("discriminate", Self::INPUT_DIM, samples.cols())?;
        self.layer
            .forward(samples)?
            .map(ValueRef::sigmoid)
            .into_column()
    }
}

impl Module for Discriminator {
    fn parameters(&self) -> Vec<ValueRef> {
        self.layer.parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::autograd::ScalarNode;
    use crate::matrix::Matrix;
    use crate::GanError;

    #[test]
    fn discriminate_returns_one_probability_per_row() {
        let mut rng = StdRng::seed_from_u64(2);
        let d = Discriminator::new(&mut rng).unwrap();
        let x = MatrixValue::constant(&Matrix::column(vec![-1.0, 0.0, 1.0]).unwrap());
        let p = d.discriminate(&x).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(d.parameter_count(), 2);
    }

    #[test]
    fn discriminate_is_sigmoid_of_affine() {
        let d = Discriminator::from_parameters(2.0, -1.0).unwrap();
        let x = MatrixValue::constant(&Matrix::column(vec![0.5]).unwrap());
        assert_eq!(d.discriminate(&x).unwrap().data(), vec![0.5]);
    }

    #[test]
    fn extreme_inputs_stay_inside_open_interval() {
        let d = Discriminator::from_parameters(100.0, 0.0).unwrap();
        let x = MatrixValue::constant(&Matrix::column(vec![-1e6, -10.0, 10.0, 1e6]).unwrap());
        for p in d.discriminate(&x).unwrap().data() {
            assert!(p > 0.0 && p < 1.0, "p = {p}");
        }
    }

    #[test]
    fn gradient_reaches_parameters() {
        let d = Discriminator::from_parameters(0.0, 0.0).unwrap();
        let x = MatrixValue::constant(&Matrix::column(vec![2.0]).unwrap());
        let p = d.discriminate(&x).unwrap();
        p.nodes()[0].backward();
        // d sigmoid(w x + b) / dw = s (1 - s) x = 0.25 * 2
        assert_eq!(d.parameters()[0].grad(), 0.5);
        assert_eq!(d.parameters()[1].grad(), 0.25);
    }

    #[test]
    fn rejects_wide_samples() {
        let d = Discriminator::from_parameters(1.0, 0.0).unwrap();
        let x = MatrixValue::constant(&Matrix::filled(2, 3, 0.0).unwrap());
        assert!(matches!(
            d.discriminate(&x),
            Err(GanError::ShapeMismatch {
                op: "discriminate",
                expected: 1,
                actual: 3
            })
        ));
    }

    proptest! {
        #[test]
        fn probabilities_strictly_between_zero_and_one(
            xs in prop::collection::vec(-1e3f64..1e3, 1..64),
            w in -50.0f64..50.0,
            b in -50.0f64..50.0,
        ) {
            let d = Discriminator::from_parameters(w, b).unwrap();
            let x = MatrixValue::constant(&Matrix::column(xs).unwrap());
            for p in d.discriminate(&x).unwrap().data() {
                prop_assert!(p > 0.0 && p < 1.0);
            }
        }
    }
}
