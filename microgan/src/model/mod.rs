//! The two networks and their loss.
//!
//! - [`Generator`]: affine `[N] -> [1]` followed by leaky ReLU.
//! - [`Discriminator`]: affine `[1] -> [1]` followed by the logistic sigmoid.
//! - [`binary_cross_entropy`]: mean BCE between probabilities and labels.
//!
//! Both networks are built on [`Affine`] and expose their parameters through [`Module`],
//! which is what optimizers are constructed from.

mod discriminator;
mod generator;
mod linear;
mod loss;

pub use discriminator::Discriminator;
pub use generator::Generator;
pub use linear::Affine;
pub use loss::{binary_cross_entropy, stacked_labels, FAKE_LABEL, REAL_LABEL};

use crate::autograd::{ScalarNode, ValueRef};

/// Anything that owns trainable parameters.
pub trait Module {
    /// Handles to every trainable leaf, in a stable order (weights, then biases).
    ///
    /// The handles share nodes with the module: an optimizer built from them
    /// updates the module in place.
    fn parameters(&self) -> Vec<ValueRef>;

    /// Current parameter values, in the order of [`Module::parameters`].
    fn parameter_values(&self) -> Vec<f64> {
        self.parameters().iter().map(ValueRef::data).collect()
    }

    /// Number of scalar parameters.
    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    /// Zeros the gradient of every parameter.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
