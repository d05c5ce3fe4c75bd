//! Optimizers: plain SGD and Adam.
//!
//! An optimizer is built from one network's [`Module::parameters`](crate::model::Module::parameters)
//! and only ever writes to those leaves, so stepping the discriminator's optimizer cannot
//! move the generator and vice versa.

mod adam;
mod sgd;

pub use adam::{Adam, AdamConfig};
pub use sgd::Sgd;

use crate::autograd::{ScalarNode, ValueRef};

/// Trait for optimization algorithms that own a fixed set of parameter handles.
pub trait Optimizer {
    /// Applies one update using the gradients currently stored on the parameters.
    fn step(&mut self);

    /// The parameters this optimizer updates.
    fn params(&self) -> &[ValueRef];

    /// Zeros the gradients of this optimizer's parameters.
    fn zero_grad(&self) {
        for p in self.params() {
            p.zero_grad();
        }
    }

    /// Current learning rate.
    fn lr(&self) -> f64;
}
