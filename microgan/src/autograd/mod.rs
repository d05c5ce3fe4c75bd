//! Autograd: scalar computation graphs with reverse-mode differentiation.
//!
//! Every value is a [`ValueRef`] node; [`MatrixValue`] and [`VectorValue`] group
//! nodes into the shapes the networks work with. The graph is built during
//! forward operations and [`ScalarNode::backward`] propagates gradients from a
//! loss node to all leaves in reverse topological order.
//!
//! Two ways to cut the graph:
//!
//! - [`MatrixValue::detach`] copies values into fresh leaves, so a downstream loss
//!   cannot reach the nodes that produced them. The original handle stays attached.
//! - [`no_grad`] runs a closure in which new nodes record no edges at all.

pub mod impls;

use std::cell::Cell;

pub use impls::matrix::MatrixValue;
pub use impls::scalar::ValueRef;
pub use impls::vector::VectorValue;

thread_local! {
    static GRAD_ENABLED: Cell<bool> = const { Cell::new(true) };
}

/// Returns `true` unless called inside [`no_grad`].
#[must_use]
pub fn is_grad_enabled() -> bool {
    GRAD_ENABLED.with(Cell::get)
}

/// Restores the previous grad mode on drop (also on unwind).
struct GradModeGuard(bool);

impl Drop for GradModeGuard {
    fn drop(&mut self) {
        GRAD_ENABLED.with(|g| g.set(self.0));
    }
}

/// Runs `f` with graph recording disabled on this thread.
///
/// Values computed inside are correct, but nodes created there are leaves:
/// calling `backward` on them does not reach any parameter.
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = GradModeGuard(GRAD_ENABLED.with(|g| g.replace(false)));
    f()
}

/// Trait for the natural log of a node (e.g. `(&a).log()`).
pub trait Log {
    /// Result of the log.
    type Output;

    /// Returns `ln(self)` with gradient tracking.
    #[must_use]
    fn log(self) -> Self::Output;
}

/// A differentiable scalar node in the computation graph.
///
/// Implementations hold a single float value and a gradient, and participate
/// in backward propagation. Use [`ScalarNode::data`] for the forward value and
/// [`ScalarNode::grad`] after [`ScalarNode::backward`].
pub trait ScalarNode: Clone {
    /// Returns the forward pass value.
    fn data(&self) -> f64;

    /// Returns the gradient of the loss with respect to this node (set by backward).
    fn grad(&self) -> f64;

    /// Runs backpropagation from this node (e.g. the loss) to all leaves.
    fn backward(&self);

    /// Zeros the gradient at this node (e.g. before the next backward).
    fn zero_grad(&self);
}
