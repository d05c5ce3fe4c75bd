//! Vector autograd: an ordered list of scalar nodes (one per batch row).

use super::scalar::ValueRef;
use crate::autograd::ScalarNode;

/// A vector of scalar autograd nodes.
///
/// Returned by [`Discriminator::discriminate`](crate::model::Discriminator::discriminate):
/// one probability per input row. Reduce it to a scalar loss and call backward on that.
#[derive(Clone, Debug)]
pub struct VectorValue {
    /// One scalar node per element.
    refs: Vec<ValueRef>,
}

impl VectorValue {
    /// Wraps existing nodes without copying them; the graph stays attached.
    #[must_use]
    pub fn from_nodes(refs: Vec<ValueRef>) -> Self {
        VectorValue { refs }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// `true` when there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// The underlying nodes.
    #[must_use]
    pub fn nodes(&self) -> &[ValueRef] {
        &self.refs
    }

    /// Returns the forward pass values.
    #[must_use]
    pub fn data(&self) -> Vec<f64> {
        self.refs.iter().map(ValueRef::data).collect()
    }

    /// Returns the gradients (after backward).
    #[must_use]
    pub fn grad(&self) -> Vec<f64> {
        self.refs.iter().map(ValueRef::grad).collect()
    }

    /// Mean of all elements as a single node.
    #[must_use]
    pub fn mean(&self) -> ValueRef {
        &ValueRef::sum(&self.refs) * (1.0 / self.refs.len() as f64)
    }

    /// Zeros the gradient at each element.
    pub fn zero_grad(&self) {
        for r in &self.refs {
            r.zero_grad();
        }
    }
}
