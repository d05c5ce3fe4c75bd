//! Scalar autograd: computation graph of single float values with backpropagation.

use crate::autograd::{is_grad_enabled, Log, ScalarNode};
use std::cell::RefCell;
use std::collections::HashSet;
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

/// Smallest distance a sigmoid output keeps from 0 and 1.
///
/// In `f64`, `1 / (1 + e^-x)` rounds to exactly `1.0` for `x > ~37`; clamping keeps
/// probabilities in the open interval and `ln(1 - p)` finite.
pub(crate) const PROB_EPS: f64 = f64::EPSILON;

/// Internal scalar node: forward value, gradient, and graph edges for backprop.
struct Value {
    /// Forward pass value.
    data: f64,
    /// Gradient of the loss with respect to this node; set during backward.
    grad: f64,
    /// Child nodes in the computation graph.
    children: Vec<ValueRef>,
    /// Local partial derivatives (one per child) for the chain rule.
    local_grads: Vec<f64>,
}

/// Handle to a scalar node in the autograd computation graph.
///
/// Wraps the node state in `Rc<RefCell<_>>` so that the graph can be shared and
/// gradients can be accumulated during backward. Cloning a handle shares the node.
#[derive(Clone)]
pub struct ValueRef(Rc<RefCell<Value>>);

impl std::fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0.borrow();
        f.debug_struct("ValueRef")
            .field("data", &v.data)
            .field("grad", &v.grad)
            .field("children", &v.children.len())
            .finish()
    }
}

impl ValueRef {
    /// Creates a leaf node (no children) with the given value and zero gradient.
    #[must_use]
    pub fn new(data: f64) -> Self {
        ValueRef(Rc::new(RefCell::new(Value {
            data,
            grad: 0.0,
            children: Vec::new(),
            local_grads: Vec::new(),
        })))
    }

    /// Sets this node's gradient (e.g. to 1.0 at the loss).
    fn set_grad(&self, g: f64) {
        self.0.borrow_mut().grad = g;
    }

    /// Adds to this node's gradient (for accumulation when a value is used multiple times).
    fn add_grad(&self, g: f64) {
        self.0.borrow_mut().grad += g;
    }

    /// Overwrites the forward value in place. Used by optimizers on parameter leaves.
    pub(crate) fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Creates a node that remembers its children and local grads for backprop.
    ///
    /// Inside [`no_grad`](crate::autograd::no_grad) the edges are dropped and a leaf is returned.
    fn new_with_graph(data: f64, children: Vec<ValueRef>, local_grads: Vec<f64>) -> Self {
        if !is_grad_enabled() {
            return ValueRef::new(data);
        }
        ValueRef(Rc::new(RefCell::new(Value {
            data,
            grad: 0.0,
            children,
            local_grads,
        })))
    }

    /// A new leaf holding the same value. Gradients computed downstream stop here.
    #[must_use]
    pub fn detach(&self) -> ValueRef {
        ValueRef::new(self.data())
    }

    /// Sum of many nodes as a single node (local grad 1 for every term).
    #[must_use]
    pub fn sum(terms: &[ValueRef]) -> ValueRef {
        let data = terms.iter().map(ValueRef::data).sum();
        ValueRef::new_with_graph(data, terms.to_vec(), vec![1.0; terms.len()])
    }

    /// Leaky ReLU: `self` if positive, else `slope * self`.
    #[must_use]
    pub fn leaky_relu(&self, slope: f64) -> ValueRef {
        let x = self.data();
        let (data, local_grad) = if x > 0.0 { (x, 1.0) } else { (slope * x, slope) };
        ValueRef::new_with_graph(data, vec![self.clone()], vec![local_grad])
    }

    /// Logistic sigmoid, clamped to `[PROB_EPS, 1 - PROB_EPS]`. Local grad is `s * (1 - s)`.
    #[must_use]
    pub fn sigmoid(&self) -> ValueRef {
        let x = self.data();
        let s = if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        };
        let s = s.clamp(PROB_EPS, 1.0 - PROB_EPS);
        ValueRef::new_with_graph(s, vec![self.clone()], vec![s * (1.0 - s)])
    }
}

// -----------------------------------------------------------------------------
// std::ops: algebra x + y, x - y, x * y, -x
// -----------------------------------------------------------------------------

impl Add for &ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: Self) -> ValueRef {
        ValueRef::new_with_graph(
            self.data() + rhs.data(),
            vec![self.clone(), rhs.clone()],
            vec![1.0, 1.0],
        )
    }
}

impl Sub for &ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: Self) -> ValueRef {
        self + &(-rhs)
    }
}

impl Mul for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: Self) -> ValueRef {
        ValueRef::new_with_graph(
            self.data() * rhs.data(),
            vec![self.clone(), rhs.clone()],
            vec![rhs.data(), self.data()],
        )
    }
}

impl Mul<f64> for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: f64) -> ValueRef {
        ValueRef::new_with_graph(self.data() * rhs, vec![self.clone()], vec![rhs])
    }
}

impl Neg for &ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        self * -1.0
    }
}

// -----------------------------------------------------------------------------
// Log: (&a).log()
// -----------------------------------------------------------------------------

impl Log for &ValueRef {
    type Output = ValueRef;

    fn log(self) -> ValueRef {
        let data = self.data().ln();
        let local_grad = 1.0 / self.data();
        ValueRef::new_with_graph(data, vec![self.clone()], vec![local_grad])
    }
}

impl ScalarNode for ValueRef {
    fn data(&self) -> f64 {
        self.0.borrow().data
    }

    fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    fn backward(&self) {
        let mut topo = Vec::new();
        let mut visited = HashSet::new();
        fn build_topo(
            v: &ValueRef,
            visited: &mut HashSet<*const RefCell<Value>>,
            topo: &mut Vec<ValueRef>,
        ) {
            let ptr = Rc::as_ptr(&v.0);
            if !visited.insert(ptr) {
                return;
            }
            for child in &v.0.borrow().children {
                build_topo(child, visited, topo);
            }
            topo.push(v.clone());
        }
        build_topo(self, &mut visited, &mut topo);
        // Interior grads restart from zero on every pass; leaves accumulate.
        for v in &topo {
            if !v.0.borrow().children.is_empty() {
                v.set_grad(0.0);
            }
        }
        self.set_grad(1.0);
        for v in topo.iter().rev() {
            let v_grad = v.grad();
            let v_borrowed = v.0.borrow();
            for (child, &local_grad) in v_borrowed
                .children
                .iter()
                .zip(v_borrowed.local_grads.iter())
            {
                child.add_grad(local_grad * v_grad);
            }
        }
    }

    fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
