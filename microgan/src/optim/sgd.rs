//! Stochastic gradient descent.

use super::Optimizer;
use crate::autograd::{ScalarNode, ValueRef};

/// Plain SGD: `p -= lr * grad`.
#[derive(Clone, Debug)]
pub struct Sgd {
    params: Vec<ValueRef>,
    lr: f64,
}

impl Sgd {
    /// Creates an SGD optimizer over `params`.
    #[must_use]
    pub fn new(params: Vec<ValueRef>, lr: f64) -> Self {
        Sgd { params, lr }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        for p in &self.params {
            p.set_data(p.data() - self.lr * p.grad());
        }
    }

    fn params(&self) -> &[ValueRef] {
        &self.params
    }

    fn lr(&self) -> f64 {
        self.lr
    }
}
