//! Adam with bias-corrected moment estimates.

use super::Optimizer;
use crate::autograd::{ScalarNode, ValueRef};

/// Adam hyperparameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdamConfig {
    /// Learning rate.
    pub lr: f64,
    /// First-moment decay.
    pub beta1: f64,
    /// Second-moment decay.
    pub beta2: f64,
    /// Denominator epsilon.
    pub epsilon: f64,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

/// Adam optimizer holding first and second moments per parameter.
#[derive(Clone, Debug)]
pub struct Adam {
    params: Vec<ValueRef>,
    config: AdamConfig,
    m: Vec<f64>,
    v: Vec<f64>,
    step_count: u64,
}

impl Adam {
    /// Creates an Adam optimizer over `params` with zeroed moments.
    #[must_use]
    pub fn new(params: Vec<ValueRef>, config: AdamConfig) -> Self {
        let n = params.len();
        Adam {
            params,
            config,
            m: vec![0.0; n],
            v: vec![0.0; n],
            step_count: 0,
        }
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Optimizer for Adam {
    fn step(&mut self) {
        self.step_count += 1;
        let AdamConfig {
            lr,
            beta1,
            beta2,
            epsilon,
        } = self.config;
        let t = self.step_count as i32;
        let bias1 = 1.0 - beta1.powi(t);
        let bias2 = 1.0 - beta2.powi(t);
        for (i, p) in self.params.iter().enumerate() {
            let grad = p.grad();
            self.m[i] = beta1 * self.m[i] + (1.0 - beta1) * grad;
            self.v[i] = beta2 * self.v[i] + (1.0 - beta2) * grad * grad;
            let m_hat = self.m[i] / bias1;
            let v_hat = self.v[i] / bias2;
            p.set_data(p.data() - lr * m_hat / (v_hat.sqrt() + epsilon));
        }
    }

    fn params(&self) -> &[ValueRef] {
        &self.params
    }

    fn lr(&self) -> f64 {
        self.config.lr
    }
}
