//! Configuration for the networks, optimizers, training loop, and evaluation.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_DISCRIMINATOR_LR, DEFAULT_EPSILON,
    DEFAULT_EVAL_SAMPLES, DEFAULT_GENERATOR_LR, DEFAULT_HISTOGRAM_BINS, DEFAULT_LEAKY_SLOPE,
    DEFAULT_LOSS_LOG_EVERY, DEFAULT_NOISE_DIM, DEFAULT_NUM_EPOCHS, DEFAULT_SEED,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

use crate::optim::AdamConfig;
use crate::train::GeneratorTarget;

/// Central configuration for a training run.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed for the shared RNG (parameter init and every batch).
    pub seed: u64,

    /// Noise dimensionality `N`.
    pub noise_dim: usize,
    /// Minibatch size `B` (real and fake sub-batches each).
    pub batch_size: usize,
    /// Number of training iterations.
    pub num_epochs: usize,

    /// Generator SGD learning rate.
    pub generator_lr: f64,
    /// Discriminator Adam learning rate.
    pub discriminator_lr: f64,
    /// Adam beta1.
    pub beta1: f64,
    /// Adam beta2.
    pub beta2: f64,
    /// Adam epsilon.
    pub epsilon: f64,

    /// Negative-side slope of the generator's leaky ReLU.
    pub leaky_slope: f64,
    /// Label the generator's loss pushes the discriminator toward on fake samples.
    pub generator_target: GeneratorTarget,

    /// Log losses every this many iterations (and the first).
    pub loss_log_every: usize,
    /// Number of samples drawn for evaluation.
    pub eval_samples: usize,
    /// Number of histogram bins for the evaluation summary.
    pub histogram_bins: usize,
}

impl Default for Config {
    /// Returns default configuration (suitable for tests and fallbacks).
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            noise_dim: DEFAULT_NOISE_DIM,
            batch_size: DEFAULT_BATCH_SIZE,
            num_epochs: DEFAULT_NUM_EPOCHS,
            generator_lr: DEFAULT_GENERATOR_LR,
            discriminator_lr: DEFAULT_DISCRIMINATOR_LR,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            epsilon: DEFAULT_EPSILON,
            leaky_slope: DEFAULT_LEAKY_SLOPE,
            generator_target: GeneratorTarget::default(),
            loss_log_every: DEFAULT_LOSS_LOG_EVERY,
            eval_samples: DEFAULT_EVAL_SAMPLES,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("noise_dim", self.noise_dim),
            ("batch_size", self.batch_size),
            ("loss_log_every", self.loss_log_every),
            ("eval_samples", self.eval_samples),
            ("histogram_bins", self.histogram_bins),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be greater than 0"
                )));
            }
        }
        for (name, lr) in [
            ("generator_lr", self.generator_lr),
            ("discriminator_lr", self.discriminator_lr),
        ] {
            if !(lr.is_finite() && lr > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be finite and positive, got {lr}"
                )));
            }
        }
        for (name, beta) in [("beta1", self.beta1), ("beta2", self.beta2)] {
            if !(0.0..1.0).contains(&beta) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be in [0, 1), got {beta}"
                )));
            }
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Validation(
                "epsilon must be finite and positive".to_string(),
            ));
        }
        if !(self.leaky_slope.is_finite() && self.leaky_slope >= 0.0) {
            return Err(ConfigError::Validation(
                "leaky_slope must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Adam settings for the discriminator.
    #[must_use]
    pub fn discriminator_adam(&self) -> AdamConfig {
        AdamConfig {
            lr: self.discriminator_lr,
            beta1: self.beta1,
            beta2: self.beta2,
            epsilon: self.epsilon,
        }
    }
}
