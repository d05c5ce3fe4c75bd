//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `MICROGAN_NOISE_DIM`).
pub(crate) const ENV_PREFIX: &str = "MICROGAN_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_NOISE_DIM: &str = "NOISE_DIM";
pub(crate) const ENV_BATCH_SIZE: &str = "BATCH_SIZE";
pub(crate) const ENV_NUM_EPOCHS: &str = "NUM_EPOCHS";
pub(crate) const ENV_GENERATOR_LR: &str = "GENERATOR_LR";
pub(crate) const ENV_DISCRIMINATOR_LR: &str = "DISCRIMINATOR_LR";
pub(crate) const ENV_BETA1: &str = "BETA1";
pub(crate) const ENV_BETA2: &str = "BETA2";
pub(crate) const ENV_EPSILON: &str = "EPSILON";
pub(crate) const ENV_LEAKY_SLOPE: &str = "LEAKY_SLOPE";
pub(crate) const ENV_GENERATOR_TARGET: &str = "GENERATOR_TARGET";
pub(crate) const ENV_LOSS_LOG_EVERY: &str = "LOSS_LOG_EVERY";
pub(crate) const ENV_EVAL_SAMPLES: &str = "EVAL_SAMPLES";
pub(crate) const ENV_HISTOGRAM_BINS: &str = "HISTOGRAM_BINS";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_NOISE_DIM: usize = 10;
pub(crate) const DEFAULT_BATCH_SIZE: usize = 128;
pub(crate) const DEFAULT_NUM_EPOCHS: usize = 100;
pub(crate) const DEFAULT_GENERATOR_LR: f64 = 0.01;
pub(crate) const DEFAULT_DISCRIMINATOR_LR: f64 = 0.01;
pub(crate) const DEFAULT_BETA1: f64 = 0.9;
pub(crate) const DEFAULT_BETA2: f64 = 0.999;
pub(crate) const DEFAULT_EPSILON: f64 = 1e-8;
pub(crate) const DEFAULT_LEAKY_SLOPE: f64 = 0.01;
pub(crate) const DEFAULT_LOSS_LOG_EVERY: usize = 10;
pub(crate) const DEFAULT_EVAL_SAMPLES: usize = 10_000;
pub(crate) const DEFAULT_HISTOGRAM_BINS: usize = 20;
