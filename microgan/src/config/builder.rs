//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see the `constants` submodule) and typed errors ([`ConfigError`]).

use super::constants::{
    ENV_BATCH_SIZE, ENV_BETA1, ENV_BETA2, ENV_DISCRIMINATOR_LR, ENV_EPSILON, ENV_EVAL_SAMPLES,
    ENV_GENERATOR_LR, ENV_GENERATOR_TARGET, ENV_HISTOGRAM_BINS, ENV_LEAKY_SLOPE,
    ENV_LOSS_LOG_EVERY, ENV_NOISE_DIM, ENV_NUM_EPOCHS, ENV_PREFIX, ENV_SEED,
};
use super::Config;
use super::ConfigError;
use crate::train::GeneratorTarget;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `MICROGAN_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `MICROGAN_SEED=abc`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse. Validation is separate:
/// call [`Config::validate`] on the result.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    Ok(Config {
        seed: env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed),
        noise_dim: env_parsed::<usize>(&env_key(ENV_NOISE_DIM))?.unwrap_or(default.noise_dim),
        batch_size: env_parsed::<usize>(&env_key(ENV_BATCH_SIZE))?.unwrap_or(default.batch_size),
        num_epochs: env_parsed::<usize>(&env_key(ENV_NUM_EPOCHS))?.unwrap_or(default.num_epochs),
        generator_lr: env_parsed::<f64>(&env_key(ENV_GENERATOR_LR))?
            .unwrap_or(default.generator_lr),
        discriminator_lr: env_parsed::<f64>(&env_key(ENV_DISCRIMINATOR_LR))?
            .unwrap_or(default.discriminator_lr),
        beta1: env_parsed::<f64>(&env_key(ENV_BETA1))?.unwrap_or(default.beta1),
        beta2: env_parsed::<f64>(&env_key(ENV_BETA2))?.unwrap_or(default.beta2),
        epsilon: env_parsed::<f64>(&env_key(ENV_EPSILON))?.unwrap_or(default.epsilon),
        leaky_slope: env_parsed::<f64>(&env_key(ENV_LEAKY_SLOPE))?.unwrap_or(default.leaky_slope),
        generator_target: env_parsed::<GeneratorTarget>(&env_key(ENV_GENERATOR_TARGET))?
            .unwrap_or(default.generator_target),
        loss_log_every: env_parsed::<usize>(&env_key(ENV_LOSS_LOG_EVERY))?
            .unwrap_or(default.loss_log_every),
        eval_samples: env_parsed::<usize>(&env_key(ENV_EVAL_SAMPLES))?
            .unwrap_or(default.eval_samples),
        histogram_bins: env_parsed::<usize>(&env_key(ENV_HISTOGRAM_BINS))?
            .unwrap_or(default.histogram_bins),
    })
}
