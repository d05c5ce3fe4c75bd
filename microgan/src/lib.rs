//! # microgan
//!
//! A minimal generative adversarial network that learns a 1-D standard normal from
//! uniform noise. Everything runs on a small scalar autograd: one affine layer plus
//! leaky ReLU for the generator, one affine layer plus sigmoid for the discriminator,
//! SGD for the former, Adam for the latter.
//!
//! Module map, bottom-up: [`matrix`] → [`autograd`] → [`sampling`] → [`model`] →
//! [`optim`] → [`train`] → [`eval`]. [`config`] and [`error`] are shared by all of them.

pub mod autograd;
pub mod config;
pub mod error;
pub mod eval;
pub mod matrix;
pub mod model;
pub mod optim;
pub mod sampling;
pub mod train;

pub use config::{Config, ConfigError};
pub use error::{GanError, Result};
pub use eval::{evaluate, Histogram, Summary};
pub use model::{Discriminator, Generator, Module};
pub use sampling::{SampleSource, SeededSampler};
pub use train::{GeneratorTarget, LossTrace, Trainer};
