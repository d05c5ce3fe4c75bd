//! The training loop: alternating discriminator and generator updates.
//!
//! [`Trainer`] owns both networks, one optimizer per network, and the sample source.
//! Each call to [`Trainer::train`] runs a fixed number of iterations and returns a
//! [`LossTrace`] with one discriminator and one generator loss per iteration.

mod target;
mod trace;
mod trainer;

pub use target::{GeneratorTarget, ParseGeneratorTargetError};
pub use trace::LossTrace;
pub use trainer::Trainer;
