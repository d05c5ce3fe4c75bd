//! Post-training evaluation: sample the generator and summarize what it produces.
//!
//! [`evaluate`] draws generator outputs without recording a graph. [`Summary`] and
//! [`Histogram`] turn those outputs into numbers a caller can log or plot.

mod histogram;
mod summary;

pub use histogram::Histogram;
pub use summary::Summary;

use tracing::info;

use crate::autograd::no_grad;
use crate::error::Result;
use crate::model::Generator;
use crate::sampling::SampleSource;

/// Draws `sample_count` noise rows of width `n_dim` from `source` and returns the
/// generator's outputs, flattened.
///
/// Runs inside [`no_grad`], so the generator's parameters and gradients are untouched.
///
/// # Errors
///
/// - [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `sample_count` or
///   `n_dim` is zero.
/// - [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `n_dim` differs from the
///   generator's noise width.
pub fn evaluate<S>(
    generator: &Generator,
    source: &mut S,
    sample_count: usize,
    n_dim: usize,
) -> Result<Vec<f64>>
where
    S: SampleSource + ?Sized,
{
    let noise = source.uniform_batch(sample_count, n_dim)?;
    let samples = no_grad(|| generator.generate(&noise))?.data();
    info!(sample_count, "evaluated generator");
    Ok(samples)
}
