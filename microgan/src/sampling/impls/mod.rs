//! Implementations of [`SampleSource`](super::SampleSource).
//!
//! One file per implementation: e.g. [`seeded`] for a reproducible `StdRng` stream.

mod seeded;

pub use seeded::SeededSampler;
