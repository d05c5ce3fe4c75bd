//! Crate-level error type.
//!
//! Every fallible operation in the crate returns [`GanError`]. Shape and argument
//! checks fail fast at the call site; numerical trouble (NaN or infinite losses)
//! is never reported here and simply flows through the computed values.

use thiserror::Error;

use crate::config::ConfigError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GanError>;

/// Errors produced by sampling, model construction, forward passes, and configuration.
///
/// # Variants
///
/// - **InvalidArgument**: A size that must be positive was zero.
///   *When*: Sample generators, [`Matrix`](crate::matrix::Matrix) constructors, network constructors.
///   *Recovery*: Pass a positive batch size, sample count, or dimensionality.
///
/// - **ShapeMismatch**: A batch does not have the shape an operation expects.
///   *When*: Forward passes (column count differs from the network's input width) or
///   building a matrix from a buffer of the wrong length.
///   *Recovery*: Build the batch with the dimensionality the network was created with.
///
/// - **Config**: Loading or validating [`Config`](crate::config::Config) failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GanError {
    /// A size argument was zero.
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: usize,
    },

    /// An input's shape disagrees with what the operation expects.
    #[error("shape mismatch in {op}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Operation that rejected the input.
        op: &'static str,
        /// Expected extent (columns, rows, or element count depending on `op`).
        expected: usize,
        /// Actual extent.
        actual: usize,
    },

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Returns `InvalidArgument` when `value` is zero.
pub(crate) fn ensure_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(GanError::InvalidArgument { name, value });
    }
    Ok(())
}

/// Returns `ShapeMismatch` when `actual != expected`.
pub(crate) fn ensure_extent(op: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(GanError::ShapeMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}
