//! Plain numeric batches: row-major `f64` matrices with no gradient tracking.
//!
//! Sample generators produce [`Matrix`] values; networks lift them into the
//! autograd graph with [`MatrixValue::constant`](crate::autograd::MatrixValue::constant).

use crate::error::{ensure_extent, ensure_positive, Result};

/// A row-major matrix of `rows x cols` values. Both extents are always positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// - [`GanError::InvalidArgument`](crate::GanError::InvalidArgument) when `rows` or `cols` is zero.
    /// - [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        ensure_positive("rows", rows)?;
        ensure_positive("cols", cols)?;
        ensure_extent("Matrix::new", rows * cols, data.len())?;
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        ensure_positive("rows", rows)?;
        ensure_positive("cols", cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// A matrix filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| value)
    }

    /// A single-column matrix from a vector of values.
    pub fn column(values: Vec<f64>) -> Result<Self> {
        let rows = values.len();
        Self::new(rows, 1, values)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
