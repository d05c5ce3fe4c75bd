//! Matrix autograd: a row-major grid of scalar nodes with the affine-layer operations.

use super::scalar::ValueRef;
use super::vector::VectorValue;
use crate::autograd::ScalarNode;
use crate::error::{ensure_extent, ensure_positive, Result};
use crate::matrix::Matrix;

/// A `rows x cols` matrix of scalar autograd nodes, row-major.
///
/// Parameters are matrices of leaves; activations are matrices of interior nodes
/// whose children reach back to the parameters (unless detached).
#[derive(Clone, Debug)]
pub struct MatrixValue {
    rows: usize,
    cols: usize,
    refs: Vec<ValueRef>,
}

impl MatrixValue {
    /// Lifts a plain [`Matrix`] into fresh leaf nodes.
    #[must_use]
    pub fn constant(m: &Matrix) -> Self {
        MatrixValue {
            rows: m.rows(),
            cols: m.cols(),
            refs: m.as_slice().iter().copied().map(ValueRef::new).collect(),
        }
    }

    /// Builds a matrix of leaves by evaluating `f(row, col)`; used for parameter init.
    pub fn leaves<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        ensure_positive("rows", rows)?;
        ensure_positive("cols", cols)?;
        let mut refs = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                refs.push(ValueRef::new(f(r, c)));
            }
        }
        Ok(MatrixValue { rows, cols, refs })
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

    /// The underlying nodes, row-major.
    #[must_use]
    pub fn nodes(&self) -> &[ValueRef] {
        &self.refs
    }

    /// Forward values, row-major.
    #[must_use]
    pub fn data(&self) -> Vec<f64> {
        self.refs.iter().map(ValueRef::data).collect()
    }

    /// Gradients, row-major.
    #[must_use]
    pub fn grad(&self) -> Vec<f64> {
        self.refs.iter().map(ValueRef::grad).collect()
    }

    /// Copies the values into fresh leaves.
    ///
    /// A loss computed from the copy back-propagates into the copy and stops there;
    /// `self` keeps its graph and can still be used where gradients must flow.
    #[must_use]
    pub fn detach(&self) -> MatrixValue {
        MatrixValue {
            rows: self.rows,
            cols: self.cols,
            refs: self.refs.iter().map(ValueRef::detach).collect(),
        }
    }

    /// Matrix product `self @ rhs`: `[r, k] x [k, c] -> [r, c]`.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when the inner extents differ.
    pub fn matmul(&self, rhs: &MatrixValue) -> Result<MatrixValue> {
        ensure_extent("matmul", rhs.rows, self.cols)?;
        let mut refs = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            let row = &self.refs[i * self.cols..(i + 1) * self.cols];
            for j in 0..rhs.cols {
                let products: Vec<ValueRef> = row
                    .iter()
                    .enumerate()
                    .map(|(k, a)| a * &rhs.refs[k * rhs.cols + j])
                    .collect();
                refs.push(ValueRef::sum(&products));
            }
        }
        Ok(MatrixValue {
            rows: self.rows,
            cols: rhs.cols,
            refs,
        })
    }

    /// Adds a `[1, cols]` row to every row of `self`.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `bias` is not `[1, cols]`.
    pub fn add_row(&self, bias: &MatrixValue) -> Result<MatrixValue> {
        ensure_extent("add_row rows", 1, bias.rows)?;
        ensure_extent("add_row cols", self.cols, bias.cols)?;
        let refs = self
            .refs
            .iter()
            .enumerate()
            .map(|(idx, x)| x + &bias.refs[idx % self.cols])
            .collect();
        Ok(MatrixValue {
            rows: self.rows,
            cols: self.cols,
            refs,
        })
    }

    /// Applies `f` to every node, keeping the shape.
    #[must_use]
    pub fn map<F>(&self, f: F) -> MatrixValue
    where
        F: Fn(&ValueRef) -> ValueRef,
    {
        MatrixValue {
            rows: self.rows,
            cols: self.cols,
            refs: self.refs.iter().map(f).collect(),
        }
    }

    /// Stacks `self` on top of `other`, sharing the nodes of both.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when the column counts differ.
    pub fn vstack(&self, other: &MatrixValue) -> Result<MatrixValue> {
        ensure_extent("MatrixValue::vstack", self.cols, other.cols)?;
        let mut refs = Vec::with_capacity(self.refs.len() + other.refs.len());
        refs.extend(self.refs.iter().cloned());
        refs.extend(other.refs.iter().cloned());
        Ok(MatrixValue {
            rows: self.rows + other.rows,
            cols: self.cols,
            refs,
        })
    }

    /// Flattens a single-column matrix into a [`VectorValue`] of its rows.
    ///
    /// # Errors
    ///
    /// [`GanError::ShapeMismatch`](crate::GanError::ShapeMismatch) when `cols != 1`.
    pub fn into_column(self) -> Result<VectorValue> {
        ensure_extent("into_column", 1, self.cols)?;
        Ok(VectorValue::from_nodes(self.refs))
    }

    /// Zeros the gradient at each node.
    pub fn zero_grad(&self) {
        for r in &self.refs {
            r.zero_grad();
        }
    }
}
