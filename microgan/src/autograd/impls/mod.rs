//! Node and container implementations for the autograd graph.

pub mod matrix;
pub mod scalar;
pub mod vector;
