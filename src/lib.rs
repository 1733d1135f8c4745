//! Dense vectors and matrices over `f32`, with zero-copy views that alias a
//! matrix row, a matrix column, a whole matrix flattened to a vector, or a
//! vector reshaped to a matrix.
//!
//! ```
//! use neuromat::{DenseMatrix, DenseVector, Matrix, MatrixMut, Vector, VectorMut};
//!
//! # fn main() -> neuromat::Result<()> {
//! let mut weights = DenseMatrix::zeros(2, 2);
//! weights.row_mut(0)?.set(0, 5.0)?;
//! assert_eq!(weights.get(0, 0)?, 5.0);
//!
//! let pattern = DenseVector::from_slice(&[1.0, -1.0]);
//! let recalled = weights.mul_vector(&pattern)?;
//! assert_eq!(recalled.to_display_string(), "[5, 0]");
//! # Ok(())
//! # }
//! ```

mod buffer;
mod dense;
mod display;
mod error;
mod math;
#[cfg(feature = "random")]
mod random;
mod view;

#[cfg(test)]
mod contract;

pub use crate::dense::{DenseMatrix, DenseVector};
pub use crate::error::{Error, Position, Result, Shape};
pub use crate::math::*;
pub use crate::view::{ColVector, MatrixVector, RowVector, VectorMatrix};
