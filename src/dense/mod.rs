//! Owning storage: contiguous buffers behind the vector and matrix contracts.

mod matrix;
mod vector;

pub use matrix::DenseMatrix;
pub use vector::DenseVector;
