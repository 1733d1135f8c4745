//! Non-owning adapters that expose one object's storage through the other contract.
//!
//! A view stores its owner (usually `&M` or `&mut M`, but an owned value works
//! too) plus fixed addressing parameters. It never copies elements; reads and
//! writes go straight to the owner. Whether a view is writable is decided by
//! the owner type: a view over `&M` implements only the read contract.

mod col;
mod flatten;
mod reshape;
mod row;

pub use col::ColVector;
pub use flatten::MatrixVector;
pub use reshape::VectorMatrix;
pub use row::RowVector;

use crate::error::{Error, Result};

#[inline]
fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(Error::vector_index(index, size))
    }
}
