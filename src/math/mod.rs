//! Numeric element type and the vector/matrix contracts.
//!
//! Every concrete container and view in this crate is expressed through two
//! minimal primitive sets: `size`/`get`/`set` for vectors and
//! `rows`/`cols`/`get`/`set` for matrices. Arithmetic, equality, hashing and
//! iteration are layered on top as default methods and are never duplicated
//! per container.
//!
//! Read and write halves are separate traits. Both are implemented for `&T`
//! and `&mut T`, so a view built from `row(i)` can only read while a view
//! built from `row_mut(i)` holds the owner exclusively.

mod matrix;
mod vector;

pub use matrix::{ColIter, Matrix, MatrixMut, RowIter};
pub use vector::{Vector, VectorIter, VectorMut};

/// The number type used for every vector and matrix element.
pub type Num = f32;
