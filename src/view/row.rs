use std::hash::{Hash, Hasher};

use super::check_index;
use crate::error::{Error, Result};
use crate::math::{Matrix, MatrixMut, Num, Vector, VectorMut};

/// One row of a matrix seen as a vector of `cols()` elements.
///
/// `get(i)` reads `matrix.get(row, i)`; writes through a view over a
/// mutable owner land in the matrix.
#[derive(Debug)]
pub struct RowVector<M> {
    matrix: M,
    row: usize,
}

impl<M: Matrix> RowVector<M> {
    /// View of row `row`; fails with [`Error::IndexOutOfBounds`] if the
    /// matrix has no such row.
    pub fn new(matrix: M, row: usize) -> Result<Self> {
        if row >= matrix.rows() {
            return Err(Error::row_index(row, matrix.rows(), matrix.cols()));
        }
        Ok(Self { matrix, row })
    }

    /// Index of the viewed row.
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Gives back the owner.
    pub fn into_inner(self) -> M {
        self.matrix
    }
}

impl<M: Matrix> Vector for RowVector<M> {
    #[inline]
    fn size(&self) -> usize {
        self.matrix.cols()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        check_index(index, self.size())?;
        self.matrix.get(self.row, index)
    }
}

impl<M: MatrixMut> VectorMut for RowVector<M> {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        check_index(index, self.size())?;
        self.matrix.set(self.row, index, value)
    }
}

impl<M: Matrix, V: Vector + ?Sized> PartialEq<V> for RowVector<M> {
    fn eq(&self, other: &V) -> bool {
        self.equals(other)
    }
}

impl<M: Matrix> Hash for RowVector<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}
