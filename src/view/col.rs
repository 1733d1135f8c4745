use std::hash::{Hash, Hasher};

use super::check_index;
use crate::error::{Error, Result};
use crate::math::{Matrix, MatrixMut, Num, Vector, VectorMut};

/// One column of a matrix seen as a vector of `rows()` elements.
#[derive(Debug)]
pub struct ColVector<M> {
    matrix: M,
    col: usize,
}

impl<M: Matrix> ColVector<M> {
    /// View of column `col`; fails with [`Error::IndexOutOfBounds`] if the
    /// matrix has no such column.
    pub fn new(matrix: M, col: usize) -> Result<Self> {
        if col >= matrix.cols() {
            return Err(Error::col_index(col, matrix.rows(), matrix.cols()));
        }
        Ok(Self { matrix, col })
    }

    /// Index of the viewed column.
    pub fn col_index(&self) -> usize {
        self.col
    }

    /// Gives back the owner.
    pub fn into_inner(self) -> M {
        self.matrix
    }
}

impl<M: Matrix> Vector for ColVector<M> {
    #[inline]
    fn size(&self) -> usize {
        self.matrix.rows()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        check_index(index, self.size())?;
        self.matrix.get(index, self.col)
    }
}

impl<M: MatrixMut> VectorMut for ColVector<M> {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        check_index(index, self.size())?;
        self.matrix.set(index, self.col, value)
    }
}

impl<M: Matrix, V: Vector + ?Sized> PartialEq<V> for ColVector<M> {
    fn eq(&self, other: &V) -> bool {
        self.equals(other)
    }
}

impl<M: Matrix> Hash for ColVector<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}
