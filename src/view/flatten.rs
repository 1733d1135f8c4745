use std::hash::{Hash, Hasher};

use super::check_index;
use crate::error::Result;
use crate::math::{Matrix, MatrixMut, Num, Vector, VectorMut};

/// A whole matrix seen as one row-major vector of `rows() * cols()` elements.
///
/// Index `k` maps to `(k / cols, k % cols)`.
#[derive(Debug)]
pub struct MatrixVector<M> {
    matrix: M,
}

impl<M: Matrix> MatrixVector<M> {
    /// Flattening view over `matrix`; every matrix has one, so this cannot fail.
    pub fn new(matrix: M) -> Self {
        Self { matrix }
    }

    /// Gives back the owner.
    pub fn into_inner(self) -> M {
        self.matrix
    }
}

impl<M: Matrix> Vector for MatrixVector<M> {
    #[inline]
    fn size(&self) -> usize {
        self.matrix.rows() * self.matrix.cols()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        check_index(index, self.size())?;
        let cols = self.matrix.cols();
        self.matrix.get(index / cols, index % cols)
    }
}

impl<M: MatrixMut> VectorMut for MatrixVector<M> {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        check_index(index, self.size())?;
        let cols = self.matrix.cols();
        self.matrix.set(index / cols, index % cols, value)
    }
}

impl<M: Matrix, V: Vector + ?Sized> PartialEq<V> for MatrixVector<M> {
    fn eq(&self, other: &V) -> bool {
        self.equals(other)
    }
}

impl<M: Matrix> Hash for MatrixVector<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}
