use std::hash::{Hash, Hasher};

use crate::error::{Error, Result, Shape};
use crate::math::{Matrix, MatrixMut, Num, Vector, VectorMut};

/// A vector seen as a `rows × cols` matrix; `(r, c)` maps to `c + r * cols`.
///
/// The shape is checked once, when the view is built. A vector's size cannot
/// change afterwards, so accesses only check their own bounds.
#[derive(Debug)]
pub struct VectorMatrix<V> {
    vector: V,
    rows: usize,
    cols: usize,
}

impl<V: Vector> VectorMatrix<V> {
    /// Reshapes `vector`; fails with [`Error::ShapeMismatch`] unless
    /// `rows * cols == vector.size()`.
    pub fn new(vector: V, rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(vector.size()) {
            return Err(Error::shape_mismatch(
                "reshape",
                Shape::Matrix(rows, cols),
                Shape::Vector(vector.size()),
            ));
        }
        Ok(Self { vector, rows, cols })
    }

    /// Gives back the owner.
    pub fn into_inner(self) -> V {
        self.vector
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(col + row * self.cols)
        } else {
            Err(Error::matrix_index(row, col, self.rows, self.cols))
        }
    }
}

impl<V: Vector> Matrix for VectorMatrix<V> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Num> {
        self.vector.get(self.offset(row, col)?)
    }
}

impl<V: VectorMut> MatrixMut for VectorMatrix<V> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Num) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.vector.set(offset, value)
    }
}

impl<V: Vector, B: Matrix + ?Sized> PartialEq<B> for VectorMatrix<V> {
    fn eq(&self, other: &B) -> bool {
        self.equals(other)
    }
}

impl<V: Vector> Hash for VectorMatrix<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}
