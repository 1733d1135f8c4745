//! Matrix contract

use std::hash::Hasher;
use std::iter::FusedIterator;

use comfy_table::Table;

use super::{Num, Vector, VectorMut};
use crate::dense::{DenseMatrix, DenseVector};
use crate::display::{MatrixDisplay, matrix_table};
use crate::error::{Error, Result, Shape};
use crate::view::{ColVector, MatrixVector, RowVector};

/// Read access to a fixed `rows × cols` grid of [`Num`], row-major.
///
/// `get(r, c)` must succeed exactly for `r < rows()` and `c < cols()`.
pub trait Matrix {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Element at `(row, col)`, or [`Error::IndexOutOfBounds`].
    fn get(&self, row: usize, col: usize) -> Result<Num>;

    /// `(rows, cols)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// `true` for a square matrix.
    #[inline]
    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Read-only view of row `index`.
    fn row(&self, index: usize) -> Result<RowVector<&Self>> {
        RowVector::new(self, index)
    }

    /// Read-only view of column `index`.
    fn col(&self, index: usize) -> Result<ColVector<&Self>> {
        ColVector::new(self, index)
    }

    /// Row views, top to bottom.
    fn row_iter(&self) -> RowIter<'_, Self> {
        RowIter {
            matrix: self,
            index: 0,
            end: self.rows(),
        }
    }

    /// Column views, left to right.
    fn col_iter(&self) -> ColIter<'_, Self> {
        ColIter {
            matrix: self,
            index: 0,
            end: self.cols(),
        }
    }

    /// Copies row `index` into `dest`, under the rules of [`Vector::copy_into`].
    fn copy_row_into<D>(&self, index: usize, dest: &mut D) -> Result<()>
    where
        D: VectorMut + ?Sized,
    {
        self.row(index)?.copy_into(dest)
    }

    /// Copies column `index` into `dest`, under the rules of [`Vector::copy_into`].
    fn copy_col_into<D>(&self, index: usize, dest: &mut D) -> Result<()>
    where
        D: VectorMut + ?Sized,
    {
        self.col(index)?.copy_into(dest)
    }

    /// Read-only row-major flattening of this matrix.
    fn as_vector(&self) -> MatrixVector<&Self> {
        MatrixVector::new(self)
    }

    /// Independent dense copy.
    fn to_dense(&self) -> DenseMatrix {
        DenseMatrix::from_parts(self.rows(), self.cols(), self.as_vector().iter().collect())
    }

    /// New matrix with rows and columns swapped.
    fn transpose(&self) -> DenseMatrix {
        let data = self.col_iter().flat_map(|col| col.to_dense().into_vec()).collect();
        DenseMatrix::from_parts(self.cols(), self.rows(), data)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() × other.cols()`.
    fn mul_matrix<B>(&self, other: &B) -> Result<DenseMatrix>
    where
        B: Matrix + ?Sized,
    {
        if self.cols() != other.rows() {
            return Err(Error::shape_mismatch(
                "matrix product",
                Shape::Matrix(self.cols(), other.cols()),
                Shape::Matrix(other.rows(), other.cols()),
            ));
        }
        log::trace!(
            "matrix product ({}, {}) x ({}, {})",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );

        let mut data = Vec::with_capacity(self.rows() * other.cols());
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut acc = 0.0;
                for k in 0..self.cols() {
                    acc += self.get(i, k)? * other.get(k, j)?;
                }
                data.push(acc);
            }
        }
        Ok(DenseMatrix::from_parts(self.rows(), other.cols(), data))
    }

    /// Matrix-vector product; element `i` is row `i` dotted with `vector`.
    fn mul_vector<V>(&self, vector: &V) -> Result<DenseVector>
    where
        V: Vector + ?Sized,
    {
        if self.cols() != vector.size() {
            return Err(Error::shape_mismatch(
                "matrix-vector product",
                Shape::Vector(self.cols()),
                Shape::Vector(vector.size()),
            ));
        }
        log::trace!(
            "matrix-vector product ({}, {}) x {}",
            self.rows(),
            self.cols(),
            vector.size()
        );
        self.row_iter().map(|row| row.dot(vector)).collect()
    }

    /// Same row count and pairwise-equal rows.
    fn equals<B>(&self, other: &B) -> bool
    where
        B: Matrix + ?Sized,
    {
        self.rows() == other.rows()
            && self
                .row_iter()
                .zip(other.row_iter())
                .all(|(a, b)| a.equals(&b))
    }

    /// Feeds the row count and every row into `state`, consistent with
    /// [`Matrix::equals`].
    fn hash_elements<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.rows());
        for row in self.row_iter() {
            row.hash_elements(state);
        }
    }

    /// `[[a, b], [c, d]]` rendering of the rows.
    fn to_display_string(&self) -> String {
        MatrixDisplay(self).to_string()
    }

    /// Boxed UTF-8 table with row and column indices.
    fn table(&self) -> Table {
        matrix_table(self)
    }
}

/// Write access on top of [`Matrix`].
pub trait MatrixMut: Matrix {
    /// Stores `value` at `(row, col)`, or fails with [`Error::IndexOutOfBounds`].
    fn set(&mut self, row: usize, col: usize, value: Num) -> Result<()>;

    /// Writable view of row `index`.
    fn row_mut(&mut self, index: usize) -> Result<RowVector<&mut Self>> {
        RowVector::new(self, index)
    }

    /// Writable view of column `index`.
    fn col_mut(&mut self, index: usize) -> Result<ColVector<&mut Self>> {
        ColVector::new(self, index)
    }

    /// Writable row-major flattening of this matrix.
    fn as_vector_mut(&mut self) -> MatrixVector<&mut Self> {
        MatrixVector::new(self)
    }

    /// Copies `values` into row `index`; `values.size()` must equal `cols()`.
    fn set_row<V>(&mut self, index: usize, values: &V) -> Result<()>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("set_row", self.cols(), values.size())?;
        values.copy_into(&mut self.row_mut(index)?)
    }

    /// Copies `values` into column `index`; `values.size()` must equal `rows()`.
    fn set_col<V>(&mut self, index: usize, values: &V) -> Result<()>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("set_col", self.rows(), values.size())?;
        values.copy_into(&mut self.col_mut(index)?)
    }

    /// `self += other`, elementwise.
    fn add_assign<B>(&mut self, other: &B) -> Result<()>
    where
        B: Matrix + ?Sized,
    {
        ensure_same_shape("add", self.shape(), other.shape())?;
        self.as_vector_mut().add_assign(&other.as_vector())
    }

    /// `self -= other`, elementwise.
    fn sub_assign<B>(&mut self, other: &B) -> Result<()>
    where
        B: Matrix + ?Sized,
    {
        ensure_same_shape("sub", self.shape(), other.shape())?;
        self.as_vector_mut().sub_assign(&other.as_vector())
    }

    /// Multiplies every element by `factor`.
    fn scale(&mut self, factor: Num) -> Result<()> {
        self.as_vector_mut().scale(factor)
    }

    /// Divides every element by `divisor`.
    fn div_assign_scalar(&mut self, divisor: Num) -> Result<()> {
        self.as_vector_mut().div_assign_scalar(divisor)
    }

    /// Sets every element to `value`.
    fn fill(&mut self, value: Num) -> Result<()> {
        self.as_vector_mut().fill(value)
    }

    /// Replaces every element `x` with `f(x)`.
    fn apply<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(Num) -> Num,
    {
        self.as_vector_mut().apply(f)
    }
}

fn ensure_same_shape(operation: &'static str, expected: (usize, usize), found: (usize, usize)) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::shape_mismatch(
            operation,
            Shape::Matrix(expected.0, expected.1),
            Shape::Matrix(found.0, found.1),
        ))
    }
}

// --- Reference implementations ---------------------------------------------

impl<M: Matrix + ?Sized> Matrix for &M {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Num> {
        (**self).get(row, col)
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Num> {
        (**self).get(row, col)
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Num) -> Result<()> {
        (**self).set(row, col, value)
    }
}

// --- Iterators ----------------------------------------------------------------

/// Iterator over the rows of a [`Matrix`], created by [`Matrix::row_iter`].
#[derive(Debug)]
pub struct RowIter<'a, M: ?Sized> {
    matrix: &'a M,
    index: usize,
    end: usize,
}

impl<'a, M: Matrix + ?Sized> Iterator for RowIter<'a, M> {
    type Item = RowVector<&'a M>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        match RowVector::new(self.matrix, self.index) {
            Ok(row) => {
                self.index += 1;
                Some(row)
            }
            Err(_) => {
                self.index = self.end;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<M: Matrix + ?Sized> ExactSizeIterator for RowIter<'_, M> {}
impl<M: Matrix + ?Sized> FusedIterator for RowIter<'_, M> {}

/// Iterator over the columns of a [`Matrix`], created by [`Matrix::col_iter`].
#[derive(Debug)]
pub struct ColIter<'a, M: ?Sized> {
    matrix: &'a M,
    index: usize,
    end: usize,
}

impl<'a, M: Matrix + ?Sized> Iterator for ColIter<'a, M> {
    type Item = ColVector<&'a M>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        match ColVector::new(self.matrix, self.index) {
            Ok(col) => {
                self.index += 1;
                Some(col)
            }
            Err(_) => {
                self.index = self.end;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<M: Matrix + ?Sized> ExactSizeIterator for ColIter<'_, M> {}
impl<M: Matrix + ?Sized> FusedIterator for ColIter<'_, M> {}
