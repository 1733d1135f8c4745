use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul, Neg};

use num_traits::{One, Zero};

use super::DenseVector;
use crate::error::{Error, Result, Shape};
use crate::math::{Matrix, MatrixMut, Num, RowIter};
use crate::view::RowVector;

/// A matrix that owns a contiguous row-major buffer: `(r, c)` lives at
/// `c + r * cols`.
#[derive(Debug, Clone, Default)]
pub struct DenseMatrix {
    data: Vec<Num>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Num::zero())
    }

    /// `rows × cols` matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Num::one())
    }

    /// `rows × cols` matrix of copies of `value`.
    pub fn filled(rows: usize, cols: usize, value: Num) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, size, |r, c| if r == c { Num::one() } else { Num::zero() })
    }

    /// `rows × cols` matrix with element `(r, c)` set to `f(r, c)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Num,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { data, rows, cols }
    }

    /// Matrix built from explicit rows.
    ///
    /// Every row must have the length of the first one, otherwise this fails
    /// with [`Error::ShapeMismatch`]. No rows gives a `0 × 0` matrix.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[Num]>,
    {
        let Some(first) = rows.first() else {
            return Ok(Self::zeros(0, 0));
        };
        let cols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            Error::ensure_same_size("from_rows", cols, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Takes ownership of a row-major buffer.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless `data.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Num>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::shape_mismatch(
                "from_vec",
                Shape::Matrix(rows, cols),
                Shape::Vector(data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Num>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Row-major elements as a slice.
    pub fn as_slice(&self) -> &[Num] {
        &self.data
    }

    /// Row-major elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Num] {
        &mut self.data
    }

    /// Releases the row-major buffer.
    pub fn into_vec(self) -> Vec<Num> {
        self.data
    }

    /// Reuses the row-major buffer as a vector without copying.
    pub fn into_vector(self) -> DenseVector {
        DenseVector::from_vec(self.data)
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

impl Matrix for DenseMatrix {
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
        let offset = self.offset(row, col)?;
        self.data
            .get(offset)
            .copied()
            .ok_or_else(|| Error::matrix_index(row, col, self.rows, self.cols))
    }

    fn to_dense(&self) -> DenseMatrix {
        self.clone()
    }
}

impl MatrixMut for DenseMatrix {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Num) -> Result<()> {
        let offset = self.offset(row, col)?;
        let (rows, cols) = (self.rows, self.cols);
        let slot = self
            .data
            .get_mut(offset)
            .ok_or_else(|| Error::matrix_index(row, col, rows, cols))?;
        *slot = value;
        Ok(())
    }
}

impl<B: Matrix + ?Sized> PartialEq<B> for DenseMatrix {
    fn eq(&self, other: &B) -> bool {
        self.equals(other)
    }
}

impl Hash for DenseMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}

impl<'a> IntoIterator for &'a DenseMatrix {
    type Item = RowVector<&'a DenseMatrix>;
    type IntoIter = RowIter<'a, DenseMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.row_iter()
    }
}

impl From<DenseVector> for DenseMatrix {
    /// A vector becomes a single-column matrix.
    fn from(vector: DenseVector) -> Self {
        let data = vector.into_vec();
        Self {
            rows: data.len(),
            cols: 1,
            data,
        }
    }
}

// --- Scalar operators --------------------------------------------------------

impl Mul<Num> for DenseMatrix {
    type Output = DenseMatrix;

    fn mul(mut self, factor: Num) -> DenseMatrix {
        self.data.iter_mut().for_each(|x| *x *= factor);
        self
    }
}

impl Mul<DenseMatrix> for Num {
    type Output = DenseMatrix;

    fn mul(self, matrix: DenseMatrix) -> DenseMatrix {
        matrix * self
    }
}

impl Div<Num> for DenseMatrix {
    type Output = DenseMatrix;

    fn div(mut self, divisor: Num) -> DenseMatrix {
        self.data.iter_mut().for_each(|x| *x /= divisor);
        self
    }
}

impl Neg for DenseMatrix {
    type Output = DenseMatrix;

    fn neg(mut self) -> DenseMatrix {
        self.data.iter_mut().for_each(|x| *x = -*x);
        self
    }
}
