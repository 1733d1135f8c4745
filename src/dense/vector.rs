use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul, Neg};

use num_traits::{One, Zero};

use super::DenseMatrix;
use crate::error::{Error, Result};
use crate::math::{Num, Vector, VectorMut};

/// A vector that owns a contiguous buffer of its elements.
#[derive(Debug, Clone, Default)]
pub struct DenseVector {
    data: Vec<Num>,
}

impl DenseVector {
    /// Vector of `size` zeros.
    pub fn zeros(size: usize) -> Self {
        Self::filled(size, Num::zero())
    }

    /// Vector of `size` ones.
    pub fn ones(size: usize) -> Self {
        Self::filled(size, Num::one())
    }

    /// Vector of `size` copies of `value`.
    pub fn filled(size: usize, value: Num) -> Self {
        Self {
            data: vec![value; size],
        }
    }

    /// Takes ownership of `data`.
    pub fn from_vec(data: Vec<Num>) -> Self {
        Self { data }
    }

    /// Copies `values` into a new vector.
    pub fn from_slice(values: &[Num]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[Num] {
        &self.data
    }

    /// Elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Num] {
        &mut self.data
    }

    /// Releases the buffer.
    pub fn into_vec(self) -> Vec<Num> {
        self.data
    }

    /// Reuses this buffer as a `rows × cols` matrix without copying.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless `rows * cols == size()`.
    pub fn into_matrix(self, rows: usize, cols: usize) -> Result<DenseMatrix> {
        DenseMatrix::from_vec(rows, cols, self.data)
    }
}

impl Vector for DenseVector {
    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| Error::vector_index(index, self.data.len()))
    }

    fn to_dense(&self) -> DenseVector {
        self.clone()
    }
}

impl VectorMut for DenseVector {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        let size = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| Error::vector_index(index, size))?;
        *slot = value;
        Ok(())
    }
}

impl<V: Vector + ?Sized> PartialEq<V> for DenseVector {
    fn eq(&self, other: &V) -> bool {
        self.equals(other)
    }
}

impl Hash for DenseVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_elements(state);
    }
}

impl From<Vec<Num>> for DenseVector {
    fn from(data: Vec<Num>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[Num]> for DenseVector {
    fn from(values: &[Num]) -> Self {
        Self::from_slice(values)
    }
}

impl From<DenseVector> for Vec<Num> {
    fn from(vector: DenseVector) -> Self {
        vector.data
    }
}

impl FromIterator<Num> for DenseVector {
    fn from_iter<I: IntoIterator<Item = Num>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for DenseVector {
    type Item = Num;
    type IntoIter = std::vec::IntoIter<Num>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a DenseVector {
    type Item = Num;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Num>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter().copied()
    }
}

impl AsRef<[Num]> for DenseVector {
    fn as_ref(&self) -> &[Num] {
        &self.data
    }
}

// --- Scalar operators --------------------------------------------------------

impl Mul<Num> for DenseVector {
    type Output = DenseVector;

    fn mul(mut self, factor: Num) -> DenseVector {
        self.data.iter_mut().for_each(|x| *x *= factor);
        self
    }
}

impl Mul<DenseVector> for Num {
    type Output = DenseVector;

    fn mul(self, vector: DenseVector) -> DenseVector {
        vector * self
    }
}

impl Div<Num> for DenseVector {
    type Output = DenseVector;

    fn div(mut self, divisor: Num) -> DenseVector {
        self.data.iter_mut().for_each(|x| *x /= divisor);
        self
    }
}

impl Neg for DenseVector {
    type Output = DenseVector;

    fn neg(mut self) -> DenseVector {
        self.data.iter_mut().for_each(|x| *x = -*x);
        self
    }
}
