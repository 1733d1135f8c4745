//! Vector contract
//!
//! # Motivation
//! The learning algorithms in this crate's consumers never care *where* the
//! numbers of a pattern live: a flat pattern vector, one row of a weight
//! matrix, or the pixels of an image grid read back in row-major order are
//! all "a sequence of `size()` numbers". The contract therefore requires only
//! indexed access; everything else is derived from it.

use std::hash::Hasher;
use std::iter::FusedIterator;

use num_traits::{Float, Zero};

use super::Num;
use crate::dense::{DenseMatrix, DenseVector};
use crate::display::VectorDisplay;
use crate::error::{Error, Result, Shape};
use crate::view::VectorMatrix;

/// Read access to a fixed-size sequence of [`Num`].
///
/// `size()` must stay constant for the lifetime of the object and `get(i)`
/// must succeed exactly for `i < size()`.
pub trait Vector {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Element at `index`, or [`Error::IndexOutOfBounds`].
    fn get(&self, index: usize) -> Result<Num>;

    /// `true` when `size() == 0`.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Lazy iterator over the elements, starting at index 0.
    #[inline]
    fn iter(&self) -> VectorIter<'_, Self> {
        VectorIter::new(self)
    }

    /// Copies every element of `self` into `dest[0..size())`.
    ///
    /// Trailing elements of a larger `dest` are left untouched.
    fn copy_into<D>(&self, dest: &mut D) -> Result<()>
    where
        D: VectorMut + ?Sized,
    {
        if dest.size() < self.size() {
            return Err(Error::shape_mismatch(
                "copy",
                Shape::Vector(self.size()),
                Shape::Vector(dest.size()),
            ));
        }
        for index in 0..self.size() {
            dest.set(index, self.get(index)?)?;
        }
        Ok(())
    }

    /// Independent dense copy.
    ///
    /// This is the only operation that breaks aliasing: writes to the copy
    /// are never visible in `self` and vice versa.
    fn to_dense(&self) -> DenseVector {
        self.iter().collect()
    }

    /// Read-only `rows × cols` view over this vector's elements.
    fn as_matrix(&self, rows: usize, cols: usize) -> Result<VectorMatrix<&Self>> {
        VectorMatrix::new(self, rows, cols)
    }

    /// Dot product.
    fn dot<V>(&self, other: &V) -> Result<Num>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("dot", self.size(), other.size())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Elementwise sum as a new vector.
    fn add<V>(&self, other: &V) -> Result<DenseVector>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("add", self.size(), other.size())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a + b).collect())
    }

    /// Elementwise difference as a new vector.
    fn sub<V>(&self, other: &V) -> Result<DenseVector>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("sub", self.size(), other.size())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a - b).collect())
    }

    /// Every element multiplied by `factor`.
    fn mul_scalar(&self, factor: Num) -> DenseVector {
        self.map(|x| x * factor)
    }

    /// Every element divided by `divisor`.
    fn div_scalar(&self, divisor: Num) -> DenseVector {
        self.map(|x| x / divisor)
    }

    /// Every element negated.
    fn negated(&self) -> DenseVector {
        self.map(|x| -x)
    }

    /// New vector with `f` applied to every element.
    fn map<F>(&self, f: F) -> DenseVector
    where
        F: FnMut(Num) -> Num,
    {
        self.iter().map(f).collect()
    }

    /// Sum of all elements.
    fn sum(&self) -> Num {
        self.iter().fold(Num::zero(), |acc, x| acc + x)
    }

    /// `self · self`.
    fn norm_squared(&self) -> Num {
        self.iter().map(|x| x * x).sum()
    }

    /// Euclidean length.
    fn norm(&self) -> Num {
        Float::sqrt(self.norm_squared())
    }

    /// Outer product `self ⊗ other`, a `size(self) × size(other)` matrix.
    fn outer<V>(&self, other: &V) -> DenseMatrix
    where
        V: Vector + ?Sized,
    {
        let data = self
            .iter()
            .flat_map(|a| other.iter().map(move |b| a * b))
            .collect();
        DenseMatrix::from_parts(self.size(), other.size(), data)
    }

    /// Same size and pairwise-equal elements.
    fn equals<V>(&self, other: &V) -> bool
    where
        V: Vector + ?Sized,
    {
        self.size() == other.size() && self.iter().eq(other.iter())
    }

    /// Feeds the size and every element into `state`.
    ///
    /// Consistent with [`Vector::equals`]: `-0.0` hashes like `0.0`.
    fn hash_elements<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size());
        for x in self.iter() {
            state.write_u32(canonical_bits(x));
        }
    }

    /// `[a, b, c]` rendering of the elements.
    fn to_display_string(&self) -> String {
        VectorDisplay(self).to_string()
    }
}

/// Write access on top of [`Vector`].
pub trait VectorMut: Vector {
    /// Stores `value` at `index`, or fails with [`Error::IndexOutOfBounds`].
    fn set(&mut self, index: usize, value: Num) -> Result<()>;

    /// Writable `rows × cols` view over this vector's elements.
    fn as_matrix_mut(&mut self, rows: usize, cols: usize) -> Result<VectorMatrix<&mut Self>> {
        VectorMatrix::new(self, rows, cols)
    }

    /// `self += other`.
    fn add_assign<V>(&mut self, other: &V) -> Result<()>
    where
        V: Vector + ?Sized,
    {
        self.add_scaled(1.0, other)
    }

    /// `self -= other`.
    fn sub_assign<V>(&mut self, other: &V) -> Result<()>
    where
        V: Vector + ?Sized,
    {
        self.add_scaled(-1.0, other)
    }

    /// `self += factor * other`.
    fn add_scaled<V>(&mut self, factor: Num, other: &V) -> Result<()>
    where
        V: Vector + ?Sized,
    {
        Error::ensure_same_size("add", self.size(), other.size())?;
        for index in 0..self.size() {
            let value = self.get(index)? + factor * other.get(index)?;
            self.set(index, value)?;
        }
        Ok(())
    }

    /// `self *= factor`.
    fn scale(&mut self, factor: Num) -> Result<()> {
        self.apply(|x| x * factor)
    }

    /// `self /= divisor`.
    fn div_assign_scalar(&mut self, divisor: Num) -> Result<()> {
        self.apply(|x| x / divisor)
    }

    /// Sets every element to `value`.
    fn fill(&mut self, value: Num) -> Result<()> {
        self.apply(|_| value)
    }

    /// Replaces every element `x` with `f(x)`.
    fn apply<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(Num) -> Num,
    {
        for index in 0..self.size() {
            let value = f(self.get(index)?);
            self.set(index, value)?;
        }
        Ok(())
    }
}

pub(crate) fn canonical_bits(x: Num) -> u32 {
    if x == 0.0 { 0 } else { x.to_bits() }
}

// --- Reference implementations ---------------------------------------------

impl<V: Vector + ?Sized> Vector for &V {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        (**self).get(index)
    }
}

impl<V: Vector + ?Sized> Vector for &mut V {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        (**self).get(index)
    }
}

impl<V: VectorMut + ?Sized> VectorMut for &mut V {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        (**self).set(index, value)
    }
}

/// Iterator over the elements of a [`Vector`].
///
/// Created by [`Vector::iter`]; each call starts fresh at index 0.
#[derive(Debug)]
pub struct VectorIter<'a, V: ?Sized> {
    vector: &'a V,
    index: usize,
    end: usize,
}

impl<'a, V: Vector + ?Sized> VectorIter<'a, V> {
    #[inline]
    fn new(vector: &'a V) -> Self {
        Self {
            vector,
            index: 0,
            end: vector.size(),
        }
    }
}

impl<V: Vector + ?Sized> Iterator for VectorIter<'_, V> {
    type Item = Num;

    #[inline]
    fn next(&mut self) -> Option<Num> {
        if self.index >= self.end {
            return None;
        }
        match self.vector.get(self.index) {
            Ok(value) => {
                self.index += 1;
                Some(value)
            }
            Err(_) => {
                self.index = self.end;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<V: Vector + ?Sized> ExactSizeIterator for VectorIter<'_, V> {}
impl<V: Vector + ?Sized> FusedIterator for VectorIter<'_, V> {}
