//! Random-filled constructors for weight initialisation and test patterns.

use rand::Rng;

use crate::dense::{DenseMatrix, DenseVector};
use crate::math::Num;

impl DenseVector {
    /// Vector of `size` samples drawn uniformly from `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    pub fn random<R: Rng + ?Sized>(size: usize, low: Num, high: Num, rng: &mut R) -> Self {
        (0..size).map(|_| rng.gen_range(low..high)).collect()
    }

    /// Vector of `size` elements, each `1` or `-1` with equal probability.
    pub fn random_bipolar<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        (0..size)
            .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
            .collect()
    }
}

impl DenseMatrix {
    /// `rows × cols` matrix of samples drawn uniformly from `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, low: Num, high: Num, rng: &mut R) -> Self {
        DenseMatrix::from_fn(rows, cols, |_, _| rng.gen_range(low..high))
    }
}
