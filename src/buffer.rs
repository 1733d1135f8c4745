//! Plain 1-D buffers treated as vectors.
//!
//! Only `[Num]` carries the contracts; arrays and `Vec`s reach it through
//! `as_slice()`/`as_mut_slice()`, so their own `get` and `iter` are never
//! shadowed. A pixel buffer can then go straight into any vector operation
//! or reshape without being wrapped first.

use crate::error::{Error, Result};
use crate::math::{Num, Vector, VectorMut};

impl Vector for [Num] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Num> {
        <[Num]>::get(self, index)
            .copied()
            .ok_or_else(|| Error::vector_index(index, self.len()))
    }
}

impl VectorMut for [Num] {
    #[inline]
    fn set(&mut self, index: usize, value: Num) -> Result<()> {
        let size = self.len();
        let slot = self
            .get_mut(index)
            .ok_or_else(|| Error::vector_index(index, size))?;
        *slot = value;
        Ok(())
    }
}
