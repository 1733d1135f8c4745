//! Error types for vector and matrix operations.

use std::fmt;

use thiserror::Error;

/// Location handed to an indexed accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Index into a vector.
    Vector(usize),
    /// `(row, col)` index into a matrix.
    Matrix(usize, usize),
    /// Whole row of a matrix.
    Row(usize),
    /// Whole column of a matrix.
    Column(usize),
}

/// Dimensions of a vector or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Vector of the given size.
    Vector(usize),
    /// Matrix of `(rows, cols)`.
    Matrix(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Vector(i) => write!(f, "{i}"),
            Position::Matrix(r, c) => write!(f, "({r}, {c})"),
            Position::Row(r) => write!(f, "row {r}"),
            Position::Column(c) => write!(f, "column {c}"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(n) => write!(f, "size {n}"),
            Shape::Matrix(r, c) => write!(f, "shape ({r}, {c})"),
        }
    }
}

/// Errors raised by vector and matrix operations.
///
/// Both variants signal a broken caller contract; nothing in this crate
/// retries or recovers from them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index passed to `get`/`set` (or to a view constructor) is out of range.
    #[error("index {index} out of bounds for {bounds}")]
    IndexOutOfBounds {
        /// The offending index.
        index: Position,
        /// Dimensions of the accessed object.
        bounds: Shape,
    },

    /// Operand sizes or shapes are incompatible.
    #[error("{operation}: expected {expected}, got {found}")]
    ShapeMismatch {
        /// Name of the failing operation.
        operation: &'static str,
        /// Shape the operation required.
        expected: Shape,
        /// Shape it was given.
        found: Shape,
    },
}

impl Error {
    /// Out-of-bounds vector access.
    #[inline]
    pub(crate) fn vector_index(index: usize, size: usize) -> Self {
        Error::IndexOutOfBounds {
            index: Position::Vector(index),
            bounds: Shape::Vector(size),
        }
    }

    /// Out-of-bounds matrix access.
    #[inline]
    pub(crate) fn matrix_index(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Error::IndexOutOfBounds {
            index: Position::Matrix(row, col),
            bounds: Shape::Matrix(rows, cols),
        }
    }

    /// Row view requested past the last row.
    #[inline]
    pub(crate) fn row_index(row: usize, rows: usize, cols: usize) -> Self {
        Error::IndexOutOfBounds {
            index: Position::Row(row),
            bounds: Shape::Matrix(rows, cols),
        }
    }

    /// Column view requested past the last column.
    #[inline]
    pub(crate) fn col_index(col: usize, rows: usize, cols: usize) -> Self {
        Error::IndexOutOfBounds {
            index: Position::Column(col),
            bounds: Shape::Matrix(rows, cols),
        }
    }

    pub(crate) fn shape_mismatch(operation: &'static str, expected: Shape, found: Shape) -> Self {
        log::debug!("shape mismatch in {operation}: expected {expected}, got {found}");
        Error::ShapeMismatch {
            operation,
            expected,
            found,
        }
    }

    /// Fails with [`Error::ShapeMismatch`] unless both vector sizes agree.
    pub(crate) fn ensure_same_size(operation: &'static str, expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::shape_mismatch(operation, Shape::Vector(expected), Shape::Vector(found)))
        }
    }

    /// `true` for [`Error::IndexOutOfBounds`].
    pub fn is_index(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }

    /// `true` for [`Error::ShapeMismatch`].
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Error::ShapeMismatch { .. })
    }
}

/// Result type alias for vector and matrix operations.
pub type Result<T> = std::result::Result<T, Error>;
