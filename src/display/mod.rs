// neuromat/src/display/mod.rs
use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::dense::{DenseMatrix, DenseVector};
use crate::math::{Matrix, Vector};
use crate::view::{ColVector, MatrixVector, RowVector, VectorMatrix};

/// Formats any vector as `[a, b, c]`, forwarding the formatter's flags
/// (precision, sign, width) to every element.
pub(crate) struct VectorDisplay<'a, V: ?Sized>(pub(crate) &'a V);

/// Formats any matrix as `[[a, b], [c, d]]`.
pub(crate) struct MatrixDisplay<'a, M: ?Sized>(pub(crate) &'a M);

impl<V: Vector + ?Sized> Display for VectorDisplay<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, x) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(&x, f)?;
        }
        f.write_str("]")
    }
}

impl<M: Matrix + ?Sized> Display for MatrixDisplay<'_, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, row) in self.0.row_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(&VectorDisplay(&row), f)?;
        }
        f.write_str("]")
    }
}

/// Renders `matrix` as a rounded UTF-8 table with row and column indices.
pub(crate) fn matrix_table<M: Matrix + ?Sized>(matrix: &M) -> Table {
    let mut header = vec![Cell::new("")];
    header.extend((0..matrix.cols()).map(|c| Cell::new(c).set_alignment(CellAlignment::Center)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (r, row) in matrix.row_iter().enumerate() {
        let mut cells = vec![Cell::new(r).set_alignment(CellAlignment::Left)];
        cells.extend(row.iter().map(|x| Cell::new(x).set_alignment(CellAlignment::Right)));
        table.add_row(cells);
    }
    table
}

impl Display for DenseVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        VectorDisplay(self).fmt(f)
    }
}

impl Display for DenseMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        MatrixDisplay(self).fmt(f)
    }
}

impl<M: Matrix> Display for RowVector<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        VectorDisplay(self).fmt(f)
    }
}

impl<M: Matrix> Display for ColVector<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        VectorDisplay(self).fmt(f)
    }
}

impl<M: Matrix> Display for MatrixVector<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        VectorDisplay(self).fmt(f)
    }
}

impl<V: Vector> Display for VectorMatrix<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        MatrixDisplay(self).fmt(f)
    }
}
