//! Block composition and decomposition
//!
//! `compose` lays the blocks of a grid out edge to edge; `decompose` copies
//! the same sub-rectangles back out of a matrix into the blocks.

use std::borrow::{Borrow, BorrowMut};

use blockmat_core::{Element, Matrix2D, MatrixError, Result};
use tracing::{debug, trace};

use crate::factory::Factory2D;
use crate::shape::BlockShape;

impl<T: Element> Factory2D<T> {
    /// Build a block matrix from a grid of optional parts.
    ///
    /// Grid row `i` occupies result rows starting at the sum of the heights of
    /// rows before it; grid columns are placed the same way. Absent parts
    /// leave zeros. An empty grid yields a 0x0 matrix.
    pub fn compose<B>(&self, parts: &[Vec<Option<B>>]) -> Result<Matrix2D<T>>
    where
        B: Borrow<Matrix2D<T>>,
    {
        let shape = BlockShape::infer::<T, B>(parts)?;
        debug!(
            grid_rows = shape.grid_rows(),
            grid_cols = shape.grid_cols(),
            rows = shape.total_rows(),
            cols = shape.total_cols(),
            kind = %self.kind(),
            "compose"
        );

        let mut matrix = self.make(shape.total_rows(), shape.total_cols());
        if shape.is_empty_grid() {
            return Ok(matrix);
        }

        let row_offsets = shape.row_offsets();
        let col_offsets = shape.col_offsets();
        for (i, row) in parts.iter().enumerate() {
            for (j, part) in row.iter().enumerate() {
                let Some(part): Option<&Matrix2D<T>> = part.as_ref().map(Borrow::borrow) else {
                    continue;
                };
                trace!(
                    block_row = i,
                    block_col = j,
                    rows = part.rows(),
                    cols = part.cols(),
                    "copy block in"
                );
                matrix
                    .view_mut(row_offsets[i], col_offsets[j], part.rows(), part.cols())?
                    .assign(part.as_view())?;
            }
        }
        Ok(matrix)
    }

    /// Copy sub-rectangles of `matrix` back into the parts of a grid, in place.
    ///
    /// Offsets are computed exactly as in [`compose`](Self::compose). Each
    /// present part keeps its own shape; absent parts are skipped. `matrix`
    /// must be at least as large as the composed parts.
    pub fn decompose<B>(&self, parts: &mut [Vec<Option<B>>], matrix: &Matrix2D<T>) -> Result<()>
    where
        B: BorrowMut<Matrix2D<T>>,
    {
        let shape = BlockShape::infer::<T, B>(parts)?;
        debug!(
            grid_rows = shape.grid_rows(),
            grid_cols = shape.grid_cols(),
            rows = shape.total_rows(),
            cols = shape.total_cols(),
            source_rows = matrix.rows(),
            source_cols = matrix.cols(),
            "decompose"
        );
        if shape.is_empty_grid() {
            return Ok(());
        }

        if matrix.rows() < shape.total_rows() || matrix.cols() < shape.total_cols() {
            return Err(MatrixError::SizeMismatch {
                needed_rows: shape.total_rows(),
                needed_cols: shape.total_cols(),
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let row_offsets = shape.row_offsets();
        let col_offsets = shape.col_offsets();
        for (i, row) in parts.iter_mut().enumerate() {
            for (j, part) in row.iter_mut().enumerate() {
                let Some(part): Option<&mut Matrix2D<T>> =
                    part.as_mut().map(BorrowMut::borrow_mut)
                else {
                    continue;
                };
                trace!(
                    block_row = i,
                    block_col = j,
                    rows = part.rows(),
                    cols = part.cols(),
                    "copy block out"
                );
                let source = matrix.view(row_offsets[i], col_offsets[j], part.rows(), part.cols())?;
                part.assign(source)?;
            }
        }
        Ok(())
    }
}
