//! Rectangular windows over a matrix's storage
//!
//! A view is an offset plus a shape over a borrowed [`Matrix2D`]. Nothing is
//! copied: writes through a [`MatrixViewMut`] land in the source matrix, and
//! views of views compose their offsets.

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix2D;

/// Placement of a view inside its source matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl Window {
    pub(crate) fn full(rows: usize, cols: usize) -> Self {
        Self {
            row0: 0,
            col0: 0,
            rows,
            cols,
        }
    }

    pub(crate) fn at(row0: usize, col0: usize, rows: usize, cols: usize) -> Self {
        Self { row0, col0, rows, cols }
    }

    /// Sub-window relative to this one
    pub(crate) fn part(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Window> {
        let row_end = row.checked_add(rows).filter(|end| *end <= self.rows);
        let col_end = col.checked_add(cols).filter(|end| *end <= self.cols);
        if row_end.is_none() || col_end.is_none() {
            return Err(MatrixError::IndexOutOfBounds {
                row: last_touched(row, rows),
                col: last_touched(col, cols),
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Window {
            row0: self.row0 + row,
            col0: self.col0 + col,
            rows,
            cols,
        })
    }
}

fn last_touched(start: usize, len: usize) -> usize {
    if len == 0 {
        start
    } else {
        start.saturating_add(len - 1)
    }
}

/// Read-only window over a matrix
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T: Element> {
    source: &'a Matrix2D<T>,
    window: Window,
}

impl<'a, T: Element> MatrixView<'a, T> {
    pub(crate) fn new(source: &'a Matrix2D<T>, window: Window) -> Self {
        Self { source, window }
    }

    pub fn rows(&self) -> usize {
        self.window.rows
    }

    pub fn cols(&self) -> usize {
        self.window.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.window.rows, self.window.cols)
    }

    /// Get element at (row, col), relative to the view
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.window.rows && col < self.window.cols {
            Some(self.cell(row, col))
        } else {
            None
        }
    }

    fn cell(&self, row: usize, col: usize) -> T {
        self.source.cell(self.window.row0 + row, self.window.col0 + col)
    }

    /// Narrower view sharing the same source
    pub fn part(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixView<'a, T>> {
        Ok(MatrixView {
            source: self.source,
            window: self.window.part(row, col, rows, cols)?,
        })
    }

    /// Top-left part of at most `rows x cols` cells
    pub fn clipped(&self, rows: usize, cols: usize) -> MatrixView<'a, T> {
        MatrixView {
            source: self.source,
            window: Window {
                rows: rows.min(self.window.rows),
                cols: cols.min(self.window.cols),
                ..self.window
            },
        }
    }

    pub fn row(&self, row: usize) -> Result<MatrixView<'a, T>> {
        self.part(row, 0, 1, self.window.cols)
    }

    pub fn column(&self, col: usize) -> Result<MatrixView<'a, T>> {
        self.part(0, col, self.window.rows, 1)
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let cols = self.window.cols;
        (0..self.window.rows).flat_map(move |i| (0..cols).map(move |j| self.cell(i, j)))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Copy the viewed cells into a new matrix with the source's storage kind
    pub fn to_matrix(&self) -> Matrix2D<T> {
        let mut copy = Matrix2D::new(self.source.kind(), self.window.rows, self.window.cols);
        for i in 0..self.window.rows {
            for j in 0..self.window.cols {
                copy.set_cell(i, j, self.cell(i, j));
            }
        }
        copy
    }
}

impl<T: Element> PartialEq for MatrixView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.iter().eq(other.iter())
    }
}

/// Writable window over a matrix
#[derive(Debug)]
pub struct MatrixViewMut<'a, T: Element> {
    source: &'a mut Matrix2D<T>,
    window: Window,
}

impl<'a, T: Element> MatrixViewMut<'a, T> {
    pub(crate) fn new(source: &'a mut Matrix2D<T>, window: Window) -> Self {
        Self { source, window }
    }

    pub fn rows(&self) -> usize {
        self.window.rows
    }

    pub fn cols(&self) -> usize {
        self.window.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.window.rows, self.window.cols)
    }

    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::new(&*self.source, self.window)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.as_view().get(row, col)
    }

    /// Set element at (row, col), relative to the view
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.window.rows || col >= self.window.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.window.rows,
                cols: self.window.cols,
            });
        }
        self.source
            .set_cell(self.window.row0 + row, self.window.col0 + col, value);
        Ok(())
    }

    /// Narrower writable view, reborrowing this one
    pub fn part_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixViewMut<'_, T>> {
        let window = self.window.part(row, col, rows, cols)?;
        Ok(MatrixViewMut::new(&mut *self.source, window))
    }

    /// Set every viewed cell to `value`
    pub fn fill(&mut self, value: T) {
        let Window { row0, col0, rows, cols } = self.window;
        if rows == 0 || cols == 0 {
            return;
        }
        match &mut *self.source {
            Matrix2D::Dense(m) => m.data.view_mut((row0, col0), (rows, cols)).fill(value),
            target => {
                for i in 0..rows {
                    for j in 0..cols {
                        target.set_cell(row0 + i, col0 + j, value);
                    }
                }
            }
        }
    }

    /// Copy every cell from a same-shaped view
    pub fn assign(&mut self, source: MatrixView<'_, T>) -> Result<()> {
        if source.shape() != self.shape() {
            return Err(MatrixError::shape_mismatch(format!(
                "cannot assign {}x{} cells into a {}x{} view",
                source.rows(),
                source.cols(),
                self.rows(),
                self.cols()
            )));
        }
        self.copy_cells(source);
        Ok(())
    }

    /// Copy from a view already known to have this view's shape
    pub(crate) fn copy_cells(&mut self, source: MatrixView<'_, T>) {
        let Window { row0, col0, rows, cols } = self.window;
        if rows == 0 || cols == 0 {
            return;
        }

        match (&mut *self.source, source.source) {
            (Matrix2D::Dense(dst), Matrix2D::Dense(src)) => {
                let from = src.data.view((source.window.row0, source.window.col0), (rows, cols));
                dst.data.view_mut((row0, col0), (rows, cols)).copy_from(&from);
            }
            (target, _) => {
                for i in 0..rows {
                    for j in 0..cols {
                        target.set_cell(row0 + i, col0 + j, source.cell(i, j));
                    }
                }
            }
        }
    }

    /// Copy `values` in row-major order; a row or column view takes a plain vector
    pub fn assign_slice(&mut self, values: &[T]) -> Result<()> {
        let Window { row0, col0, rows, cols } = self.window;
        if values.len() != rows * cols {
            return Err(MatrixError::shape_mismatch(format!(
                "cannot assign {} values into a {}x{} view",
                values.len(),
                rows,
                cols
            )));
        }
        for (k, value) in values.iter().enumerate() {
            self.source.set_cell(row0 + k / cols, col0 + k % cols, *value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MatrixKind;

    fn counting(kind: MatrixKind, rows: usize, cols: usize) -> Matrix2D<f64> {
        let mut m = Matrix2D::new(kind, rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m.set(i, j, (i * cols + j) as f64).unwrap();
            }
        }
        m
    }

    #[test]
    fn test_view_reads_offset_cells() {
        let m = counting(MatrixKind::Dense, 3, 4);
        let v = m.view(1, 1, 2, 2).unwrap();
        assert_eq!(v.shape(), (2, 2));
        assert_eq!(v.to_vec(), vec![5.0, 6.0, 9.0, 10.0]);
        assert_eq!(v.get(2, 0), None);

        let inner = v.part(1, 0, 1, 2).unwrap();
        assert_eq!(inner.to_vec(), vec![9.0, 10.0]);
        assert_eq!(v.clipped(1, 5).to_vec(), vec![5.0, 6.0]);
        assert_eq!(m.column_view(3).unwrap().to_vec(), vec![3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_view_out_of_bounds() {
        let m = counting(MatrixKind::Dense, 2, 2);
        assert!(matches!(
            m.view(1, 0, 2, 1),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(m.view(2, 2, 0, 0).is_ok());
        assert!(m.view(usize::MAX, 0, 2, 1).is_err());
    }

    #[test]
    fn test_writes_through_view_alias_source() {
        for kind in [MatrixKind::Dense, MatrixKind::Sparse] {
            let mut m = counting(kind, 3, 3);
            {
                let mut v = m.view_mut(1, 1, 2, 2).unwrap();
                v.set(0, 0, -1.0).unwrap();
                let mut corner = v.part_mut(1, 1, 1, 1).unwrap();
                corner.fill(42.0);
            }
            assert_eq!(m.get(1, 1), Some(-1.0));
            assert_eq!(m.get(2, 2), Some(42.0));
            assert_eq!(m.get(0, 0), Some(0.0));
        }
    }

    #[test]
    fn test_assign_between_kinds() {
        let src = counting(MatrixKind::Sparse, 2, 2);
        let mut dst: Matrix2D<f64> = Matrix2D::dense(3, 3);
        dst.view_mut(1, 1, 2, 2)
            .unwrap()
            .assign(src.as_view())
            .unwrap();
        assert_eq!(
            dst.to_rows(),
            vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 1.0], vec![0.0, 2.0, 3.0]]
        );

        let mut back: Matrix2D<f64> = Matrix2D::sparse(2, 2);
        back.assign(dst.view(1, 1, 2, 2).unwrap()).unwrap();
        assert_eq!(back, src);
        assert_eq!(back.cardinality(), 3);
    }

    #[test]
    fn test_assign_shape_mismatch() {
        let src: Matrix2D<f64> = Matrix2D::dense(2, 3);
        let mut dst: Matrix2D<f64> = Matrix2D::dense(3, 2);
        assert!(matches!(dst.assign(src.as_view()), Err(MatrixError::ShapeMismatch(_))));
    }

    #[test]
    fn test_assign_slice_to_column() {
        let mut m: Matrix2D<f32> = Matrix2D::dense(3, 2);
        m.column_view_mut(1).unwrap().assign_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.column_view(1).unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(m.row_view_mut(0).unwrap().assign_slice(&[1.0]).is_err());
    }

    #[test]
    fn test_to_matrix_copies() {
        let m = counting(MatrixKind::Sparse, 3, 3);
        let copy = m.view(0, 1, 2, 2).unwrap().to_matrix();
        assert_eq!(copy.kind(), MatrixKind::Sparse);
        assert_eq!(copy.to_rows(), vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
    }
}
