//! Dense and sparse 2-D matrix storage

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::kind::MatrixKind;
use crate::view::{MatrixView, MatrixViewMut, Window};

/// A 2-D grid of cells backed by either dense or sparse storage
#[derive(Debug, Clone)]
pub enum Matrix2D<T: Element> {
    /// Column-major array of every cell
    Dense(DenseMatrix<T>),
    /// Only non-zero cells are stored
    Sparse(SparseMatrix<T>),
}

/// Matrix backed by an nalgebra `DMatrix`
#[derive(Debug, Clone)]
pub struct DenseMatrix<T: Element> {
    pub data: DMatrix<T>,
}

/// Matrix backed by a map from `(row, col)` to value.
///
/// Zero is never stored: writing zero removes the entry.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T: Element> {
    rows: usize,
    cols: usize,
    cells: HashMap<(usize, usize), T>,
}

impl<T: Element> SparseMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: HashMap::new(),
        }
    }

    fn index(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        (row, col)
    }

    fn get(&self, row: usize, col: usize) -> T {
        self.cells
            .get(&self.index(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        let index = self.index(row, col);
        if value == T::zero() {
            self.cells.remove(&index);
        } else {
            self.cells.insert(index, value);
        }
    }

    fn fill(&mut self, value: T) {
        self.cells.clear();
        if value != T::zero() {
            let cols = self.cols;
            let cells = (0..self.rows)
                .flat_map(|row| (0..cols).map(move |col| ((row, col), value)));
            self.cells.extend(cells);
        }
    }

    /// Number of stored (non-zero) cells
    pub fn stored(&self) -> usize {
        self.cells.len()
    }
}

impl<T: Element> Matrix2D<T> {
    /// Allocate a zero-filled matrix of the given kind
    pub fn new(kind: MatrixKind, rows: usize, cols: usize) -> Self {
        match kind {
            MatrixKind::Dense => Self::dense(rows, cols),
            MatrixKind::Sparse => Self::sparse(rows, cols),
        }
    }

    pub fn dense(rows: usize, cols: usize) -> Self {
        Matrix2D::Dense(DenseMatrix {
            data: DMatrix::zeros(rows, cols),
        })
    }

    pub fn sparse(rows: usize, cols: usize) -> Self {
        Matrix2D::Sparse(SparseMatrix::new(rows, cols))
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(data: DMatrix<T>) -> Self {
        Matrix2D::Dense(DenseMatrix { data })
    }

    pub fn kind(&self) -> MatrixKind {
        match self {
            Matrix2D::Dense(_) => MatrixKind::Dense,
            Matrix2D::Sparse(_) => MatrixKind::Sparse,
        }
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        match self {
            Matrix2D::Dense(m) => m.data.nrows(),
            Matrix2D::Sparse(m) => m.rows,
        }
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        match self {
            Matrix2D::Dense(m) => m.data.ncols(),
            Matrix2D::Sparse(m) => m.cols,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of cells, or `None` if it does not fit in `usize`
    pub fn size(&self) -> Option<usize> {
        self.rows().checked_mul(self.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows() && col < self.cols() {
            Some(self.cell(row, col))
        } else {
            None
        }
    }

    /// Set element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.set_cell(row, col, value);
        Ok(())
    }

    /// Read a cell already known to be in bounds
    ///
    /// # Panics
    /// If `row >= rows()` or `col >= cols()`.
    pub fn cell(&self, row: usize, col: usize) -> T {
        match self {
            Matrix2D::Dense(m) => m.data[(row, col)],
            Matrix2D::Sparse(m) => m.get(row, col),
        }
    }

    /// Write a cell already known to be in bounds
    ///
    /// # Panics
    /// If `row >= rows()` or `col >= cols()`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: T) {
        match self {
            Matrix2D::Dense(m) => m.data[(row, col)] = value,
            Matrix2D::Sparse(m) => m.set(row, col, value),
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        match self {
            Matrix2D::Dense(m) => m.data.fill(value),
            Matrix2D::Sparse(m) => m.fill(value),
        }
    }

    /// Copy every cell from a same-shaped view
    pub fn assign(&mut self, source: MatrixView<'_, T>) -> Result<()> {
        self.as_view_mut().assign(source)
    }

    /// Copy `source` into the block whose top-left cell is (row, col)
    ///
    /// # Panics
    /// If the block does not fit inside this matrix.
    pub fn paste(&mut self, row: usize, col: usize, source: MatrixView<'_, T>) {
        let (rows, cols) = source.shape();
        assert!(
            row + rows <= self.rows() && col + cols <= self.cols(),
            "{}x{} block at ({}, {}) does not fit a {}x{} matrix",
            rows,
            cols,
            row,
            col,
            self.rows(),
            self.cols()
        );
        MatrixViewMut::new(self, Window::at(row, col, rows, cols)).copy_cells(source);
    }

    // ========== Views ==========

    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::new(self, Window::full(self.rows(), self.cols()))
    }

    pub fn as_view_mut(&mut self) -> MatrixViewMut<'_, T> {
        let window = Window::full(self.rows(), self.cols());
        MatrixViewMut::new(self, window)
    }

    /// Rectangular window starting at (row, col), sharing this matrix's storage
    pub fn view(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixView<'_, T>> {
        self.as_view().part(row, col, rows, cols)
    }

    /// Mutable rectangular window starting at (row, col)
    pub fn view_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatrixViewMut<'_, T>> {
        let window = Window::full(self.rows(), self.cols()).part(row, col, rows, cols)?;
        Ok(MatrixViewMut::new(self, window))
    }

    pub fn row_view(&self, row: usize) -> Result<MatrixView<'_, T>> {
        self.view(row, 0, 1, self.cols())
    }

    pub fn row_view_mut(&mut self, row: usize) -> Result<MatrixViewMut<'_, T>> {
        let cols = self.cols();
        self.view_mut(row, 0, 1, cols)
    }

    pub fn column_view(&self, col: usize) -> Result<MatrixView<'_, T>> {
        self.view(0, col, self.rows(), 1)
    }

    pub fn column_view_mut(&mut self, col: usize) -> Result<MatrixViewMut<'_, T>> {
        let rows = self.rows();
        self.view_mut(0, col, rows, 1)
    }

    // ========== Conversions ==========

    /// Number of non-zero cells
    pub fn cardinality(&self) -> usize {
        match self {
            Matrix2D::Dense(m) => m.data.iter().filter(|v| **v != T::zero()).count(),
            Matrix2D::Sparse(m) => m.stored(),
        }
    }

    /// Copy into an nalgebra DMatrix
    pub fn to_dmatrix(&self) -> DMatrix<T> {
        match self {
            Matrix2D::Dense(m) => m.data.clone(),
            Matrix2D::Sparse(m) => DMatrix::from_fn(m.rows, m.cols, |i, j| m.get(i, j)),
        }
    }

    /// Copy into row-major nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.cell(i, j)).collect())
            .collect()
    }

    /// Get diagonal as a vector of length `min(rows, cols)`
    pub fn diagonal(&self) -> DVector<T> {
        let n = self.rows().min(self.cols());
        match self {
            Matrix2D::Dense(m) => m.data.view((0, 0), (n, n)).diagonal(),
            Matrix2D::Sparse(m) => DVector::from_fn(n, |i, _| m.get(i, i)),
        }
    }
}

/// Matrices compare equal when their shapes and cells agree, whatever the storage
impl<T: Element> PartialEq for Matrix2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.as_view() == other.as_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let m: Matrix2D<f64> = Matrix2D::new(MatrixKind::Dense, 2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.kind(), MatrixKind::Dense);
        assert_eq!(m.get(1, 2), Some(0.0));
        assert_eq!(m.get(2, 0), None);

        let s: Matrix2D<f32> = Matrix2D::new(MatrixKind::Sparse, 4, 1);
        assert_eq!(s.shape(), (4, 1));
        assert_eq!(s.kind(), MatrixKind::Sparse);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut m: Matrix2D<f64> = Matrix2D::dense(2, 2);
        assert!(m.set(1, 1, 4.0).is_ok());
        assert!(matches!(
            m.set(2, 0, 1.0),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 0, rows: 2, cols: 2 })
        ));
    }

    #[test]
    fn test_sparse_drops_zero_writes() {
        let mut m: Matrix2D<f64> = Matrix2D::sparse(3, 3);
        m.set(0, 1, 2.0).unwrap();
        m.set(2, 2, 5.0).unwrap();
        assert_eq!(m.cardinality(), 2);

        m.set(0, 1, 0.0).unwrap();
        assert_eq!(m.cardinality(), 1);
        assert_eq!(m.get(0, 1), Some(0.0));

        m.fill(0.0);
        assert_eq!(m.cardinality(), 0);
        m.fill(1.5);
        assert_eq!(m.cardinality(), 9);
    }

    #[test]
    fn test_sparse_huge_extents_keep_cells_apart() {
        let mut m: Matrix2D<f64> = Matrix2D::sparse(1 << 40, 1 << 40);
        m.set(0, 0, 1.0).unwrap();
        m.set(1 << 24, 0, 2.0).unwrap();
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(1 << 24, 0), Some(2.0));
        assert_eq!(m.cardinality(), 2);
        assert_eq!(m.size(), None);
        assert!(!m.is_empty());
        assert_eq!(Matrix2D::<f64>::sparse(3, 4).size(), Some(12));
    }

    #[test]
    fn test_equality_ignores_storage() {
        let mut d: Matrix2D<f64> = Matrix2D::dense(2, 2);
        let mut s: Matrix2D<f64> = Matrix2D::sparse(2, 2);
        d.set(1, 0, 3.0).unwrap();
        s.set(1, 0, 3.0).unwrap();
        assert_eq!(d, s);

        s.set(0, 0, 1.0).unwrap();
        assert_ne!(d, s);
        assert_ne!(d, Matrix2D::dense(2, 3));
    }

    #[test]
    fn test_diagonal_non_square() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = Matrix2D::from_dmatrix(DMatrix::from_row_slice(2, 3, &values));
        assert_eq!(m.diagonal().as_slice(), &[1.0, 5.0]);

        let tall = Matrix2D::from_dmatrix(DMatrix::from_row_slice(3, 1, &[4.0, 5.0, 6.0]));
        assert_eq!(tall.diagonal().as_slice(), &[4.0]);

        let mut s: Matrix2D<f64> = Matrix2D::sparse(3, 2);
        s.set(1, 1, 7.0).unwrap();
        assert_eq!(s.diagonal().as_slice(), &[0.0, 7.0]);
    }

    #[test]
    fn test_paste() {
        let mut src: Matrix2D<f64> = Matrix2D::sparse(2, 2);
        src.set(0, 0, 1.0).unwrap();
        src.set(1, 1, 2.0).unwrap();

        let mut m: Matrix2D<f64> = Matrix2D::dense(3, 4);
        m.paste(1, 2, src.as_view());
        assert_eq!(
            m.to_rows(),
            vec![vec![0.0, 0.0, 0.0, 0.0], vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0, 2.0]]
        );
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_paste_outside_panics() {
        let src: Matrix2D<f64> = Matrix2D::dense(2, 2);
        let mut m: Matrix2D<f64> = Matrix2D::dense(2, 2);
        m.paste(1, 0, src.as_view());
    }

    #[test]
    fn test_to_rows_and_dmatrix() {
        let mut s: Matrix2D<f64> = Matrix2D::sparse(2, 2);
        s.set(0, 1, 1.0).unwrap();
        s.set(1, 0, 2.0).unwrap();
        assert_eq!(s.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(s.to_dmatrix()[(1, 0)], 2.0);
    }
}
