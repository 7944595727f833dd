//! Factory entry point and basic matrix construction

use std::marker::PhantomData;

use blockmat_core::{Element, Matrix2D, MatrixError, MatrixKind, Result};

/// Builds matrices of one storage kind and composes them into block matrices.
///
/// A factory is just its [`MatrixKind`]: every matrix it allocates, whether
/// from `make` or as the result of a composition, uses that storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factory2D<T: Element> {
    kind: MatrixKind,
    _element: PhantomData<fn() -> T>,
}

impl<T: Element> Default for Factory2D<T> {
    fn default() -> Self {
        Self::new(MatrixKind::default())
    }
}

impl<T: Element> Factory2D<T> {
    pub const fn new(kind: MatrixKind) -> Self {
        Self {
            kind,
            _element: PhantomData,
        }
    }

    /// Factory producing dense (array-backed) matrices
    pub const fn dense() -> Self {
        Self::new(MatrixKind::Dense)
    }

    /// Factory producing sparse (hash-backed) matrices
    pub const fn sparse() -> Self {
        Self::new(MatrixKind::Sparse)
    }

    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    // ============ make ============

    /// Zero-filled `rows x cols` matrix
    pub fn make(&self, rows: usize, cols: usize) -> Matrix2D<T> {
        Matrix2D::new(self.kind, rows, cols)
    }

    /// `rows x cols` matrix with every cell set to `initial`
    pub fn make_filled(&self, rows: usize, cols: usize, initial: T) -> Matrix2D<T> {
        let mut matrix = self.make(rows, cols);
        if initial != T::zero() {
            matrix.fill(initial);
        }
        matrix
    }

    /// Matrix from row-major nested rows; every row must have the same length
    pub fn make_from_rows(&self, values: &[Vec<T>]) -> Result<Matrix2D<T>> {
        let cols = values.first().map_or(0, Vec::len);
        for (i, row) in values.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::shape_mismatch(format!(
                    "all rows must have the same number of columns: row {} has {}, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        let mut matrix = self.make(values.len(), cols);
        for (i, row) in values.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                matrix.set_cell(i, j, *value);
            }
        }
        Ok(matrix)
    }

    /// Matrix from a flat column-major array: `values[row + col * rows]`
    pub fn make_column_major(&self, values: &[T], rows: usize) -> Result<Matrix2D<T>> {
        let cols = if rows != 0 { values.len() / rows } else { 0 };
        if rows * cols != values.len() {
            return Err(MatrixError::invalid_argument(
                "values",
                format!("array length {} must be a multiple of rows ({})", values.len(), rows),
            ));
        }

        let mut matrix = self.make(rows, cols);
        for col in 0..cols {
            for row in 0..rows {
                matrix.set_cell(row, col, values[row + col * rows]);
            }
        }
        Ok(matrix)
    }
}
