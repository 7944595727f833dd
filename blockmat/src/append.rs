//! Concatenation along rows or columns
//!
//! Operands are first cut to their shared extent along the orthogonal
//! dimension: the larger one is truncated, nothing is padded.

use blockmat_core::{Element, Matrix2D};

use crate::factory::Factory2D;

impl<T: Element> Factory2D<T> {
    /// `[A b]`: append `b` as a new last column
    pub fn append_column(&self, a: &Matrix2D<T>, b: &[T]) -> Matrix2D<T> {
        let rows = a.rows().min(b.len());
        let ac = a.cols();

        let mut matrix = self.make(rows, ac + 1);
        matrix.paste(0, 0, a.as_view().clipped(rows, ac));
        for (row, value) in b[..rows].iter().enumerate() {
            matrix.set_cell(row, ac, *value);
        }
        matrix
    }

    /// `[A B]`: place `b` to the right of `a`
    pub fn append_columns(&self, a: &Matrix2D<T>, b: &Matrix2D<T>) -> Matrix2D<T> {
        let rows = a.rows().min(b.rows());

        let mut matrix = self.make(rows, a.cols() + b.cols());
        matrix.paste(0, 0, a.as_view().clipped(rows, a.cols()));
        matrix.paste(0, a.cols(), b.as_view().clipped(rows, b.cols()));
        matrix
    }

    /// `[A; b]`: append `b` as a new last row
    pub fn append_row(&self, a: &Matrix2D<T>, b: &[T]) -> Matrix2D<T> {
        let cols = a.cols().min(b.len());
        let ar = a.rows();

        let mut matrix = self.make(ar + 1, cols);
        matrix.paste(0, 0, a.as_view().clipped(ar, cols));
        for (col, value) in b[..cols].iter().enumerate() {
            matrix.set_cell(ar, col, *value);
        }
        matrix
    }

    /// `[A; B]`: place `b` below `a`
    pub fn append_rows(&self, a: &Matrix2D<T>, b: &Matrix2D<T>) -> Matrix2D<T> {
        let cols = a.cols().min(b.cols());

        let mut matrix = self.make(a.rows() + b.rows(), cols);
        matrix.paste(0, 0, a.as_view().clipped(a.rows(), cols));
        matrix.paste(a.rows(), 0, b.as_view().clipped(b.rows(), cols));
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f() -> Factory2D<f64> {
        Factory2D::dense()
    }

    #[test]
    fn test_append_column() {
        let a = f().ascending(2, 3);
        let m = f().append_column(&a, &[6.0, 8.0]);
        assert_eq!(m.to_rows(), vec![vec![0.0, 1.0, 2.0, 6.0], vec![3.0, 4.0, 5.0, 8.0]]);
    }

    #[test]
    fn test_append_column_truncates_long_vector() {
        let a = f().ascending(2, 2);
        let m = f().append_column(&a, &[7.0, 8.0, 9.0, 10.0]);
        assert_eq!(m.rows(), a.rows());
        assert_eq!(m.to_rows(), vec![vec![0.0, 1.0, 7.0], vec![2.0, 3.0, 8.0]]);
    }

    #[test]
    fn test_append_column_truncates_matrix() {
        let a = f().ascending(3, 2);
        let m = f().append_column(&a, &[9.0]);
        assert_eq!(m.to_rows(), vec![vec![0.0, 1.0, 9.0]]);
    }

    #[test]
    fn test_append_columns() {
        let a = f().ascending(2, 3);
        let b = f().make_from_rows(&[vec![6.0, 7.0], vec![8.0, 9.0], vec![1.0, 1.0]]).unwrap();
        let m = f().append_columns(&a, &b);
        assert_eq!(
            m.to_rows(),
            vec![vec![0.0, 1.0, 2.0, 6.0, 7.0], vec![3.0, 4.0, 5.0, 8.0, 9.0]]
        );
    }

    #[test]
    fn test_append_row() {
        let sparse: Factory2D<f64> = Factory2D::sparse();
        let a = sparse.ascending(2, 2);
        let m = sparse.append_row(&a, &[5.0]);
        assert_eq!(m.to_rows(), vec![vec![0.0], vec![2.0], vec![5.0]]);
    }

    #[test]
    fn test_append_rows() {
        let a = f().ascending(1, 3);
        let b = f().make_filled(2, 4, 1.0);
        let m = f().append_rows(&a, &b);
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.row_view(2).unwrap().to_vec(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_append_empty_vector() {
        let a = f().ascending(2, 2);
        let m = f().append_column(&a, &[]);
        assert_eq!(m.shape(), (0, 3));
    }
}
