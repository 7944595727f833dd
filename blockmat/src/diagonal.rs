//! Diagonal builders and block-diagonal sums

use blockmat_core::{Element, Matrix2D, Vector};

use crate::factory::Factory2D;

impl<T: Element> Factory2D<T> {
    /// n x n identity
    pub fn identity(&self, n: usize) -> Matrix2D<T> {
        let mut matrix = self.make(n, n);
        for i in 0..n {
            matrix.set_cell(i, i, T::one());
        }
        matrix
    }

    /// Square matrix with `values` on the main diagonal
    pub fn diagonal(&self, values: &[T]) -> Matrix2D<T> {
        let n = values.len();
        let mut matrix = self.make(n, n);
        for (i, value) in values.iter().enumerate() {
            matrix.set_cell(i, i, *value);
        }
        matrix
    }

    /// Main diagonal of `a`, of length `min(rows, cols)`
    pub fn diagonal_of(&self, a: &Matrix2D<T>) -> Vector<T> {
        a.diagonal()
    }

    /// Direct sum `[A 0; 0 B]`
    pub fn compose_diagonal(&self, a: &Matrix2D<T>, b: &Matrix2D<T>) -> Matrix2D<T> {
        let (ar, ac) = a.shape();
        let (br, bc) = b.shape();

        let mut sum = self.make(ar + br, ac + bc);
        sum.paste(0, 0, a.as_view());
        sum.paste(ar, ac, b.as_view());
        sum
    }

    /// Direct sum `[A 0 0; 0 B 0; 0 0 C]`
    pub fn compose_diagonal3(
        &self,
        a: &Matrix2D<T>,
        b: &Matrix2D<T>,
        c: &Matrix2D<T>,
    ) -> Matrix2D<T> {
        let mut diag = self.make(a.rows() + b.rows() + c.rows(), a.cols() + b.cols() + c.cols());
        diag.paste(0, 0, a.as_view());
        diag.paste(a.rows(), a.cols(), b.as_view());
        diag.paste(a.rows() + b.rows(), a.cols() + b.cols(), c.as_view());
        diag
    }

    /// Like [`compose_diagonal`](Self::compose_diagonal) but `b` starts on the
    /// last row of `a`, so the two share one row at the seam.
    ///
    /// The result has `a.rows() + b.rows() - 1` rows. `b` is written after
    /// `a`; when `a` has no rows there is no seam and `b` starts at row 0.
    pub fn compose_bidiagonal(&self, a: &Matrix2D<T>, b: &Matrix2D<T>) -> Matrix2D<T> {
        let (ar, ac) = a.shape();
        let (br, bc) = b.shape();
        let seam = ar.saturating_sub(1);

        let mut sum = self.make((seam + br).max(ar), ac + bc);
        sum.paste(0, 0, a.as_view());
        sum.paste(seam, ac, b.as_view());
        sum
    }
}
