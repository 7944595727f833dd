//! Debug fills and tiling

use blockmat_core::{Element, Matrix2D};

use crate::factory::Factory2D;

impl<T: Element> Factory2D<T> {
    /// Cells `0, 1, 2, ...` in row-major order
    ///
    /// Numbering starts at 0, so the last cell holds `rows * cols - 1`.
    pub fn ascending(&self, rows: usize, cols: usize) -> Matrix2D<T> {
        let mut matrix = self.make(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                matrix.set_cell(row, col, T::from_index(row * cols + col));
            }
        }
        matrix
    }

    /// Cells `rows*cols - 1, ..., 1, 0` in row-major order
    pub fn descending(&self, rows: usize, cols: usize) -> Matrix2D<T> {
        let last = (rows * cols).saturating_sub(1);
        let mut matrix = self.make(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                matrix.set_cell(row, col, T::from_index(last - (row * cols + col)));
            }
        }
        matrix
    }

    /// Tile `a` `row_repeat` times down and `col_repeat` times across
    pub fn repeat(
        &self,
        a: &Matrix2D<T>,
        row_repeat: usize,
        col_repeat: usize,
    ) -> Matrix2D<T> {
        let (r, c) = a.shape();
        let mut matrix = self.make(r * row_repeat, c * col_repeat);
        for i in 0..row_repeat {
            for j in 0..col_repeat {
                matrix.paste(r * i, c * j, a.as_view());
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        let f: Factory2D<f64> = Factory2D::dense();
        assert_eq!(
            f.ascending(2, 3).to_rows(),
            vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]
        );
    }

    #[test]
    fn test_descending() {
        let f: Factory2D<f32> = Factory2D::sparse();
        let m = f.descending(2, 3);
        assert_eq!(m.to_rows(), vec![vec![5.0, 4.0, 3.0], vec![2.0, 1.0, 0.0]]);
        assert_eq!(m.cardinality(), 5);
        assert_eq!(f.descending(0, 4).shape(), (0, 4));
    }

    #[test]
    fn test_repeat() {
        let f: Factory2D<f64> = Factory2D::dense();
        let a = f.ascending(2, 2);
        let m = f.repeat(&a, 2, 3);
        assert_eq!(m.shape(), (4, 6));
        assert_eq!(
            m.to_rows(),
            vec![
                vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
                vec![2.0, 3.0, 2.0, 3.0, 2.0, 3.0],
                vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
                vec![2.0, 3.0, 2.0, 3.0, 2.0, 3.0],
            ]
        );
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.view(2 * i, 2 * j, 2, 2).unwrap(), a.as_view());
            }
        }
    }

    #[test]
    fn test_repeat_zero_times() {
        let f: Factory2D<f64> = Factory2D::sparse();
        let a = f.ascending(2, 2);
        assert_eq!(f.repeat(&a, 0, 3).shape(), (0, 6));
    }
}
