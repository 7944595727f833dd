//! Block grid shape inference
//!
//! A block grid is a row-major `[Vec<Option<B>>]` where `None` marks an
//! absent block. Every grid row must have the same length. Within a grid
//! column all present blocks of non-zero width must agree on that width, and
//! within a grid row all present blocks of non-zero height must agree on that
//! height. A line with no sized block contributes 0.

use std::borrow::Borrow;

use blockmat_core::{Element, Matrix2D, MatrixError, Result};

/// Per-line extents of a validated block grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockShape {
    heights: Vec<usize>,
    widths: Vec<usize>,
}

impl BlockShape {
    /// Validate `parts` and infer the height of each grid row and width of each grid column
    pub fn infer<T, B>(parts: &[Vec<Option<B>>]) -> Result<Self>
    where
        T: Element,
        B: Borrow<Matrix2D<T>>,
    {
        let grid_rows = parts.len();
        let grid_cols = parts.first().map_or(0, Vec::len);

        for (i, row) in parts.iter().enumerate() {
            if row.len() != grid_cols {
                return Err(MatrixError::shape_mismatch(format!(
                    "all rows of parts must have the same number of columns: \
                     row {} has {}, expected {}",
                    i,
                    row.len(),
                    grid_cols
                )));
            }
        }

        let mut widths = vec![0; grid_cols];
        for (j, max_width) in widths.iter_mut().enumerate() {
            for i in 0..grid_rows {
                if let Some(part) = block::<T, B>(parts, i, j) {
                    let width = part.cols();
                    if *max_width > 0 && width > 0 && width != *max_width {
                        return Err(MatrixError::shape_mismatch(format!(
                            "different number of columns in block column {}: {} != {}",
                            j, *max_width, width
                        )));
                    }
                    *max_width = (*max_width).max(width);
                }
            }
        }

        let mut heights = vec![0; grid_rows];
        for (i, max_height) in heights.iter_mut().enumerate() {
            for j in 0..grid_cols {
                if let Some(part) = block::<T, B>(parts, i, j) {
                    let height = part.rows();
                    if *max_height > 0 && height > 0 && height != *max_height {
                        return Err(MatrixError::shape_mismatch(format!(
                            "different number of rows in block row {}: {} != {}",
                            i, *max_height, height
                        )));
                    }
                    *max_height = (*max_height).max(height);
                }
            }
        }

        Ok(Self { heights, widths })
    }

    /// Height of each grid row
    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Width of each grid column
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn grid_rows(&self) -> usize {
        self.heights.len()
    }

    pub fn grid_cols(&self) -> usize {
        self.widths.len()
    }

    /// True when the grid has no rows or no columns
    pub fn is_empty_grid(&self) -> bool {
        self.heights.is_empty() || self.widths.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        if self.is_empty_grid() {
            return 0;
        }
        self.heights.iter().sum()
    }

    pub fn total_cols(&self) -> usize {
        if self.is_empty_grid() {
            return 0;
        }
        self.widths.iter().sum()
    }

    /// First matrix row covered by grid row `i`
    pub fn row_offset(&self, i: usize) -> usize {
        self.heights[..i].iter().sum()
    }

    /// First matrix column covered by grid column `j`
    pub fn col_offset(&self, j: usize) -> usize {
        self.widths[..j].iter().sum()
    }

    /// First matrix row covered by each grid row
    pub fn row_offsets(&self) -> Vec<usize> {
        offsets(&self.heights)
    }

    /// First matrix column covered by each grid column
    pub fn col_offsets(&self) -> Vec<usize> {
        offsets(&self.widths)
    }
}

fn block<T, B>(parts: &[Vec<Option<B>>], i: usize, j: usize) -> Option<&Matrix2D<T>>
where
    T: Element,
    B: Borrow<Matrix2D<T>>,
{
    parts[i][j].as_ref().map(Borrow::borrow)
}

fn offsets(extents: &[usize]) -> Vec<usize> {
    extents
        .iter()
        .scan(0, |start, extent| {
            let offset = *start;
            *start += extent;
            Some(offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: usize, cols: usize) -> Matrix2D<f64> {
        Matrix2D::dense(rows, cols)
    }

    #[test]
    fn test_infer_sparse_grid() {
        let (a, b, c, d) = (m(2, 2), m(4, 4), m(4, 3), m(2, 2));
        let parts = vec![
            vec![None, Some(&a), None],
            vec![Some(&b), None, Some(&c)],
            vec![None, Some(&d), None],
        ];
        let shape = BlockShape::infer::<f64, _>(&parts).unwrap();
        assert_eq!(shape.heights(), &[2, 4, 2]);
        assert_eq!(shape.widths(), &[4, 2, 3]);
        assert_eq!((shape.total_rows(), shape.total_cols()), (8, 9));
        assert_eq!(shape.row_offsets(), vec![0, 2, 6]);
        assert_eq!(shape.col_offsets(), vec![0, 4, 6]);
        assert_eq!((shape.row_offset(2), shape.col_offset(1)), (6, 4));
    }

    #[test]
    fn test_absent_line_contributes_zero() {
        let a = m(2, 3);
        let parts = vec![vec![Some(&a), None], vec![None, None]];
        let shape = BlockShape::infer::<f64, _>(&parts).unwrap();
        assert_eq!(shape.heights(), &[2, 0]);
        assert_eq!(shape.widths(), &[3, 0]);
        assert_eq!((shape.total_rows(), shape.total_cols()), (2, 3));
    }

    #[test]
    fn test_column_width_mismatch() {
        let (a, b) = (m(2, 2), m(4, 3));
        let parts = vec![vec![Some(&a)], vec![Some(&b)]];
        let err = BlockShape::infer::<f64, _>(&parts).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch(_)));
        assert!(err.to_string().contains("different number of columns"));
    }

    #[test]
    fn test_row_height_mismatch() {
        let (a, b) = (m(2, 2), m(3, 2));
        let parts = vec![vec![Some(&a), Some(&b)]];
        let err = BlockShape::infer::<f64, _>(&parts).unwrap_err();
        assert!(err.to_string().contains("different number of rows"));
    }

    #[test]
    fn test_ragged_grid() {
        let a = m(1, 1);
        let parts = vec![vec![Some(&a), None], vec![Some(&a)]];
        let err = BlockShape::infer::<f64, _>(&parts).unwrap_err();
        assert!(err.to_string().contains("same number of columns"));
    }

    #[test]
    fn test_zero_sized_blocks_do_not_conflict() {
        let (a, thin) = (m(2, 2), m(2, 0));
        let parts = vec![vec![Some(&a)], vec![Some(&thin)]];
        let shape = BlockShape::infer::<f64, _>(&parts).unwrap();
        assert_eq!(shape.widths(), &[2]);
        assert_eq!(shape.heights(), &[2, 2]);
    }

    #[test]
    fn test_empty_grid() {
        let none: Vec<Vec<Option<&Matrix2D<f64>>>> = vec![];
        let shape = BlockShape::infer::<f64, _>(&none).unwrap();
        assert!(shape.is_empty_grid());
        assert_eq!((shape.total_rows(), shape.total_cols()), (0, 0));

        let no_cols: Vec<Vec<Option<&Matrix2D<f64>>>> = vec![vec![], vec![]];
        let shape = BlockShape::infer::<f64, _>(&no_cols).unwrap();
        assert_eq!((shape.total_rows(), shape.total_cols()), (0, 0));
    }
}
