//! Text and serializable renderings of a matrix

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::kind::MatrixKind;
use crate::matrix::Matrix2D;

/// Plain-data copy of a matrix, suitable for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub kind: MatrixKind,
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell values
    pub data: Vec<Vec<f64>>,
}

impl<T: Element> Matrix2D<T> {
    pub fn snapshot(&self) -> MatrixSnapshot {
        let data = self
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(T::to_f64_lossless).collect())
            .collect();
        MatrixSnapshot {
            kind: self.kind(),
            rows: self.rows(),
            cols: self.cols(),
            data,
        }
    }
}

/// Header line followed by one line per row, cells right-aligned
impl<T: Element> fmt::Display for Matrix2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} {} matrix", self.rows(), self.cols(), self.kind())?;

        let cells: Vec<Vec<String>> = self
            .to_rows()
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

        for row in &cells {
            writeln!(f)?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
        }
        Ok(())
    }
}
