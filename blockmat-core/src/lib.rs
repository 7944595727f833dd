//! blockmat Core - Fundamental types
//!
//! This crate provides the matrix capability consumed by the block factory:
//! - `Element`: cell type (`f32` or `f64`)
//! - `Matrix2D`: dense (nalgebra-backed) or sparse (hash-backed) storage
//! - `MatrixView` / `MatrixViewMut`: sub-rectangles sharing their source's storage
//! - `MatrixError`: structured errors with machine-readable codes

mod element;
mod error;
mod format;
mod kind;
mod matrix;
mod view;

pub use element::Element;
pub use error::{codes, ErrorReport, MatrixError, Result};
pub use format::MatrixSnapshot;
pub use kind::MatrixKind;
pub use matrix::{DenseMatrix, Matrix2D, SparseMatrix};
pub use view::{MatrixView, MatrixViewMut};

/// 1-D results (diagonals) use nalgebra's column vector
pub type Vector<T> = nalgebra::DVector<T>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Element, Matrix2D, MatrixError, MatrixKind, MatrixView, MatrixViewMut, Result, Vector,
    };
}
