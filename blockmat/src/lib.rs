//! blockmat - Block Matrix Factory
//!
//! Builds dense or sparse 2-D matrices and composes them into block matrices:
//! - Construction (make, make_filled, make_from_rows, make_column_major)
//! - Block layout (compose, decompose, with shape inference over a grid of optional blocks)
//! - Diagonals (identity, diagonal, diagonal_of, compose_diagonal, compose_bidiagonal)
//! - Concatenation (append_column, append_columns, append_row, append_rows)
//! - Debug fills (ascending, descending, repeat)
//! - Randomization (random, random_seeded, sample, sample_new, sample_seeded)
//!
//! Every builder allocates through [`Factory2D::make`], so the factory's
//! [`MatrixKind`] decides the storage of every result.

mod append;
mod block;
mod diagonal;
mod factory;
mod fill;
mod random;
mod shape;

pub use factory::Factory2D;
pub use random::{FRACTION_TOLERANCE, SAMPLE_SEED};
pub use shape::BlockShape;

pub use blockmat_core::{
    Element, ErrorReport, Matrix2D, MatrixError, MatrixKind, MatrixSnapshot, MatrixView,
    MatrixViewMut, Result, Vector,
};

/// Dense `f64` factory, the common case
pub type DoubleFactory2D = Factory2D<f64>;

/// Dense or sparse `f32` factory
pub type FloatFactory2D = Factory2D<f32>;
