//! Cell element types

use std::fmt;

use nalgebra::Scalar;
use num_traits::Float;
use rand::distributions::Open01;
use rand::Rng;

/// Floating-point cell type stored by every matrix.
///
/// Implemented for `f32` and `f64`.
pub trait Element: Scalar + Float + Default + fmt::Display + Send + Sync {
    /// Exact conversion of a small cell counter (used by debug fills)
    fn from_index(index: usize) -> Self;

    /// Widen to `f64` for reporting
    fn to_f64_lossless(self) -> f64;

    /// Draw from the open interval (0, 1)
    fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Element for f32 {
    fn from_index(index: usize) -> Self {
        index as f32
    }

    fn to_f64_lossless(self) -> f64 {
        f64::from(self)
    }

    fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(Open01)
    }
}

impl Element for f64 {
    fn from_index(index: usize) -> Self {
        index as f64
    }

    fn to_f64_lossless(self) -> f64 {
        self
    }

    fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(Open01)
    }
}
