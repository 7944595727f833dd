//! Random fills and sparse sampling

use blockmat_core::{Element, Matrix2D, MatrixError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::factory::Factory2D;

/// Seed used by [`Factory2D::sample`] so repeated calls pick the same cells
pub const SAMPLE_SEED: u64 = 4357;

/// Fractions this far outside [0, 1] are clamped instead of rejected
pub const FRACTION_TOLERANCE: f64 = 1e-5;

impl<T: Element> Factory2D<T> {
    /// Cells drawn uniformly from (0, 1) using thread-local entropy
    pub fn random(&self, rows: usize, cols: usize) -> Matrix2D<T> {
        self.random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Like [`random`](Self::random) but reproducible for a given seed
    pub fn random_seeded(&self, rows: usize, cols: usize, seed: u64) -> Matrix2D<T> {
        self.random_with(rows, cols, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    fn random_with<R: Rng + ?Sized>(&self, rows: usize, cols: usize, rng: &mut R) -> Matrix2D<T> {
        let mut matrix = self.make(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                matrix.set_cell(row, col, T::open_unit(rng));
            }
        }
        matrix
    }

    /// Zero `matrix`, then set `round(size * fraction)` cells chosen
    /// uniformly without replacement to `value`.
    ///
    /// Uses [`SAMPLE_SEED`], so the same call always picks the same cells.
    pub fn sample(&self, matrix: &mut Matrix2D<T>, value: T, fraction: f64) -> Result<()> {
        self.sample_seeded(matrix, value, fraction, SAMPLE_SEED)
    }

    /// New `rows x cols` matrix filled by [`sample`](Self::sample)
    pub fn sample_new(
        &self,
        rows: usize,
        cols: usize,
        value: T,
        fraction: f64,
    ) -> Result<Matrix2D<T>> {
        let mut matrix = self.make(rows, cols);
        self.sample(&mut matrix, value, fraction)?;
        Ok(matrix)
    }

    /// [`sample`](Self::sample) with an explicit seed
    pub fn sample_seeded(
        &self,
        matrix: &mut Matrix2D<T>,
        value: T,
        fraction: f64,
        seed: u64,
    ) -> Result<()> {
        let fraction = checked_fraction(fraction)?;
        let size = matrix.size().ok_or_else(|| {
            MatrixError::invalid_argument(
                "matrix",
                format!("{}x{} cells cannot be counted", matrix.rows(), matrix.cols()),
            )
        })?;
        let mut remaining = (size as f64 * fraction).round() as usize;
        debug!(rows = matrix.rows(), cols = matrix.cols(), picks = remaining, "sample");

        matrix.fill(T::zero());

        // Selection sampling: visit cells in row-major order and keep each
        // with probability remaining / unvisited
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cols = matrix.cols();
        for index in 0..size {
            if remaining == 0 {
                break;
            }
            if rng.gen_range(0..size - index) < remaining {
                matrix.set_cell(index / cols, index % cols, value);
                remaining -= 1;
            }
        }
        Ok(())
    }
}

fn checked_fraction(fraction: f64) -> Result<f64> {
    if fraction.is_nan() || fraction < -FRACTION_TOLERANCE || fraction > 1.0 + FRACTION_TOLERANCE {
        return Err(MatrixError::invalid_argument(
            "fraction",
            format!("{} is not within [0, 1]", fraction),
        ));
    }
    let clamped = fraction.clamp(0.0, 1.0);
    if clamped != fraction {
        warn!(fraction, clamped, "sample fraction clamped");
    }
    Ok(clamped)
}
