//! Structured errors for matrix construction
//!
//! Every failure is detected before any cell is written, so a returned
//! error always means the operation left its inputs untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
    pub const SIZE_MISMATCH: &str = "SIZE_MISMATCH";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INDEX_OUT_OF_BOUNDS: &str = "INDEX_OUT_OF_BOUNDS";
}

/// Result type alias using [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix storage and the block factory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Block grid is not rectangular, or blocks in one grid line disagree
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Target matrix is smaller than the block layout requires
    #[error(
        "Size mismatch: parts larger than matrix \
         (need {needed_rows}x{needed_cols}, got {rows}x{cols})"
    )]
    SizeMismatch {
        needed_rows: usize,
        needed_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Argument outside its valid domain
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Cell or window outside the matrix bounds
    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    // ========== Common Error Constructors ==========

    pub fn shape_mismatch(details: impl Into<String>) -> Self {
        Self::ShapeMismatch(details.into())
    }

    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch(_) => codes::SHAPE_MISMATCH,
            Self::SizeMismatch { .. } => codes::SIZE_MISMATCH,
            Self::InvalidArgument { .. } => codes::INVALID_ARGUMENT,
            Self::IndexOutOfBounds { .. } => codes::INDEX_OUT_OF_BOUNDS,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::ShapeMismatch(_) => {
                "Blocks sharing a grid row need equal heights, \
                 blocks sharing a grid column equal widths"
            }
            Self::SizeMismatch { .. } => {
                "Decompose from a matrix at least as large as the composed parts"
            }
            Self::InvalidArgument { .. } => "Check the argument against the documented range",
            Self::IndexOutOfBounds { .. } => "Indices are 0-based and must be below rows/cols",
        }
    }

    /// Serializable form for reporting
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: Some(self.suggestion().to_string()),
        }
    }
}

/// Structured error record, suitable for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<MatrixError> for ErrorReport {
    fn from(err: MatrixError) -> Self {
        err.report()
    }
}
