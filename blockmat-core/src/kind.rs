//! Storage strategy selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Which storage a factory instantiates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    /// Contiguous column-major array
    #[default]
    Dense,
    /// Hash map of non-zero cells
    Sparse,
}

impl MatrixKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixKind::Dense => "dense",
            MatrixKind::Sparse => "sparse",
        }
    }
}

impl FromStr for MatrixKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dense" => Ok(MatrixKind::Dense),
            "sparse" => Ok(MatrixKind::Sparse),
            other => Err(MatrixError::invalid_argument(
                "kind",
                format!("expected 'dense' or 'sparse', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
