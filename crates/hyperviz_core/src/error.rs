//! Geometry error types
//!
//! Every error is fatal to the single build that raised it. Builds are
//! side-effect free, so callers recover by retrying with corrected inputs.

use std::fmt;
use hyperviz_math::{Axis, Dimension};

/// Error type for polytope generation, rotation and pipeline builds
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Shape identifier not recognised
    UnknownShape(String),
    /// Rotation plane name not recognised
    UnknownPlane(String),
    /// Dimensionality of two inputs disagrees
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },
    /// Axis does not exist in the dimension it was used with
    InvalidAxis {
        axis: Axis,
        dimension: Dimension,
    },
    /// Custom polytope data is inconsistent (bad index, duplicate edge, ...)
    InvalidTopology(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UnknownShape(name) => write!(f, "Unknown shape type: '{}'", name),
            GeometryError::UnknownPlane(name) => write!(f, "Unknown rotation plane: '{}'", name),
            GeometryError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {}, found {}", expected, found)
            }
            GeometryError::InvalidAxis { axis, dimension } => {
                write!(f, "Axis '{}' does not exist in {}", axis, dimension)
            }
            GeometryError::InvalidTopology(msg) => write!(f, "Invalid topology: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}
