//! Coordinate axes and supported dimensionalities

use serde::{Serialize, Deserialize};
use std::fmt;

/// A coordinate axis
///
/// Axes are ordered x < y < z < w < v. That order defines both the storage
/// order of vector components and the canonical order of rotation planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
    /// The 4th spatial dimension (ana/kata)
    W,
    /// The 5th spatial dimension
    V,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Z, Axis::W, Axis::V];

    /// Component index of this axis
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axis for a component index, if one exists
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase label of the axis
    pub const fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::W => 'w',
            Axis::V => 'v',
        }
    }

    /// Parse a single-letter axis label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            "w" => Some(Axis::W),
            "v" => Some(Axis::V),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Dimensionality of a vertex set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Four,
    Five,
}

impl Dimension {
    /// Number of coordinates
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Dimension::Four => 4,
            Dimension::Five => 5,
        }
    }

    /// Create from a coordinate count (only 4 and 5 are supported)
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            4 => Some(Dimension::Four),
            5 => Some(Dimension::Five),
            _ => None,
        }
    }

    /// Axes present in this dimension, in canonical order
    pub fn axes(self) -> &'static [Axis] {
        &Axis::ALL[..self.count()]
    }

    /// Whether the axis exists in this dimension
    #[inline]
    pub fn has_axis(self, axis: Axis) -> bool {
        axis.index() < self.count()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.count())
    }
}
