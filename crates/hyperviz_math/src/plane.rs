//! Rotation planes
//!
//! Rotations in N dimensions happen in coordinate planes rather than around
//! axes. 4D has 6 planes (XY, XZ, XW, YZ, YW, ZW); 5D adds the four planes
//! involving V for a total of 10.

use serde::{Serialize, Deserialize};
use std::fmt;
use crate::{Axis, Dimension};

/// A coordinate plane spanned by two axes
///
/// Variants are declared in canonical order: lexicographic over the axis
/// order x < y < z < w < v, first axis then second. Rotations are always
/// applied in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - yaw in the 3D subspace
    XY,
    /// XZ plane - pitch in the 3D subspace
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// XV plane (5D only)
    XV,
    /// YZ plane - roll in the 3D subspace
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// YV plane (5D only)
    YV,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
    /// ZV plane (5D only)
    ZV,
    /// WV plane (5D only)
    WV,
}

const PLANES_4D: [RotationPlane; 6] = [
    RotationPlane::XY,
    RotationPlane::XZ,
    RotationPlane::XW,
    RotationPlane::YZ,
    RotationPlane::YW,
    RotationPlane::ZW,
];

impl RotationPlane {
    /// Number of distinct planes across all supported dimensions
    pub const COUNT: usize = 10;

    /// Every plane in canonical order
    pub const ALL: [RotationPlane; Self::COUNT] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::XV,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::YV,
        RotationPlane::ZW,
        RotationPlane::ZV,
        RotationPlane::WV,
    ];

    /// The planes of a dimension, in canonical order
    pub fn planes_for(dimension: Dimension) -> &'static [RotationPlane] {
        match dimension {
            Dimension::Four => &PLANES_4D,
            Dimension::Five => &Self::ALL,
        }
    }

    /// Position of this plane in [`RotationPlane::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two axes spanning the plane, lower axis first
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::XV => (Axis::X, Axis::V),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::YV => (Axis::Y, Axis::V),
            RotationPlane::ZW => (Axis::Z, Axis::W),
            RotationPlane::ZV => (Axis::Z, Axis::V),
            RotationPlane::WV => (Axis::W, Axis::V),
        }
    }

    /// Whether this plane exists in the given dimension
    #[inline]
    pub fn exists_in(self, dimension: Dimension) -> bool {
        let (_, b) = self.axes();
        dimension.has_axis(b)
    }

    /// Lowercase two-letter name (`"xy"`, `"wv"`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::XV => "xv",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::YV => "yv",
            RotationPlane::ZW => "zw",
            RotationPlane::ZV => "zv",
            RotationPlane::WV => "wv",
        }
    }

    /// Look up a plane by its two-letter name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
