//! Dimension-tagged vertex type
//!
//! A [`HyperVector`] is either a [`Vec4`] or a [`Vec5`]. Geometry code works
//! with the tagged value so a single vertex list can describe either kind of
//! polytope, and mixing dimensions is detectable instead of silent.

use serde::{Serialize, Deserialize};
use crate::{Axis, Dimension, RotationPlane, Vec4, Vec5};

/// A point in 4D or 5D space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HyperVector {
    D4(Vec4),
    D5(Vec5),
}

impl HyperVector {
    /// Dimensionality of this vector
    #[inline]
    pub fn dimension(&self) -> Dimension {
        match self {
            HyperVector::D4(_) => Dimension::Four,
            HyperVector::D5(_) => Dimension::Five,
        }
    }

    /// Component along an axis, `None` if the axis is absent
    #[inline]
    pub fn get(&self, axis: Axis) -> Option<f32> {
        match self {
            HyperVector::D4(p) => p.get(axis),
            HyperVector::D5(p) => Some(p.get(axis)),
        }
    }

    /// The x, y, z components
    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        match self {
            HyperVector::D4(p) => p.xyz(),
            HyperVector::D5(p) => p.xyz(),
        }
    }

    /// Components beyond z, in axis order (w, then v)
    pub fn extra_components(&self) -> &[f32] {
        match self {
            HyperVector::D4(p) => std::slice::from_ref(&p.w),
            HyperVector::D5(p) => {
                let tail: &[f32; 5] = bytemuck::cast_ref(p);
                &tail[3..]
            }
        }
    }

    /// True when every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            HyperVector::D4(p) => p.is_finite(),
            HyperVector::D5(p) => p.is_finite(),
        }
    }

    /// Rotate within a single coordinate plane given the precomputed sine and
    /// cosine of the angle
    ///
    /// For plane (a, b): `a' = a·cos − b·sin`, `b' = a·sin + b·cos`. Every
    /// other component is left untouched. Returns `None` if the plane does
    /// not exist in this vector's dimension.
    pub fn rotate_in_plane(self, plane: RotationPlane, sin: f32, cos: f32) -> Option<Self> {
        if !plane.exists_in(self.dimension()) {
            return None;
        }
        let (a, b) = plane.axes();
        let (a, b) = (a.index(), b.index());

        Some(match self {
            HyperVector::D4(p) => {
                let mut c = p.to_array();
                let (va, vb) = (c[a], c[b]);
                c[a] = va * cos - vb * sin;
                c[b] = va * sin + vb * cos;
                HyperVector::D4(Vec4::from_array(c))
            }
            HyperVector::D5(p) => {
                let mut c = p.to_array();
                let (va, vb) = (c[a], c[b]);
                c[a] = va * cos - vb * sin;
                c[b] = va * sin + vb * cos;
                HyperVector::D5(Vec5::from_array(c))
            }
        })
    }

    /// Rotate within a single coordinate plane by `angle` radians
    #[inline]
    pub fn rotated(self, plane: RotationPlane, angle: f32) -> Option<Self> {
        let (sin, cos) = angle.sin_cos();
        self.rotate_in_plane(plane, sin, cos)
    }
}

impl From<Vec4> for HyperVector {
    fn from(v: Vec4) -> Self {
        HyperVector::D4(v)
    }
}

impl From<Vec5> for HyperVector {
    fn from(v: Vec5) -> Self {
        HyperVector::D5(v)
    }
}
