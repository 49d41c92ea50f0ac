//! 5D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Axis;

/// 5D Vector with x, y, z, w, v components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec5 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub v: f32,
}

impl Vec5 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0, v: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0, v: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0, v: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0, v: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0, v: 0.0 };
    pub const V: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0, v: 1.0 };

    /// Create a new Vec5
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32, v: f32) -> Self {
        Self { x, y, z, w, v }
    }

    /// Create a vector with every component set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value, value)
    }

    #[inline]
    pub const fn from_array(c: [f32; 5]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 5] {
        [self.x, self.y, self.z, self.w, self.v]
    }

    /// Component along an axis
    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        self.to_array()[axis.index()]
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
            + self.w * other.w
            + self.v * other.v
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl std::ops::Sub for Vec5 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
            self.v - other.v,
        )
    }
}
