//! Axis-aligned slab filter
//!
//! A cross-section keeps only vertices whose coordinate along one axis lies
//! within `thickness` of `position`. It runs after rotation and before
//! projection. Rejected vertices keep their index; topology that references
//! them is skipped when the renderable buffers are built.

use serde::{Serialize, Deserialize};
use hyperviz_math::{Axis, HyperVector};
use crate::GeometryError;

/// Slab cross-section along one axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Axis the slab is perpendicular to
    pub axis: Axis,
    /// Centre of the slab along `axis`
    pub position: f32,
    /// Half-width of the slab
    pub thickness: f32,
}

impl Default for CrossSection {
    fn default() -> Self {
        Self {
            axis: Axis::W,
            position: 0.0,
            thickness: 0.1,
        }
    }
}

impl CrossSection {
    pub fn new(axis: Axis, position: f32, thickness: f32) -> Self {
        Self { axis, position, thickness }
    }

    /// Whether a vertex lies inside the slab
    ///
    /// Fails with [`GeometryError::InvalidAxis`] if the vertex has no
    /// component along the slab axis.
    pub fn contains(&self, vertex: &HyperVector) -> Result<bool, GeometryError> {
        let value = vertex.get(self.axis).ok_or(GeometryError::InvalidAxis {
            axis: self.axis,
            dimension: vertex.dimension(),
        })?;
        Ok((value - self.position).abs() <= self.thickness.abs())
    }

    /// Inclusion mask for a vertex list, one entry per vertex
    pub fn mask(&self, vertices: &[HyperVector]) -> Result<Vec<bool>, GeometryError> {
        vertices.iter().map(|v| self.contains(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeKind;
    use hyperviz_math::{Dimension, Vec4, Vec5};

    #[test]
    fn test_contains() {
        let slice = CrossSection::new(Axis::W, 1.0, 0.25);
        assert!(slice.contains(&Vec4::new(0.0, 0.0, 0.0, 1.2).into()).unwrap());
        assert!(slice.contains(&Vec4::new(9.0, 9.0, 9.0, 0.75).into()).unwrap());
        assert!(!slice.contains(&Vec4::new(0.0, 0.0, 0.0, 0.5).into()).unwrap());
    }

    #[test]
    fn test_tesseract_half() {
        // Only the w = +1 cell survives a slab around w = 1
        let p = ShapeKind::Tesseract.generate();
        let mask = CrossSection::new(Axis::W, 1.0, 0.1).mask(p.vertices()).unwrap();
        assert_eq!(mask.iter().filter(|&&m| m).count(), 8);
        assert!(mask[8..].iter().all(|&m| m));
    }

    #[test]
    fn test_v_axis_on_4d() {
        let slice = CrossSection::new(Axis::V, 0.0, 0.1);
        let err = slice.contains(&Vec4::X.into()).unwrap_err();
        assert_eq!(err, GeometryError::InvalidAxis { axis: Axis::V, dimension: Dimension::Four });
        assert!(slice.contains(&Vec5::X.into()).unwrap());
    }

    #[test]
    fn test_nan_is_outside() {
        let slice = CrossSection::default();
        assert!(!slice.contains(&Vec4::new(0.0, 0.0, 0.0, f32::NAN).into()).unwrap());
    }
}
