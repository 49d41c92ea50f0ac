//! Geometry rebuild system
//!
//! Owns the geometry pipeline and the last built buffers. Rebuilds only when
//! the viewer reports dirty inputs.

use hyperviz_core::GeometryError;
use hyperviz_render::{GeometryPipeline, RenderableGeometry};
use crate::viewer::ViewerState;

/// Keeps renderable geometry in sync with the viewer state
#[derive(Clone, Debug)]
pub struct GeometrySystem {
    pipeline: GeometryPipeline,
    geometry: RenderableGeometry,
    builds: u64,
}

impl GeometrySystem {
    pub fn new(viewer: &ViewerState) -> Self {
        Self {
            pipeline: GeometryPipeline::new(viewer.shape()),
            geometry: RenderableGeometry::new(),
            builds: 0,
        }
    }

    /// Latest built geometry
    #[inline]
    pub fn geometry(&self) -> &RenderableGeometry {
        &self.geometry
    }

    /// Number of builds performed so far
    #[inline]
    pub fn build_count(&self) -> u64 {
        self.builds
    }

    /// Rebuild if the viewer changed since the last call
    ///
    /// Returns whether a build ran. A failed build leaves the geometry empty
    /// and clears the dirty flags; the same inputs would fail again.
    pub fn update(&mut self, viewer: &mut ViewerState) -> Result<bool, GeometryError> {
        if !viewer.is_dirty() {
            return Ok(false);
        }

        log::trace!("Rebuilding geometry, dirty: {:?}", viewer.dirty());
        self.pipeline.set_shape(viewer.shape());
        let result = self.pipeline.build(&viewer.pipeline_params());
        viewer.clear_dirty();
        self.builds += 1;

        match result {
            Ok(geometry) => {
                self.geometry = geometry;
                Ok(true)
            }
            Err(e) => {
                self.geometry.clear();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperviz_core::{Dimension, RotationPlane, ShapeKind};

    #[test]
    fn test_builds_only_when_dirty() {
        let mut viewer = ViewerState::default();
        let mut system = GeometrySystem::new(&viewer);

        assert!(system.update(&mut viewer).unwrap());
        assert_eq!(system.geometry().point_count(), 16);
        assert!(!system.update(&mut viewer).unwrap());
        assert_eq!(system.build_count(), 1);

        viewer.set_angle(RotationPlane::XW, 0.4).unwrap();
        assert!(system.update(&mut viewer).unwrap());
        assert_eq!(system.build_count(), 2);
    }

    #[test]
    fn test_shape_switch() {
        let mut viewer = ViewerState::default();
        let mut system = GeometrySystem::new(&viewer);
        system.update(&mut viewer).unwrap();

        viewer.set_shape(ShapeKind::Simplex5D);
        system.update(&mut viewer).unwrap();
        assert_eq!(system.geometry().point_count(), 6);
        assert_eq!(system.geometry().segment_count(), 15);
    }

    #[test]
    fn test_mismatch_clears_geometry() {
        let mut viewer = ViewerState::default();
        let mut system = GeometrySystem::new(&viewer);
        system.update(&mut viewer).unwrap();
        assert!(!system.geometry().is_empty());

        viewer.set_dimension(Dimension::Five);
        let err = system.update(&mut viewer).unwrap_err();
        assert!(matches!(err, GeometryError::DimensionMismatch { .. }));
        assert!(system.geometry().is_empty());
        assert!(!viewer.is_dirty());
    }
}
