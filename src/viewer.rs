//! Viewer state
//!
//! Everything the UI layer can change: the selected shape and dimension,
//! separate 4D and 5D rotation states, projection distance, scale, output
//! layers and the cross-section. Setters record what changed in
//! [`DirtyFlags`] so geometry is only rebuilt when an input actually moved.

use bitflags::bitflags;
use hyperviz_core::{
    CrossSection, Dimension, GeometryError, ProjectionParams, RotationPlane, RotationState,
    ShapeKind,
};
use hyperviz_render::{PipelineParams, RenderLayers};
use crate::config::AppConfig;

/// Projection distance restored by [`ViewerState::reset_transforms`]
pub const DEFAULT_PROJECTION_DISTANCE: f32 = 4.0;

bitflags! {
    /// Flags indicating which viewer inputs have changed since the last build
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Shape selection changed
        const SHAPE = 1 << 0;
        /// Dimension changed
        const DIMENSION = 1 << 1;
        /// A rotation angle changed
        const ROTATION = 1 << 2;
        /// Projection distance or scale changed
        const PROJECTION = 1 << 3;
        /// Output layers or cross-section changed
        const OUTPUT = 1 << 4;
        /// All flags set - full rebuild
        const ALL = Self::SHAPE.bits()
            | Self::DIMENSION.bits()
            | Self::ROTATION.bits()
            | Self::PROJECTION.bits()
            | Self::OUTPUT.bits();
    }
}

/// Mutable view inputs feeding the geometry pipeline
#[derive(Clone, Debug)]
pub struct ViewerState {
    shape: ShapeKind,
    dimension: Dimension,
    rotation_4d: RotationState,
    rotation_5d: RotationState,
    projection: ProjectionParams,
    scale: f32,
    layers: RenderLayers,
    cross_section: Option<CrossSection>,
    dirty: DirtyFlags,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ShapeKind::default())
    }
}

impl ViewerState {
    /// Identity rotations, distance 4, unit scale, lines and points
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            dimension: shape.native_dimension(),
            rotation_4d: RotationState::identity(Dimension::Four),
            rotation_5d: RotationState::identity(Dimension::Five),
            projection: ProjectionParams::new(DEFAULT_PROJECTION_DISTANCE),
            scale: 1.0,
            layers: RenderLayers::default(),
            cross_section: None,
            dirty: DirtyFlags::ALL,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let view = &config.view;
        let mut state = Self::new(view.shape);
        state.projection = ProjectionParams::new(view.projection_distance);
        state.scale = view.scale;
        state.layers = RenderLayers::from_toggles(view.wireframe, view.show_vertices, view.show_faces);
        state.cross_section = config.cross_section.to_cross_section();
        state
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Rotation state for the current dimension
    pub fn rotation(&self) -> &RotationState {
        match self.dimension {
            Dimension::Four => &self.rotation_4d,
            Dimension::Five => &self.rotation_5d,
        }
    }

    fn rotation_mut(&mut self, dimension: Dimension) -> &mut RotationState {
        match dimension {
            Dimension::Four => &mut self.rotation_4d,
            Dimension::Five => &mut self.rotation_5d,
        }
    }

    #[inline]
    pub fn projection_distance(&self) -> f32 {
        self.projection.distance
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn layers(&self) -> RenderLayers {
        self.layers
    }

    #[inline]
    pub fn cross_section(&self) -> Option<CrossSection> {
        self.cross_section
    }

    /// Select a shape; the dimension follows the shape
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape != self.shape {
            self.shape = shape;
            self.dirty |= DirtyFlags::SHAPE;
        }
        self.set_dimension(shape.native_dimension());
    }

    /// Select a dimension independently of the shape
    ///
    /// A dimension that disagrees with the shape is a caller error; the next
    /// build reports it as a dimension mismatch.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        if dimension != self.dimension {
            self.dimension = dimension;
            self.dirty |= DirtyFlags::DIMENSION;
        }
    }

    /// Set one plane angle of the current dimension's rotation state
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f32) -> Result<(), GeometryError> {
        let dimension = self.dimension;
        self.set_angle_in(dimension, plane, angle)
    }

    /// Set one plane angle of a specific dimension's rotation state
    pub fn set_angle_in(
        &mut self,
        dimension: Dimension,
        plane: RotationPlane,
        angle: f32,
    ) -> Result<(), GeometryError> {
        let state = self.rotation_mut(dimension);
        let previous = state.angle(plane);
        state.set(plane, angle)?;
        if previous != angle {
            self.dirty |= DirtyFlags::ROTATION;
        }
        Ok(())
    }

    pub fn set_projection_distance(&mut self, distance: f32) {
        if distance != self.projection.distance {
            self.projection = ProjectionParams::new(distance);
            self.dirty |= DirtyFlags::PROJECTION;
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        if scale != self.scale {
            self.scale = scale;
            self.dirty |= DirtyFlags::PROJECTION;
        }
    }

    pub fn set_layers(&mut self, layers: RenderLayers) {
        if layers != self.layers {
            self.layers = layers;
            self.dirty |= DirtyFlags::OUTPUT;
        }
    }

    pub fn set_cross_section(&mut self, cross_section: Option<CrossSection>) {
        if cross_section != self.cross_section {
            self.cross_section = cross_section;
            self.dirty |= DirtyFlags::OUTPUT;
        }
    }

    /// Zero every rotation angle and restore default distance and scale
    pub fn reset_transforms(&mut self) {
        self.rotation_4d.reset();
        self.rotation_5d.reset();
        self.projection = ProjectionParams::new(DEFAULT_PROJECTION_DISTANCE);
        self.scale = 1.0;
        self.dirty |= DirtyFlags::ROTATION | DirtyFlags::PROJECTION;
    }

    /// Parameters for the next pipeline build
    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams {
            dimension: self.dimension,
            rotation: *self.rotation(),
            projection: self.projection,
            scale: self.scale,
            layers: self.layers,
            cross_section: self.cross_section,
        }
    }

    #[inline]
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}
