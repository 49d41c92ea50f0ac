//! Geometry pipeline - generate, rotate, project, resolve topology
//!
//! Every build runs the same strictly ordered stages:
//!
//! 1. Generate the polytope for the shape (cached per shape by [`GeometryPipeline`])
//! 2. Rotate all vertices by the rotation state
//! 3. Apply the optional cross-section mask
//! 4. Project every surviving vertex to 3D
//! 5. Resolve edges, vertices and faces against the projected list
//!
//! A vertex that is masked out or whose projection is non-finite is dropped
//! but keeps its index, so edges and faces touching it are skipped instead of
//! being resolved against the wrong vertex.

use hyperviz_core::{
    rotate, CrossSection, Dimension, GeometryError, Polytope, ProjectionParams, RotationState,
    ShapeKind,
};
use crate::layers::RenderLayers;
use crate::renderable::RenderableGeometry;
use crate::shading::{base_color, shade, Hsl};
use crate::types::Vertex3D;

/// Smallest output scale applied to projected coordinates
pub const MIN_SCALE: f32 = 0.1;

/// Inputs of a pipeline build other than the shape itself
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineParams {
    /// Dimension the rotation runs in; must match the shape
    pub dimension: Dimension,
    pub rotation: RotationState,
    pub projection: ProjectionParams,
    /// Uniform scale of the output coordinates (floored at [`MIN_SCALE`])
    pub scale: f32,
    pub layers: RenderLayers,
    pub cross_section: Option<CrossSection>,
}

impl PipelineParams {
    /// Identity rotation, distance 4, unit scale, lines and points
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            rotation: RotationState::identity(dimension),
            projection: ProjectionParams::default(),
            scale: 1.0,
            layers: RenderLayers::default(),
            cross_section: None,
        }
    }

    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_projection_distance(mut self, distance: f32) -> Self {
        self.projection = ProjectionParams::new(distance);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_layers(mut self, layers: RenderLayers) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_cross_section(mut self, cross_section: Option<CrossSection>) -> Self {
        self.cross_section = cross_section;
        self
    }
}

/// Build the renderable buffers for a shape
///
/// Fails with [`GeometryError::DimensionMismatch`] when `params.dimension`
/// is not the shape's native dimension.
pub fn build_renderable(
    shape: ShapeKind,
    params: &PipelineParams,
) -> Result<RenderableGeometry, GeometryError> {
    check_dimension(shape, params.dimension)?;
    build_polytope(&shape.generate(), base_color(shape), params)
}

/// Build the renderable buffers for a shape given by its string identifier
pub fn build_renderable_named(
    shape_type: &str,
    params: &PipelineParams,
) -> Result<RenderableGeometry, GeometryError> {
    build_renderable(shape_type.parse()?, params)
}

/// Build the renderable buffers for an arbitrary polytope
pub fn build_polytope(
    polytope: &Polytope,
    base: Hsl,
    params: &PipelineParams,
) -> Result<RenderableGeometry, GeometryError> {
    let rotated = rotate(polytope.vertices(), params.dimension, &params.rotation)?;

    let mask = params
        .cross_section
        .map(|section| section.mask(&rotated))
        .transpose()?;

    let scale = params.scale.max(MIN_SCALE);
    let mut non_finite = 0usize;
    let projected: Vec<Option<Vertex3D>> = rotated
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            if mask.as_ref().is_some_and(|m| !m[i]) {
                return None;
            }
            let p = params.projection.try_project(vertex);
            if p.is_none() {
                log::trace!("Dropping vertex {} with non-finite projection: {:?}", i, vertex);
                non_finite += 1;
            }
            p.map(|p| Vertex3D::new(p.map(|c| c * scale), shade(base, p)))
        })
        .collect();

    if non_finite > 0 {
        log::warn!(
            "{} of {} vertices projected to non-finite points; dependent edges and faces are skipped",
            non_finite,
            rotated.len()
        );
    }

    let resolve = |i: usize| projected.get(i).copied().flatten();

    let mut geometry = RenderableGeometry::with_capacity(
        polytope.edge_count(),
        polytope.vertex_count(),
        polytope.face_count(),
    );
    let mut skipped = 0usize;

    if params.layers.contains(RenderLayers::LINES) {
        for edge in polytope.edges() {
            match edge.indices.map(resolve) {
                [Some(a), Some(b)] => geometry.lines.extend([a, b]),
                _ => skipped += 1,
            }
        }
    }

    if params.layers.contains(RenderLayers::POINTS) {
        geometry.points.extend(projected.iter().flatten().copied());
    }

    if params.layers.contains(RenderLayers::FACES) {
        for face in polytope.faces() {
            match face.indices.map(resolve) {
                [Some(a), Some(b), Some(c)] => geometry.triangles.extend([a, b, c]),
                _ => skipped += 1,
            }
        }
    }

    let dropped = projected.iter().filter(|p| p.is_none()).count();
    log::debug!(
        "Built {} geometry: {} segments, {} points, {} triangles ({} vertices dropped, {} primitives skipped)",
        params.dimension,
        geometry.segment_count(),
        geometry.point_count(),
        geometry.triangle_count(),
        dropped,
        skipped
    );

    Ok(geometry)
}

fn check_dimension(shape: ShapeKind, dimension: Dimension) -> Result<(), GeometryError> {
    if shape.native_dimension() != dimension {
        return Err(GeometryError::DimensionMismatch {
            expected: shape.native_dimension(),
            found: dimension,
        });
    }
    Ok(())
}

/// Pipeline that keeps the generated polytope for the selected shape
///
/// The polytope is generated once per shape selection; every build after
/// that only re-runs the rotation, projection and resolution stages.
#[derive(Clone, Debug)]
pub struct GeometryPipeline {
    shape: ShapeKind,
    polytope: Polytope,
}

impl GeometryPipeline {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            polytope: shape.generate(),
        }
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn polytope(&self) -> &Polytope {
        &self.polytope
    }

    /// Select a shape, regenerating the polytope only if it changed
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape != self.shape {
            log::debug!("Switching shape {} -> {}", self.shape, shape);
            *self = Self::new(shape);
        }
    }

    /// Run a full build for the selected shape
    pub fn build(&self, params: &PipelineParams) -> Result<RenderableGeometry, GeometryError> {
        check_dimension(self.shape, params.dimension)?;
        build_polytope(&self.polytope, base_color(self.shape), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperviz_core::{Axis, Edge, Face, HyperVector, RotationPlane, Vec4};

    fn all_layers(dimension: Dimension) -> PipelineParams {
        PipelineParams::new(dimension).with_layers(RenderLayers::all())
    }

    #[test]
    fn test_full_counts() {
        let expected = [
            (ShapeKind::Tesseract, 32, 16, 48),
            (ShapeKind::Pentachoron, 10, 5, 10),
            (ShapeKind::Hyperoctahedron, 24, 8, 32),
            (ShapeKind::Simplex5D, 15, 6, 20),
        ];
        for (kind, segments, points, triangles) in expected {
            let geom = build_renderable(kind, &all_layers(kind.native_dimension())).unwrap();
            assert_eq!(geom.segment_count(), segments, "{}", kind);
            assert_eq!(geom.point_count(), points, "{}", kind);
            assert_eq!(geom.triangle_count(), triangles, "{}", kind);
        }
    }

    #[test]
    fn test_layers_gate_output() {
        let params = PipelineParams::new(Dimension::Four).with_layers(RenderLayers::POINTS);
        let geom = build_renderable(ShapeKind::Tesseract, &params).unwrap();
        assert!(geom.lines.is_empty());
        assert!(geom.triangles.is_empty());
        assert_eq!(geom.point_count(), 16);

        let params = params.with_layers(RenderLayers::empty());
        assert!(build_renderable(ShapeKind::Tesseract, &params).unwrap().is_empty());
    }

    #[test]
    fn test_shape_dimension_mismatch() {
        let err = build_renderable(ShapeKind::Simplex5D, &PipelineParams::new(Dimension::Four))
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::DimensionMismatch { expected: Dimension::Five, found: Dimension::Four }
        );
    }

    #[test]
    fn test_rotation_state_dimension_mismatch() {
        let params = PipelineParams::new(Dimension::Four)
            .with_rotation(RotationState::identity(Dimension::Five));
        assert!(matches!(
            build_renderable(ShapeKind::Tesseract, &params),
            Err(GeometryError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_shape_name() {
        let err = build_renderable_named("klein-bottle", &PipelineParams::new(Dimension::Four))
            .unwrap_err();
        assert_eq!(err, GeometryError::UnknownShape("klein-bottle".to_string()));
    }

    #[test]
    fn test_scale_applied_and_floored() {
        let base = build_renderable(ShapeKind::Tesseract, &PipelineParams::new(Dimension::Four)).unwrap();
        let doubled = build_renderable(
            ShapeKind::Tesseract,
            &PipelineParams::new(Dimension::Four).with_scale(2.0),
        )
        .unwrap();
        for (a, b) in base.points.iter().zip(&doubled.points) {
            for k in 0..3 {
                assert!((a.position[k] * 2.0 - b.position[k]).abs() < 1e-5);
            }
            // shading uses the unscaled position
            assert_eq!(a.color, b.color);
        }

        let tiny = build_renderable(
            ShapeKind::Tesseract,
            &PipelineParams::new(Dimension::Four).with_scale(0.0),
        )
        .unwrap();
        let floored = build_renderable(
            ShapeKind::Tesseract,
            &PipelineParams::new(Dimension::Four).with_scale(MIN_SCALE),
        )
        .unwrap();
        assert_eq!(tiny, floored);
    }

    #[test]
    fn test_pole_vertex_dropped_with_its_edges() {
        // w == -d makes the projection blow up for exactly that vertex
        let vertices: Vec<HyperVector> = vec![
            Vec4::new(1.0, 0.0, 0.0, 0.0).into(),
            Vec4::new(0.0, 1.0, 0.0, -4.0).into(),
            Vec4::new(0.0, 0.0, 1.0, 0.0).into(),
        ];
        let polytope = Polytope::new(
            vertices,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 2)],
            vec![Face::new(0, 1, 2)],
        )
        .unwrap();
        let geom = build_polytope(&polytope, Hsl::NEUTRAL, &all_layers(Dimension::Four)).unwrap();
        assert_eq!(geom.point_count(), 2);
        assert_eq!(geom.segment_count(), 1);
        assert_eq!(geom.line_positions(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(geom.triangle_count(), 0);
    }

    #[test]
    fn test_cross_section_filters_topology() {
        let params = all_layers(Dimension::Four)
            .with_cross_section(Some(CrossSection::new(Axis::W, 1.0, 0.1)));
        let geom = build_renderable(ShapeKind::Tesseract, &params).unwrap();
        // The w = +1 cube: 8 vertices, 12 edges, 6 squares
        assert_eq!(geom.point_count(), 8);
        assert_eq!(geom.segment_count(), 12);
        assert_eq!(geom.triangle_count(), 12);
    }

    #[test]
    fn test_cross_section_invalid_axis() {
        let params = PipelineParams::new(Dimension::Four)
            .with_cross_section(Some(CrossSection::new(Axis::V, 0.0, 0.5)));
        assert!(matches!(
            build_renderable(ShapeKind::Pentachoron, &params),
            Err(GeometryError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_rotation_changes_output() {
        let rotation = RotationState::identity(Dimension::Four)
            .with(RotationPlane::XW, 0.4)
            .unwrap();
        let still = build_renderable(ShapeKind::Tesseract, &PipelineParams::new(Dimension::Four)).unwrap();
        let turned = build_renderable(
            ShapeKind::Tesseract,
            &PipelineParams::new(Dimension::Four).with_rotation(rotation),
        )
        .unwrap();
        assert_eq!(still.point_count(), turned.point_count());
        assert_ne!(still.points, turned.points);
    }

    #[test]
    fn test_geometry_pipeline_matches_free_function() {
        let params = all_layers(Dimension::Four).with_projection_distance(2.5);
        let pipeline = GeometryPipeline::new(ShapeKind::Hyperoctahedron);
        assert_eq!(
            pipeline.build(&params).unwrap(),
            build_renderable(ShapeKind::Hyperoctahedron, &params).unwrap()
        );
    }

    #[test]
    fn test_geometry_pipeline_set_shape() {
        let mut pipeline = GeometryPipeline::new(ShapeKind::Tesseract);
        pipeline.set_shape(ShapeKind::Simplex5D);
        assert_eq!(pipeline.shape(), ShapeKind::Simplex5D);
        assert_eq!(pipeline.polytope().vertex_count(), 6);
        assert!(pipeline.build(&PipelineParams::new(Dimension::Five)).is_ok());
        assert!(pipeline.build(&PipelineParams::new(Dimension::Four)).is_err());
    }
}
