//! Renderable geometry - the buffers handed to the rendering layer
//!
//! Lines are stored as consecutive vertex pairs, faces as consecutive
//! vertex triples, points one per vertex.

use crate::types::Vertex3D;

/// Flat output buffers of one pipeline build
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderableGeometry {
    /// Edge segments, two vertices per edge
    pub lines: Vec<Vertex3D>,
    /// One vertex per surviving polytope vertex
    pub points: Vec<Vertex3D>,
    /// Face triangles, three vertices per face
    pub triangles: Vec<Vertex3D>,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create renderable geometry with pre-allocated capacity
    pub fn with_capacity(edges: usize, points: usize, faces: usize) -> Self {
        Self {
            lines: Vec::with_capacity(edges * 2),
            points: Vec::with_capacity(points),
            triangles: Vec::with_capacity(faces * 3),
        }
    }

    /// Flat `[x0, y0, z0, x1, ...]` coordinates of the line buffer
    pub fn line_positions(&self) -> Vec<f32> {
        flatten_positions(&self.lines)
    }

    /// Flat coordinates of the point buffer
    pub fn point_positions(&self) -> Vec<f32> {
        flatten_positions(&self.points)
    }

    /// Flat coordinates of the triangle buffer
    pub fn triangle_positions(&self) -> Vec<f32> {
        flatten_positions(&self.triangles)
    }

    /// Raw bytes of each buffer, ready for upload
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Number of line segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// True when every buffer is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.triangles.is_empty()
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.lines.clear();
        self.points.clear();
        self.triangles.clear();
    }
}

fn flatten_positions(vertices: &[Vertex3D]) -> Vec<f32> {
    vertices.iter().flat_map(|v| v.position).collect()
}
