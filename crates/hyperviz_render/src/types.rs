//! GPU-compatible output vertex type
//!
//! Derives Pod and Zeroable so the buffers can be handed to a renderer with
//! `bytemuck::cast_slice` without copying.

use bytemuck::{Pod, Zeroable};

/// A projected vertex with its colour hint
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA colour
    pub color: [f32; 4],
}

impl Vertex3D {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}
