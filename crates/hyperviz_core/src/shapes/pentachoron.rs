//! Pentachoron (regular 5-cell) geometry
//!
//! Four vertices at (±1, ±1, ±1, −0.5) with an even number of sign flips
//! form a regular tetrahedron in the w = −0.5 hyperplane; an apex at
//! (0, 0, 0, 1.5) completes the simplex. Every pair of vertices is an edge
//! and every triple is a triangular face.

use hyperviz_math::{Dimension, HyperVector, Vec4};
use crate::polytope::{all_triangles, complete_graph_edges, Polytope};

/// Generate the pentachoron
pub fn pentachoron() -> Polytope {
    let vertices: Vec<HyperVector> = vec![
        Vec4::new(1.0, 1.0, 1.0, -0.5).into(),
        Vec4::new(1.0, -1.0, -1.0, -0.5).into(),
        Vec4::new(-1.0, 1.0, -1.0, -0.5).into(),
        Vec4::new(-1.0, -1.0, 1.0, -0.5).into(),
        Vec4::new(0.0, 0.0, 0.0, 1.5).into(),
    ];
    let n = vertices.len();

    Polytope::from_generated(Dimension::Four, vertices, complete_graph_edges(n), all_triangles(n))
}
