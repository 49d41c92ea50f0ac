//! 5-simplex geometry
//!
//! Five unit vectors (one per axis) plus an apex at −0.5 on every axis.
//! Every pair of the six vertices is an edge and every triple is a face.

use hyperviz_math::{Dimension, HyperVector, Vec5};
use crate::polytope::{all_triangles, complete_graph_edges, Polytope};

/// Generate the 5D simplex
pub fn simplex5d() -> Polytope {
    let vertices: Vec<HyperVector> = [Vec5::X, Vec5::Y, Vec5::Z, Vec5::W, Vec5::V, Vec5::splat(-0.5)]
        .into_iter()
        .map(HyperVector::from)
        .collect();
    let n = vertices.len();

    Polytope::from_generated(Dimension::Five, vertices, complete_graph_edges(n), all_triangles(n))
}
