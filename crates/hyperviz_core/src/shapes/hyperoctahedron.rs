//! 16-cell (4D cross-polytope) geometry
//!
//! Vertices sit at ±1 on each axis. Two vertices are joined unless they are
//! antipodal, and every choice of three distinct axes with one sign each
//! gives a triangular face (4 axis triples × 8 sign combinations).

use hyperviz_math::{Dimension, HyperVector, Vec4};
use crate::polytope::{Edge, Face, Polytope};

/// Dot products below this magnitude count as orthogonal
const ORTHOGONAL_EPSILON: f32 = 1e-3;

/// Vertex index for the signed unit vector on `axis`
///
/// Vertices are stored as +x, −x, +y, −y, +z, −z, +w, −w.
#[inline]
fn signed_axis_index(axis: usize, sign: i8) -> usize {
    axis * 2 + if sign == 1 { 0 } else { 1 }
}

/// Generate the hyperoctahedron
pub fn hyperoctahedron() -> Polytope {
    let units = [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];
    let axes: Vec<Vec4> = units.iter().flat_map(|&u| [u, -u]).collect();

    let mut edges = Vec::with_capacity(24);
    for i in 0..axes.len() {
        for j in (i + 1)..axes.len() {
            if axes[i].dot(axes[j]).abs() < ORTHOGONAL_EPSILON {
                edges.push(Edge::new(i, j));
            }
        }
    }

    let vertices: Vec<HyperVector> = axes.into_iter().map(HyperVector::from).collect();
    Polytope::from_generated(Dimension::Four, vertices, edges, compute_faces())
}

fn compute_faces() -> Vec<Face> {
    const AXIS_TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

    let mut faces = Vec::with_capacity(32);
    for [a, b, c] in AXIS_TRIPLES {
        for sa in [-1i8, 1] {
            for sb in [-1i8, 1] {
                for sc in [-1i8, 1] {
                    faces.push(Face::new(
                        signed_axis_index(a, sa),
                        signed_axis_index(b, sb),
                        signed_axis_index(c, sc),
                    ));
                }
            }
        }
    }
    faces
}
