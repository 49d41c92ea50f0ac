//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w),
//! 32 edges and 24 square faces. Each square is split into two triangles
//! for rendering, giving 48 faces.

use hyperviz_math::{Dimension, HyperVector, Vec4};
use crate::polytope::{Edge, Face, Polytope};

/// Vertex index of a corner given its ±1 coordinates
///
/// Bit k of the index is set when coordinate k is +1.
fn corner_index(coords: [i8; 4]) -> usize {
    coords
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 1)
        .fold(0, |index, (bit, _)| index | (1 << bit))
}

/// Generate the tesseract
pub fn tesseract() -> Polytope {
    // Using binary counting: vertex i has coordinates based on bits of i
    let vertices: Vec<HyperVector> = (0..16usize)
        .map(|i| {
            let s = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
            Vec4::new(s(0), s(1), s(2), s(3)).into()
        })
        .collect();

    // Vertices differing in exactly one sign bit are joined
    let mut edges = Vec::with_capacity(32);
    for i in 0usize..16 {
        for j in (i + 1)..16 {
            if (i ^ j).count_ones() == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }

    Polytope::from_generated(Dimension::Four, vertices, edges, compute_faces())
}

/// Triangulate the 24 square faces
///
/// For each axis pair (a, b) and each sign combination of the remaining two
/// axes, walk the square corners 00 -> 10 -> 11 -> 01 and emit the triangles
/// (00, 10, 11) and (00, 11, 01).
fn compute_faces() -> Vec<Face> {
    const AXIS_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    let mut faces = Vec::with_capacity(48);
    for (a, b) in AXIS_PAIRS {
        let rest: Vec<usize> = (0..4).filter(|&k| k != a && k != b).collect();
        for s1 in [-1i8, 1] {
            for s2 in [-1i8, 1] {
                let mut coords = [-1i8; 4];
                coords[rest[0]] = s1;
                coords[rest[1]] = s2;
                let c00 = corner_index(coords);
                coords[a] = 1;
                let c10 = corner_index(coords);
                coords[b] = 1;
                let c11 = corner_index(coords);
                coords[a] = -1;
                let c01 = corner_index(coords);

                faces.push(Face::new(c00, c10, c11));
                faces.push(Face::new(c00, c11, c01));
            }
        }
    }
    faces
}
