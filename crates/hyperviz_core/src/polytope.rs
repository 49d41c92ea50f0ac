//! Polytope topology
//!
//! A [`Polytope`] is an ordered vertex list plus edges and triangular faces
//! that refer to vertices by index. Indices are fixed at construction, so
//! downstream stages can resolve topology against any derived (rotated,
//! projected) copy of the vertex list.

use std::collections::HashSet;
use hyperviz_math::{Dimension, HyperVector};
use crate::GeometryError;

/// An undirected edge between two vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Indices into the parent polytope's vertex array
    pub indices: [usize; 2],
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }

    /// Get the indices as a sorted pair (canonical form)
    #[inline]
    pub fn canonical(&self) -> [usize; 2] {
        let [a, b] = self.indices;
        if a <= b { [a, b] } else { [b, a] }
    }
}

/// A triangle for rendering, as three vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub indices: [usize; 3],
}

impl Face {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c] }
    }
}

/// Vertices, edges and faces of a 4D or 5D polytope
///
/// Immutable once built. Transforms produce new vertex lists rather than
/// modifying the polytope.
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope {
    dimension: Dimension,
    vertices: Vec<HyperVector>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Polytope {
    /// Build a polytope from raw parts, validating the topology
    ///
    /// Fails with [`GeometryError::InvalidTopology`] if the vertex list is
    /// empty, any index is out of range, an edge is degenerate or duplicated,
    /// and with [`GeometryError::DimensionMismatch`] if vertices disagree on
    /// dimensionality.
    pub fn new(
        vertices: Vec<HyperVector>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
    ) -> Result<Self, GeometryError> {
        let dimension = vertices
            .first()
            .map(|v| v.dimension())
            .ok_or_else(|| GeometryError::InvalidTopology("polytope has no vertices".to_string()))?;

        if let Some(v) = vertices.iter().find(|v| v.dimension() != dimension) {
            return Err(GeometryError::DimensionMismatch {
                expected: dimension,
                found: v.dimension(),
            });
        }

        let n = vertices.len();
        let mut seen: HashSet<[usize; 2]> = HashSet::with_capacity(edges.len());
        for edge in &edges {
            let [a, b] = edge.canonical();
            if b >= n {
                return Err(GeometryError::InvalidTopology(format!(
                    "edge ({}, {}) references a vertex beyond {}", a, b, n
                )));
            }
            if a == b {
                return Err(GeometryError::InvalidTopology(format!("degenerate edge ({}, {})", a, b)));
            }
            if !seen.insert([a, b]) {
                return Err(GeometryError::InvalidTopology(format!("duplicate edge ({}, {})", a, b)));
            }
        }

        if let Some(face) = faces.iter().find(|f| f.indices.iter().any(|&i| i >= n)) {
            return Err(GeometryError::InvalidTopology(format!(
                "face {:?} references a vertex beyond {}", face.indices, n
            )));
        }

        Ok(Self { dimension, vertices, edges, faces })
    }

    /// Construct from generator output that is valid by construction
    pub(crate) fn from_generated(
        dimension: Dimension,
        vertices: Vec<HyperVector>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
    ) -> Self {
        debug_assert!(vertices.iter().all(|v| v.dimension() == dimension));
        debug_assert!(edges.iter().all(|e| e.indices.iter().all(|&i| i < vertices.len())));
        debug_assert!(faces.iter().all(|f| f.indices.iter().all(|&i| i < vertices.len())));
        Self { dimension, vertices, edges, faces }
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn vertices(&self) -> &[HyperVector] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// All index pairs `(i, j)` with `i < j < n`, in lexicographic order
pub(crate) fn complete_graph_edges(n: usize) -> Vec<Edge> {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| Edge::new(i, j)))
        .collect()
}

/// All index triples `(i, j, k)` with `i < j < k < n`, in lexicographic order
pub(crate) fn all_triangles(n: usize) -> Vec<Face> {
    let mut faces = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                faces.push(Face::new(i, j, k));
            }
        }
    }
    faces
}
