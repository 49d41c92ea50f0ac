//! Shape kinds and their generators
//!
//! Each [`ShapeKind`] dispatches to an independent generator function that
//! builds a self-contained [`Polytope`]. Generation is deterministic: calling
//! it twice yields identical vertices, edges and faces.

mod tesseract;
mod pentachoron;
mod hyperoctahedron;
mod simplex5d;

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use hyperviz_math::Dimension;
use crate::{GeometryError, Polytope};

pub use tesseract::tesseract;
pub use pentachoron::pentachoron;
pub use hyperoctahedron::hyperoctahedron;
pub use simplex5d::simplex5d;

/// The supported polytopes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// 4D hypercube: 16 vertices, 32 edges
    #[default]
    Tesseract,
    /// Regular 5-cell: 5 vertices, complete graph
    Pentachoron,
    /// 16-cell (4D cross-polytope): 8 vertices, 24 edges
    Hyperoctahedron,
    /// 5D simplex: 6 vertices, complete graph
    Simplex5D,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Tesseract,
        ShapeKind::Pentachoron,
        ShapeKind::Hyperoctahedron,
        ShapeKind::Simplex5D,
    ];

    /// Identifier used in configuration and by UI layers
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "tesseract",
            ShapeKind::Pentachoron => "pentachoron",
            ShapeKind::Hyperoctahedron => "hyperoctahedron",
            ShapeKind::Simplex5D => "simplex5d",
        }
    }

    /// Dimension the shape's vertices live in
    pub const fn native_dimension(self) -> Dimension {
        match self {
            ShapeKind::Simplex5D => Dimension::Five,
            _ => Dimension::Four,
        }
    }

    /// Generate the polytope for this shape
    pub fn generate(self) -> Polytope {
        let polytope = match self {
            ShapeKind::Tesseract => tesseract(),
            ShapeKind::Pentachoron => pentachoron(),
            ShapeKind::Hyperoctahedron => hyperoctahedron(),
            ShapeKind::Simplex5D => simplex5d(),
        };
        log::trace!(
            "Generated {}: {} vertices, {} edges, {} faces",
            self,
            polytope.vertex_count(),
            polytope.edge_count(),
            polytope.face_count()
        );
        polytope
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GeometryError::UnknownShape(s.to_string()))
    }
}

/// Generate a polytope from its string identifier
///
/// Fails with [`GeometryError::UnknownShape`] for unrecognised identifiers.
pub fn generate_shape(shape_type: &str) -> Result<Polytope, GeometryError> {
    let kind: ShapeKind = shape_type.parse()?;
    Ok(kind.generate())
}
