//! Core geometry for the hyperviz engine
//!
//! This crate provides the polytopes and the transforms applied to them:
//!
//! - [`ShapeKind`] - The supported shapes and their generators
//! - [`Polytope`] - Vertices, edges and triangular faces addressed by index
//! - [`RotationState`] / [`rotate`] - Sequential plane rotations
//! - [`CrossSection`] - Optional slab filter applied before projection
//! - [`GeometryError`] - Errors raised by any of the above

mod error;
mod polytope;
pub mod shapes;
pub mod rotation;
mod cross_section;

pub use error::GeometryError;
pub use polytope::{Edge, Face, Polytope};
pub use shapes::{generate_shape, ShapeKind};
pub use rotation::{rotate, RotationState};
pub use cross_section::CrossSection;

// Re-export commonly used types from hyperviz_math for convenience
pub use hyperviz_math::{Axis, Dimension, HyperVector, ProjectionParams, RotationPlane, Vec4, Vec5};
