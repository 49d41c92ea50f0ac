//! Hyperdimensional Mathematics Library
//!
//! This crate provides the vector, axis and projection primitives shared by
//! the hyperviz geometry engine.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec5`] - 5D vector with x, y, z, w, v components
//! - [`HyperVector`] - A vertex of either dimensionality
//! - [`Axis`] / [`Dimension`] - Coordinate axis labels and supported dimensions
//! - [`RotationPlane`] - The coordinate planes rotations happen in
//!
//! ## Projection
//!
//! - [`ProjectionParams`] - Iterated perspective division down to 3D

mod vec4;
mod vec5;
mod axis;
mod plane;
pub mod hyper_vector;
pub mod projection;

pub use vec4::Vec4;
pub use vec5::Vec5;
pub use axis::{Axis, Dimension};
pub use plane::RotationPlane;
pub use hyper_vector::HyperVector;
pub use projection::{ProjectionParams, MIN_PROJECTION_DISTANCE};
