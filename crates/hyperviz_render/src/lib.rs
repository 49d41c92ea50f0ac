//! Geometry pipeline for the hyperviz engine
//!
//! This crate turns a polytope plus view parameters into the flat buffers
//! consumed by a rendering layer.
//!
//! ## Key Components
//!
//! - [`pipeline::build_renderable`] - One-shot generate → rotate → project → resolve
//! - [`pipeline::GeometryPipeline`] - Same, keeping the polytope between builds
//! - [`renderable::RenderableGeometry`] - Line, point and triangle buffers
//! - [`layers::RenderLayers`] - Which buffers a build fills
//! - [`shading`] - Per-vertex colour hints

pub mod types;
pub mod layers;
pub mod shading;
pub mod renderable;
pub mod pipeline;

pub use types::Vertex3D;
pub use layers::RenderLayers;
pub use shading::{base_color, shade, Hsl};
pub use renderable::RenderableGeometry;
pub use pipeline::{
    build_polytope, build_renderable, build_renderable_named, GeometryPipeline, PipelineParams,
    MIN_SCALE,
};
