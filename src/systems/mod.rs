//! Application systems
//!
//! Per-frame systems driven by the main loop.

mod animation;
mod geometry;

pub use animation::AnimationSystem;
pub use geometry::GeometrySystem;
