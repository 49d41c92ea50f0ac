//! Hyperviz - interactive 4D and 5D polytope viewer
//!
//! Application layer over the geometry crates: configuration, the viewer
//! state the UI edits, and the per-frame systems that animate it and rebuild
//! renderable geometry.

pub mod config;
pub mod systems;
pub mod viewer;

pub use config::{AppConfig, ConfigError};
pub use viewer::{DirtyFlags, ViewerState};
