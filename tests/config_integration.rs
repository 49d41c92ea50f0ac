//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use hyperviz::config::AppConfig;
use hyperviz::systems::GeometrySystem;
use hyperviz::viewer::ViewerState;
use hyperviz_core::{Axis, Dimension, ShapeKind};
use serial_test::serial;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hyperviz-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.view.shape, ShapeKind::Tesseract);
    assert_eq!(config.view.projection_distance, 4.0);
    assert!(config.view.wireframe);
    assert!(!config.cross_section.enabled);
    assert_eq!(config.animation.speed, 0.5);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_VIEW__SHAPE", "pentachoron");
    std::env::set_var("HV_VIEW__PROJECTION_DISTANCE", "6.5");
    let config = AppConfig::load();
    std::env::remove_var("HV_VIEW__SHAPE");
    std::env::remove_var("HV_VIEW__PROJECTION_DISTANCE");

    let config = config.unwrap();
    assert_eq!(config.view.shape, ShapeKind::Pentachoron);
    assert_eq!(config.view.projection_distance, 6.5);
}

#[test]
#[serial]
fn test_invalid_env_value_is_an_error() {
    std::env::set_var("HV_VIEW__SHAPE", "dodecahedron");
    let result = AppConfig::load();
    std::env::remove_var("HV_VIEW__SHAPE");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[view]\nshape = \"tesseract\"\nscale = 2.0\n",
    )
    .unwrap();
    fs::write(
        dir.join("user.toml"),
        "[view]\nshape = \"simplex5d\"\n\n[cross_section]\nenabled = true\naxis = \"v\"\nposition = 0.25\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).ok();

    assert_eq!(config.view.shape, ShapeKind::Simplex5D);
    assert_eq!(config.view.scale, 2.0);
    let section = config.cross_section.to_cross_section().unwrap();
    assert_eq!(section.axis, Axis::V);
    assert_eq!(section.position, 0.25);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.view.shape, ShapeKind::Tesseract);
    assert_eq!(config.run.frames, 120);
}

#[test]
#[serial]
fn test_config_drives_first_build() {
    let dir = scratch_dir("build");
    fs::write(
        dir.join("default.toml"),
        "[view]\nshape = \"hyperoctahedron\"\nshow_faces = true\nshow_vertices = false\n",
    )
    .unwrap();
    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).ok();

    let mut viewer = ViewerState::from_config(&config);
    assert_eq!(viewer.dimension(), Dimension::Four);
    let mut system = GeometrySystem::new(&viewer);
    assert!(system.update(&mut viewer).unwrap());

    let geom = system.geometry();
    assert_eq!(geom.segment_count(), 24);
    assert_eq!(geom.triangle_count(), 32);
    assert_eq!(geom.point_count(), 0);
}
