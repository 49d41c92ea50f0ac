//! Hyperviz - headless frame driver
//!
//! Loads configuration, then runs the viewer for a fixed number of frames:
//! auto-rotation advances the angles and the geometry system rebuilds the
//! buffers a renderer would upload.

use hyperviz::config::AppConfig;
use hyperviz::systems::{AnimationSystem, GeometrySystem};
use hyperviz::viewer::ViewerState;

/// Main application state
struct App {
    config: AppConfig,
    viewer: ViewerState,
    animation: AnimationSystem,
    geometry: GeometrySystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let viewer = ViewerState::from_config(&config);
        let animation = AnimationSystem::from_config(&config.animation);
        let geometry = GeometrySystem::new(&viewer);

        log::info!(
            "Viewing {} ({}), projection distance {}, scale {}",
            viewer.shape(),
            viewer.dimension(),
            viewer.projection_distance(),
            viewer.scale()
        );
        if let Some(section) = viewer.cross_section() {
            log::info!(
                "Cross-section on {} at {} (half-width {})",
                section.axis,
                section.position,
                section.thickness
            );
        }

        Self {
            config,
            viewer,
            animation,
            geometry,
        }
    }

    /// Advance one frame
    fn frame(&mut self, index: u32) {
        let dt = self.config.run.frame_dt;

        if let Err(e) = self.animation.update(dt, &mut self.viewer) {
            log::error!("Frame {}: animation failed: {}", index, e);
        }

        match self.geometry.update(&mut self.viewer) {
            Ok(true) => {
                let geom = self.geometry.geometry();
                log::debug!(
                    "Frame {}: {} segments, {} points, {} triangles ({} bytes)",
                    index,
                    geom.segment_count(),
                    geom.point_count(),
                    geom.triangle_count(),
                    geom.line_bytes().len() + geom.point_bytes().len() + geom.triangle_bytes().len()
                );
            }
            Ok(false) => {}
            Err(e) => log::error!("Frame {}: geometry build failed: {}", index, e),
        }
    }

    fn run(&mut self) {
        let frames = self.config.run.frames;
        for index in 0..frames {
            self.frame(index);
        }

        let geom = self.geometry.geometry();
        log::info!(
            "Ran {} frames ({} builds), final phase {:.3}: {} segments, {} points, {} triangles",
            frames,
            self.geometry.build_count(),
            self.animation.time(),
            geom.segment_count(),
            geom.point_count(),
            geom.triangle_count()
        );
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    App::new(config).run();
}
