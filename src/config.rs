//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use hyperviz_core::{Axis, CrossSection, ShapeKind};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape and view toggles
    #[serde(default)]
    pub view: ViewConfig,
    /// Auto-rotation
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Optional slab cross-section
    #[serde(default)]
    pub cross_section: CrossSectionConfig,
    /// Headless frame driver
    #[serde(default)]
    pub run: RunConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HV_VIEW__SHAPE=pentachoron -> view.shape = "pentachoron"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape and view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Shape shown at startup
    pub shape: ShapeKind,
    /// Perspective distance for the N-to-3 projection
    pub projection_distance: f32,
    /// Uniform output scale
    pub scale: f32,
    /// Emit edge line segments
    pub wireframe: bool,
    /// Emit vertex points
    pub show_vertices: bool,
    /// Emit face triangles
    pub show_faces: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Tesseract,
            projection_distance: 4.0,
            scale: 1.0,
            wireframe: true,
            show_vertices: true,
            show_faces: false,
        }
    }
}

/// Auto-rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Advance rotation angles every frame
    pub auto_rotate: bool,
    /// Animation speed multiplier
    pub speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            speed: 0.5,
        }
    }
}

/// Cross-section configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossSectionConfig {
    pub enabled: bool,
    /// Axis the slab is perpendicular to
    pub axis: Axis,
    /// Slab centre
    pub position: f32,
    /// Slab half-width
    pub thickness: f32,
}

impl Default for CrossSectionConfig {
    fn default() -> Self {
        let section = CrossSection::default();
        Self {
            enabled: false,
            axis: section.axis,
            position: section.position,
            thickness: section.thickness,
        }
    }
}

impl CrossSectionConfig {
    /// The configured cross-section, if enabled
    pub fn to_cross_section(&self) -> Option<CrossSection> {
        self.enabled
            .then(|| CrossSection::new(self.axis, self.position, self.thickness))
    }
}

/// Headless driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated seconds per frame
    pub frame_dt: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            frame_dt: 1.0 / 60.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
