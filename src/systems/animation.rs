//! Auto-rotation system
//!
//! Advances a single phase angle each frame and writes it into both rotation
//! states, so switching between 4D and 5D shapes keeps the motion continuous:
//! - 4D: `xw = t`, `yz = 0.7 t`
//! - 5D: `xw = t`, `yv = 0.7 t`

use std::f32::consts::TAU;
use hyperviz_core::{Dimension, GeometryError, RotationPlane};
use crate::config::AnimationConfig;
use crate::viewer::ViewerState;

/// Phase advance per second at speed 1
const PHASE_RATE: f32 = 0.3;
/// Ratio of the secondary plane angle to the primary one
const SECONDARY_RATIO: f32 = 0.7;

/// Drives the automatic rotation of the viewer
#[derive(Clone, Debug)]
pub struct AnimationSystem {
    time: f32,
    /// Speed multiplier; zero or negative pauses
    pub speed: f32,
    /// Whether auto-rotation runs at all
    pub enabled: bool,
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl AnimationSystem {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            time: 0.0,
            speed: config.speed,
            enabled: config.auto_rotate,
        }
    }

    /// Current phase in `[0, 2π)`
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Restart from phase zero
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advance by `dt` seconds and update the viewer's rotation angles
    ///
    /// Returns whether the viewer was touched.
    pub fn update(&mut self, dt: f32, viewer: &mut ViewerState) -> Result<bool, GeometryError> {
        if !self.enabled || self.speed <= 0.0 {
            return Ok(false);
        }

        self.time = (self.time + dt * self.speed * PHASE_RATE).rem_euclid(TAU);
        let t = self.time;

        viewer.set_angle_in(Dimension::Four, RotationPlane::XW, t)?;
        viewer.set_angle_in(Dimension::Four, RotationPlane::YZ, t * SECONDARY_RATIO)?;
        viewer.set_angle_in(Dimension::Five, RotationPlane::XW, t)?;
        viewer.set_angle_in(Dimension::Five, RotationPlane::YV, t * SECONDARY_RATIO)?;
        Ok(true)
    }
}
