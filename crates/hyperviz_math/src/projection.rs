//! Perspective projection from 4D/5D down to 3D
//!
//! Each coordinate beyond z contributes one independent perspective factor
//! `d / (d + c)`. The factors are multiplied together and applied uniformly
//! to x, y and z:
//!
//! - 4D: `factor = d / (d + w)`
//! - 5D: `factor = d / (d + w) · d / (d + v)`

use serde::{Serialize, Deserialize};
use crate::HyperVector;

/// Smallest distance magnitude used for projection
pub const MIN_PROJECTION_DISTANCE: f32 = 0.1;

/// Projection parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Viewer distance controlling perspective strength
    pub distance: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self { distance: 4.0 }
    }
}

impl ProjectionParams {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }

    /// Distance actually used: `max(|d|, 0.1)`
    ///
    /// A NaN distance falls back to the floor as well.
    #[inline]
    pub fn safe_distance(&self) -> f32 {
        self.distance.abs().max(MIN_PROJECTION_DISTANCE)
    }

    /// Combined perspective factor for a vertex
    fn factor(&self, vertex: &HyperVector) -> f32 {
        let d = self.safe_distance();
        vertex
            .extra_components()
            .iter()
            .fold(1.0, |factor, &c| factor * (d / (d + c)))
    }

    /// Project a vertex to 3D, substituting the origin for malformed input
    ///
    /// A vertex with any non-finite coordinate projects to `[0, 0, 0]`. The
    /// output itself may still be non-finite (e.g. `w == -d`); callers that
    /// resolve topology should use [`ProjectionParams::try_project`] instead.
    pub fn project(&self, vertex: &HyperVector) -> [f32; 3] {
        if !vertex.is_finite() {
            return [0.0; 3];
        }
        let f = self.factor(vertex);
        let [x, y, z] = vertex.xyz();
        [x * f, y * f, z * f]
    }

    /// Project a vertex to 3D, returning `None` when either the input or the
    /// projected point is non-finite
    pub fn try_project(&self, vertex: &HyperVector) -> Option<[f32; 3]> {
        if !vertex.is_finite() {
            return None;
        }
        let p = self.project(vertex);
        p.iter().all(|c| c.is_finite()).then_some(p)
    }
}

/// Project a vertex with the given distance
///
/// Shorthand for `ProjectionParams::new(distance).project(vertex)`.
#[inline]
pub fn project(vertex: &HyperVector, distance: f32) -> [f32; 3] {
    ProjectionParams::new(distance).project(vertex)
}
