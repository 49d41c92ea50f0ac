//! Plane rotation engine
//!
//! A [`RotationState`] assigns an angle (radians, unconstrained) to every
//! rotation plane of a dimension. [`rotate`] applies the non-zero angles to
//! each vertex in canonical plane order: xy, xz, xw, [xv,] yz, yw, [yv,] zw,
//! [zv,] [wv]. Plane rotations do not commute, so the order is fixed.

use hyperviz_math::{Dimension, HyperVector, RotationPlane};
use crate::GeometryError;

/// Angles for each rotation plane of a dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    dimension: Dimension,
    /// Indexed by [`RotationPlane::index`]; planes outside `dimension` stay 0
    angles: [f32; RotationPlane::COUNT],
}

impl RotationState {
    /// The identity state: every plane at angle 0
    pub fn identity(dimension: Dimension) -> Self {
        Self {
            dimension,
            angles: [0.0; RotationPlane::COUNT],
        }
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Angle for a plane (0 for planes not in this dimension)
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        self.angles[plane.index()]
    }

    /// Set the angle for a plane
    ///
    /// Fails with [`GeometryError::DimensionMismatch`] when the plane needs a
    /// V axis and this is a 4D state.
    pub fn set(&mut self, plane: RotationPlane, angle: f32) -> Result<(), GeometryError> {
        if !plane.exists_in(self.dimension) {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension,
                found: Dimension::Five,
            });
        }
        self.angles[plane.index()] = angle;
        Ok(())
    }

    /// Set the angle for a plane given its name (`"xy"`, `"wv"`, ...)
    pub fn set_named(&mut self, name: &str, angle: f32) -> Result<(), GeometryError> {
        let plane = RotationPlane::from_name(name)
            .ok_or_else(|| GeometryError::UnknownPlane(name.to_string()))?;
        self.set(plane, angle)
    }

    /// Builder form of [`RotationState::set`]
    pub fn with(mut self, plane: RotationPlane, angle: f32) -> Result<Self, GeometryError> {
        self.set(plane, angle)?;
        Ok(self)
    }

    /// Build a state from `(plane name, angle)` pairs
    pub fn from_named<'a, I>(dimension: Dimension, pairs: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let mut state = Self::identity(dimension);
        for (name, angle) in pairs {
            state.set_named(name, angle)?;
        }
        Ok(state)
    }

    /// `(plane, angle)` for every plane of the dimension, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f32)> + '_ {
        RotationPlane::planes_for(self.dimension)
            .iter()
            .map(move |&plane| (plane, self.angle(plane)))
    }

    /// True when every angle is exactly zero
    pub fn is_identity(&self) -> bool {
        self.angles.iter().all(|&a| a == 0.0)
    }

    /// Reset every angle to zero
    pub fn reset(&mut self) {
        self.angles = [0.0; RotationPlane::COUNT];
    }
}

/// Rotate a vertex list by a rotation state
///
/// Returns a new vertex list; the input is not modified. Zero angles are
/// skipped, so the identity state returns the vertices bit-for-bit.
///
/// Fails with [`GeometryError::DimensionMismatch`] if the state or any
/// vertex disagrees with `dimension`.
pub fn rotate(
    vertices: &[HyperVector],
    dimension: Dimension,
    state: &RotationState,
) -> Result<Vec<HyperVector>, GeometryError> {
    if state.dimension() != dimension {
        return Err(GeometryError::DimensionMismatch {
            expected: dimension,
            found: state.dimension(),
        });
    }

    let active: Vec<(RotationPlane, f32, f32)> = state
        .iter()
        .filter(|&(_, angle)| angle != 0.0)
        .map(|(plane, angle)| {
            let (sin, cos) = angle.sin_cos();
            (plane, sin, cos)
        })
        .collect();

    vertices
        .iter()
        .map(|vertex| {
            if vertex.dimension() != dimension {
                return Err(GeometryError::DimensionMismatch {
                    expected: dimension,
                    found: vertex.dimension(),
                });
            }
            active.iter().try_fold(*vertex, |v, &(plane, sin, cos)| {
                v.rotate_in_plane(plane, sin, cos).ok_or(GeometryError::DimensionMismatch {
                    expected: dimension,
                    found: v.dimension(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeKind;
    use hyperviz_math::{Axis, Vec4, Vec5};
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: &[HyperVector], b: &[HyperVector]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            for axis in Axis::ALL {
                match (p.get(axis), q.get(axis)) {
                    (Some(x), Some(y)) => assert!((x - y).abs() < EPSILON, "{:?} vs {:?}", p, q),
                    (None, None) => {}
                    _ => panic!("dimension differs"),
                }
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for kind in ShapeKind::ALL {
            let p = kind.generate();
            let dim = kind.native_dimension();
            let out = rotate(p.vertices(), dim, &RotationState::identity(dim)).unwrap();
            assert_eq!(out.as_slice(), p.vertices());
        }
    }

    #[test]
    fn test_single_plane_round_trip() {
        for kind in ShapeKind::ALL {
            let p = kind.generate();
            let dim = kind.native_dimension();
            for &plane in RotationPlane::planes_for(dim) {
                let forward = RotationState::identity(dim).with(plane, 0.83).unwrap();
                let back = RotationState::identity(dim).with(plane, -0.83).unwrap();
                let rotated = rotate(p.vertices(), dim, &forward).unwrap();
                let restored = rotate(&rotated, dim, &back).unwrap();
                assert_close(&restored, p.vertices());
            }
        }
    }

    #[test]
    fn test_quarter_turn_xw() {
        let state = RotationState::identity(Dimension::Four)
            .with(RotationPlane::XW, FRAC_PI_2)
            .unwrap();
        let out = rotate(&[Vec4::X.into()], Dimension::Four, &state).unwrap();
        assert_close(&out, &[Vec4::W.into()]);
    }

    #[test]
    fn test_canonical_order_applied() {
        // xy first: X -> Y, then yz: Y -> Z. The reverse order would leave X -> Y.
        let state = RotationState::identity(Dimension::Four)
            .with(RotationPlane::YZ, FRAC_PI_2)
            .unwrap()
            .with(RotationPlane::XY, FRAC_PI_2)
            .unwrap();
        let out = rotate(&[Vec4::X.into()], Dimension::Four, &state).unwrap();
        assert_close(&out, &[Vec4::Z.into()]);
    }

    #[test]
    fn test_5d_order_includes_v_planes() {
        // xv (X -> V) is applied before wv (W -> V, V -> -W)
        let state = RotationState::identity(Dimension::Five)
            .with(RotationPlane::WV, FRAC_PI_2)
            .unwrap()
            .with(RotationPlane::XV, FRAC_PI_2)
            .unwrap();
        let out = rotate(&[Vec5::X.into()], Dimension::Five, &state).unwrap();
        assert_close(&out, &[HyperVector::from(Vec5::new(0.0, 0.0, 0.0, -1.0, 0.0))]);
    }

    #[test]
    fn test_state_dimension_mismatch() {
        let p = ShapeKind::Tesseract.generate();
        let err = rotate(p.vertices(), Dimension::Four, &RotationState::identity(Dimension::Five))
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::DimensionMismatch { expected: Dimension::Four, found: Dimension::Five }
        );
    }

    #[test]
    fn test_vertex_dimension_mismatch() {
        let p = ShapeKind::Simplex5D.generate();
        let err = rotate(p.vertices(), Dimension::Four, &RotationState::identity(Dimension::Four))
            .unwrap_err();
        assert!(matches!(err, GeometryError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_set_5d_plane_on_4d_state() {
        let mut state = RotationState::identity(Dimension::Four);
        assert!(matches!(
            state.set(RotationPlane::ZV, 1.0),
            Err(GeometryError::DimensionMismatch { .. })
        ));
        assert!(state.is_identity());
    }

    #[test]
    fn test_set_named() {
        let mut state = RotationState::identity(Dimension::Five);
        state.set_named("yv", 0.5).unwrap();
        assert_eq!(state.angle(RotationPlane::YV), 0.5);
        assert_eq!(
            state.set_named("qq", 1.0),
            Err(GeometryError::UnknownPlane("qq".to_string()))
        );
    }

    #[test]
    fn test_from_named_and_iter() {
        let state = RotationState::from_named(Dimension::Four, [("xw", 1.0), ("yz", 0.7)]).unwrap();
        let angles: Vec<_> = state.iter().collect();
        assert_eq!(angles.len(), 6);
        assert_eq!(angles[2], (RotationPlane::XW, 1.0));
        assert_eq!(angles[3], (RotationPlane::YZ, 0.7));
        assert!(!state.is_identity());
    }

    #[test]
    fn test_reset() {
        let mut state = RotationState::identity(Dimension::Five)
            .with(RotationPlane::WV, 2.0)
            .unwrap();
        state.reset();
        assert_eq!(state, RotationState::identity(Dimension::Five));
    }

    #[test]
    fn test_input_not_modified() {
        let p = ShapeKind::Pentachoron.generate();
        let before = p.clone();
        let state = RotationState::identity(Dimension::Four)
            .with(RotationPlane::ZW, 1.2)
            .unwrap();
        let _ = rotate(p.vertices(), Dimension::Four, &state).unwrap();
        assert_eq!(p, before);
    }
}
