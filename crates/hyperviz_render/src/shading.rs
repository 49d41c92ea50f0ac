//! Per-vertex colour hints
//!
//! Colours are a pure function of the shape's base colour and the projected
//! position:
//!
//! ```text
//! intensity = (sin(5x) + sin(5y) + sin(5z)) / 3
//! hue       = base.hue       + intensity * 0.1
//! lightness = base.lightness + intensity * 0.2
//! ```

use hyperviz_core::ShapeKind;

/// A colour in HSL space, each component in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Neutral grey used for polytopes without a shape kind
    pub const NEUTRAL: Self = Self::new(0.0, 0.0, 0.6);

    /// Convert to opaque RGBA
    ///
    /// Hue wraps around; saturation and lightness are clamped to [0, 1].
    pub fn to_rgba(self) -> [f32; 4] {
        let h = self.hue.rem_euclid(1.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return [l, l, l, 1.0];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            1.0,
        ]
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Base colour of each shape
pub fn base_color(kind: ShapeKind) -> Hsl {
    match kind {
        ShapeKind::Tesseract => Hsl::new(0.5, 0.8, 0.5),        // cyan
        ShapeKind::Pentachoron => Hsl::new(0.83, 0.7, 0.55),    // magenta
        ShapeKind::Hyperoctahedron => Hsl::new(0.12, 0.85, 0.5), // amber
        ShapeKind::Simplex5D => Hsl::new(0.33, 0.7, 0.5),       // green
    }
}

/// Position-dependent intensity in [-1, 1]
#[inline]
pub fn intensity(position: [f32; 3]) -> f32 {
    let [x, y, z] = position;
    ((5.0 * x).sin() + (5.0 * y).sin() + (5.0 * z).sin()) / 3.0
}

/// Colour hint for a projected vertex
pub fn shade(base: Hsl, position: [f32; 3]) -> [f32; 4] {
    let i = intensity(position);
    Hsl::new(base.hue + i * 0.1, base.saturation, base.lightness + i * 0.2).to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_rgba(a: [f32; 4], b: [f32; 4]) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < EPSILON, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_hsl_primaries() {
        assert_rgba(Hsl::new(0.0, 1.0, 0.5).to_rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_rgba(Hsl::new(1.0 / 3.0, 1.0, 0.5).to_rgba(), [0.0, 1.0, 0.0, 1.0]);
        assert_rgba(Hsl::new(2.0 / 3.0, 1.0, 0.5).to_rgba(), [0.0, 0.0, 1.0, 1.0]);
        assert_rgba(Hsl::new(0.5, 1.0, 0.5).to_rgba(), [0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsl_grey_and_clamp() {
        assert_rgba(Hsl::new(0.3, 0.0, 0.25).to_rgba(), [0.25, 0.25, 0.25, 1.0]);
        assert_rgba(Hsl::new(0.3, 0.5, 1.7).to_rgba(), [1.0, 1.0, 1.0, 1.0]);
        // hue wraps
        assert_rgba(Hsl::new(1.0, 1.0, 0.5).to_rgba(), Hsl::new(0.0, 1.0, 0.5).to_rgba());
        assert_rgba(Hsl::new(-0.5, 1.0, 0.5).to_rgba(), Hsl::new(0.5, 1.0, 0.5).to_rgba());
    }

    #[test]
    fn test_intensity_at_origin_is_zero() {
        assert_eq!(intensity([0.0, 0.0, 0.0]), 0.0);
        let base = base_color(ShapeKind::Tesseract);
        assert_rgba(shade(base, [0.0; 3]), base.to_rgba());
    }

    #[test]
    fn test_intensity_formula() {
        let p = [0.1, -0.2, 0.3];
        let expected = ((0.5f32).sin() + (-1.0f32).sin() + (1.5f32).sin()) / 3.0;
        assert!((intensity(p) - expected).abs() < EPSILON);
        assert!(intensity([0.314159, 0.314159, 0.314159]) > 0.99);
    }

    #[test]
    fn test_shade_offsets_base() {
        let base = Hsl::new(0.5, 0.8, 0.5);
        let p = [0.2, 0.4, -0.1];
        let i = intensity(p);
        let expected = Hsl::new(0.5 + i * 0.1, 0.8, 0.5 + i * 0.2).to_rgba();
        assert_rgba(shade(base, p), expected);
    }

    #[test]
    fn test_shapes_have_distinct_bases() {
        let bases: Vec<_> = ShapeKind::ALL.iter().map(|&k| base_color(k).to_rgba()).collect();
        for i in 0..bases.len() {
            for j in (i + 1)..bases.len() {
                assert_ne!(bases[i], bases[j]);
            }
        }
    }
}
