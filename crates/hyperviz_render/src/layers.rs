//! Output layer selection

use bitflags::bitflags;

bitflags! {
    /// Which output buffers a build fills
    ///
    /// Mirrors the wireframe / show-vertices / show-faces toggles of the
    /// viewer. Disabled layers come back empty.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderLayers: u8 {
        /// Edge line segments (wireframe)
        const LINES = 1 << 0;
        /// Vertex points
        const POINTS = 1 << 1;
        /// Face triangles
        const FACES = 1 << 2;
    }
}

impl Default for RenderLayers {
    fn default() -> Self {
        RenderLayers::LINES | RenderLayers::POINTS
    }
}

impl RenderLayers {
    /// Build from the three viewer toggles
    pub fn from_toggles(wireframe: bool, vertices: bool, faces: bool) -> Self {
        let mut layers = RenderLayers::empty();
        layers.set(RenderLayers::LINES, wireframe);
        layers.set(RenderLayers::POINTS, vertices);
        layers.set(RenderLayers::FACES, faces);
        layers
    }
}
