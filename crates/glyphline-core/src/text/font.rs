use bitflags::bitflags;

use crate::geometry::BoundingBox;
use crate::math::Vec3;

bitflags! {
    /// Which faces of a glyph a font backend should draw.
    ///
    /// Flat (bitmap, texture, outline) fonts only look at `FRONT`; extruded fonts
    /// can draw any combination. Layouts pass the mode through untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderMode: u32 {
        const FRONT = 0x0001;
        const BACK = 0x0002;
        const SIDE = 0x0004;
        const ALL = Self::FRONT.bits() | Self::BACK.bits() | Self::SIDE.bits();
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::ALL
    }
}

/// A font backend that can measure and draw runs of codepoints.
///
/// Layouts never own a font. They borrow one for measurement while breaking lines
/// and for drawing while rendering, so every method takes `&self`; backends that
/// keep per-draw state (bound textures, batched vertices) use interior mutability.
///
/// Runs are slices of decoded codepoints laid out from the origin: `bbox(&['a', 'b'])`
/// is the box of "ab" with the pen starting at `(0, 0, 0)`.
pub trait Font {
    /// Bounding box of `run` laid out from the origin.
    fn bbox(&self, run: &[char]) -> BoundingBox;

    /// Horizontal distance from the origin of the first glyph to where the glyph
    /// after `run` would start.
    fn advance(&self, run: &[char]) -> f32;

    /// Distance between two consecutive baselines at a line spacing of 1.0.
    fn line_height(&self) -> f32;

    /// Draw `run` starting at `pen` and return the pen position after the run.
    fn render(&self, run: &[char], pen: Vec3, mode: RenderMode) -> Vec3;

    /// Called once before a batch of `render` calls.
    fn pre_render(&self) {}

    /// Called once after a batch of `render` calls, always paired with `pre_render`.
    fn post_render(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_all_contains_faces() {
        assert!(RenderMode::ALL.contains(RenderMode::FRONT));
        assert!(RenderMode::ALL.contains(RenderMode::BACK | RenderMode::SIDE));
        assert_eq!(RenderMode::default(), RenderMode::ALL);
    }
}
