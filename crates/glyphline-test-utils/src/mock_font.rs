//! Mock implementation of Font for testing.
//!
//! This module provides a font that reports simple box metrics and records every
//! call instead of rasterizing anything.

use glyphline_core::alloc::HashMap;
use glyphline_core::geometry::BoundingBox;
use glyphline_core::math::Vec3;
use glyphline_core::text::{Font, RenderMode};
use parking_lot::Mutex;

/// Records a font call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FontCall {
    BBox { run: String },
    Advance { run: String },
    Render { run: String, pen: Vec3, mode: RenderMode },
    PreRender,
    PostRender,
}

/// Box-metric font that records calls.
///
/// Every glyph advances `default_advance` (10.0 unless overridden per codepoint)
/// and its box spans the full advance, from `descent` below the baseline to
/// `ascent` above it. Whitespace glyphs have zero-width boxes, like real outline
/// fonts, but still advance the pen.
///
/// # Example
///
/// ```rust
/// use glyphline_core::text::Font;
/// use glyphline_test_utils::MockFont;
///
/// let font = MockFont::new().with_advance('W', 16.0);
/// assert_eq!(font.advance(&['W', 'i']), 26.0);
/// assert_eq!(font.bbox(&['a', ' ']).width(), 10.0);
/// ```
pub struct MockFont {
    /// Recorded calls for verification
    calls: Mutex<Vec<FontCall>>,
    advances: HashMap<char, f32>,
    default_advance: f32,
    ascent: f32,
    descent: f32,
    line_height: f32,
}

impl MockFont {
    /// Create a mock with 10.0 advances, ascent 8, descent 2 and line height 20.
    pub fn new() -> Self {
        Self::monospace(10.0)
    }

    /// Create a mock where every glyph advances `advance`.
    pub fn monospace(advance: f32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            advances: HashMap::new(),
            default_advance: advance,
            ascent: 8.0,
            descent: 2.0,
            line_height: 20.0,
        }
    }

    /// Override the advance of one codepoint.
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Advance of a single glyph.
    pub fn glyph_advance(&self, ch: char) -> f32 {
        self.advances
            .get(&ch)
            .copied()
            .unwrap_or(self.default_advance)
    }

    /// Width of a single glyph's box.
    pub fn glyph_width(&self, ch: char) -> f32 {
        if ch.is_whitespace() {
            0.0
        } else {
            self.glyph_advance(ch)
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<FontCall> {
        self.calls.lock().clone()
    }

    /// Glyphs drawn so far, with the pen position each was drawn at.
    pub fn rendered(&self) -> Vec<(char, Vec3)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                FontCall::Render { run, pen, .. } => run.chars().next().map(|ch| (ch, *pen)),
                _ => None,
            })
            .collect()
    }

    /// Count advance queries.
    pub fn count_advances(&self) -> usize {
        self.count(|call| matches!(call, FontCall::Advance { .. }))
    }

    /// Count bounding box queries.
    pub fn count_bboxes(&self) -> usize {
        self.count(|call| matches!(call, FontCall::BBox { .. }))
    }

    /// Count render calls.
    pub fn count_renders(&self) -> usize {
        self.count(|call| matches!(call, FontCall::Render { .. }))
    }

    pub fn count_pre_renders(&self) -> usize {
        self.count(|call| matches!(call, FontCall::PreRender))
    }

    pub fn count_post_renders(&self) -> usize {
        self.count(|call| matches!(call, FontCall::PostRender))
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn count(&self, predicate: impl Fn(&FontCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: FontCall) {
        self.calls.lock().push(call);
    }
}

impl Default for MockFont {
    fn default() -> Self {
        Self::new()
    }
}

impl Font for MockFont {
    fn bbox(&self, run: &[char]) -> BoundingBox {
        self.record(FontCall::BBox {
            run: run.iter().collect(),
        });

        let Some((last, prefix)) = run.split_last() else {
            return BoundingBox::default();
        };
        let right: f32 = prefix.iter().map(|&ch| self.glyph_advance(ch)).sum::<f32>()
            + self.glyph_width(*last);
        BoundingBox::from_extents(0.0, -self.descent, right, self.ascent)
    }

    fn advance(&self, run: &[char]) -> f32 {
        self.record(FontCall::Advance {
            run: run.iter().collect(),
        });
        run.iter().map(|&ch| self.glyph_advance(ch)).sum()
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn render(&self, run: &[char], pen: Vec3, mode: RenderMode) -> Vec3 {
        self.record(FontCall::Render {
            run: run.iter().collect(),
            pen,
            mode,
        });
        let advance: f32 = run.iter().map(|&ch| self.glyph_advance(ch)).sum();
        pen + Vec3::new(advance, 0.0, 0.0)
    }

    fn pre_render(&self) {
        self.record(FontCall::PreRender);
    }

    fn post_render(&self) {
        self.record(FontCall::PostRender);
    }
}
