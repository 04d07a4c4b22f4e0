//! Wrapping, caching and justifying layout over a [`Font`].
//!
//! [`SimpleLayout`] breaks text into lines no longer than its line length, keeps
//! the result in a string cache, and either measures or draws the cached lines.
//! Both paths share the cache: measuring a string and then rendering it breaks
//! the lines once.
//!
//! ```
//! use std::sync::Arc;
//! use glyphline_core::geometry::BoundingBox;
//! use glyphline_core::math::Vec3;
//! use glyphline_core::text::{Font, RenderMode};
//! use glyphline_text::{SimpleLayout, TextAlign};
//!
//! struct Monospace;
//!
//! impl Font for Monospace {
//!     fn bbox(&self, run: &[char]) -> BoundingBox {
//!         BoundingBox::from_extents(0.0, -2.0, 8.0 * run.len() as f32, 10.0)
//!     }
//!     fn advance(&self, run: &[char]) -> f32 {
//!         8.0 * run.len() as f32
//!     }
//!     fn line_height(&self) -> f32 {
//!         12.0
//!     }
//!     fn render(&self, run: &[char], pen: Vec3, _mode: RenderMode) -> Vec3 {
//!         pen + Vec3::new(self.advance(run), 0.0, 0.0)
//!     }
//! }
//!
//! let font = Arc::new(Monospace);
//! let mut layout = SimpleLayout::new();
//! layout.set_font(&font);
//! layout.set_line_length(80.0);
//! layout.set_alignment(TextAlign::Center);
//!
//! let bounds = layout.measure_str("centered text that wraps", Vec3::ZERO).unwrap();
//! assert!(bounds.width() <= 80.0);
//! assert_eq!(layout.lines().len(), 3);
//! ```

mod breaker;
mod render;

use std::sync::{Arc, Weak};

use glyphline_core::geometry::BoundingBox;
use glyphline_core::math::Vec3;
use glyphline_core::profiling::profile_function;
use glyphline_core::text::{Font, RenderMode};

use crate::cache::{CacheStats, LineRecord, StringCache};
use crate::encoding::{self, CodeUnit};
use crate::error::{LayoutError, LayoutResult};
use crate::text::{LayoutConfig, TextAlign};

/// A line-wrapping layout with a single-entry string cache.
///
/// The layout never owns its font: it keeps a weak reference and fails with
/// [`LayoutError::FontReleased`] once the owner drops it. Changing the font or any
/// [`LayoutConfig`] field invalidates the cache.
///
/// A layout is meant for one thread; use one layout per thread for concurrent work.
pub struct SimpleLayout {
    font: Option<Weak<dyn Font>>,
    config: LayoutConfig,
    cache: StringCache,
    stats: CacheStats,
}

impl SimpleLayout {
    /// Create a layout with the default configuration and no font.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        warn_on_line_length(config.line_length);
        Self {
            font: None,
            config,
            cache: StringCache::new(),
            stats: CacheStats::default(),
        }
    }

    // ========== Configuration ==========

    /// Use `font` for measuring and drawing. The layout only keeps a weak reference.
    pub fn set_font<F: Font + 'static>(&mut self, font: &Arc<F>) {
        let font: Arc<dyn Font> = font.clone();
        self.set_dyn_font(&font);
    }

    /// Like [`SimpleLayout::set_font`], for fonts already behind `dyn Font`.
    pub fn set_dyn_font(&mut self, font: &Arc<dyn Font>) {
        self.font = Some(Arc::downgrade(font));
        self.invalidate();
    }

    pub fn clear_font(&mut self) {
        self.font = None;
        self.invalidate();
    }

    /// The current font, if it is set and still alive.
    pub fn font(&self) -> Option<Arc<dyn Font>> {
        self.font.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_line_length(&mut self, length: f32) {
        warn_on_line_length(length);
        self.config.line_length = length;
        self.invalidate();
    }

    pub fn line_length(&self) -> f32 {
        self.config.line_length
    }

    pub fn set_alignment(&mut self, align: TextAlign) {
        self.config.alignment = align;
        self.invalidate();
    }

    pub fn alignment(&self) -> TextAlign {
        self.config.alignment
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.config.line_spacing = spacing;
        self.invalidate();
    }

    pub fn line_spacing(&self) -> f32 {
        self.config.line_spacing
    }

    /// Replace the whole configuration at once.
    pub fn set_config(&mut self, config: LayoutConfig) {
        warn_on_line_length(config.line_length);
        self.config = config;
        self.invalidate();
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // ========== Cache ==========

    /// Drop the cached line records; the next layout call breaks lines again.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    /// Line records of the most recent successful layout call. Empty after an
    /// invalidation.
    pub fn lines(&self) -> &[LineRecord] {
        if self.cache.is_valid() {
            self.cache.lines()
        } else {
            &[]
        }
    }

    /// Codepoints of each cached line, in order.
    pub fn line_runs(&self) -> impl Iterator<Item = &[char]> + '_ {
        let chars = self.cache.chars();
        self.lines().iter().map(move |line| &chars[line.range(chars.len())])
    }

    // ========== Layout ==========

    /// Bounding box of `text` laid out at `anchor`, without drawing anything.
    ///
    /// `len` is the number of code units to read; `None` reads up to a NUL terminator.
    /// Text without any visible line yields an empty box.
    pub fn measure<U: CodeUnit>(
        &mut self,
        text: &[U],
        len: Option<usize>,
        anchor: Vec3,
    ) -> LayoutResult<BoundingBox> {
        profile_function!();
        let font = self.prepare(text, len, anchor)?;
        Ok(render::measure_lines(
            font.as_ref(),
            self.cache.chars(),
            self.cache.lines(),
        ))
    }

    /// Draw `text` at `anchor` and return the pen position after the last line.
    ///
    /// The font's `pre_render` and `post_render` hooks bracket the draw calls.
    pub fn render<U: CodeUnit>(
        &mut self,
        text: &[U],
        len: Option<usize>,
        anchor: Vec3,
        mode: RenderMode,
    ) -> LayoutResult<Vec3> {
        profile_function!();
        let font = self.prepare(text, len, anchor)?;
        let lines = self.cache.lines();
        if lines.is_empty() {
            return Ok(anchor);
        }

        font.pre_render();
        let pen = render::render_lines(font.as_ref(), self.cache.chars(), lines, mode);
        font.post_render();

        Ok(pen)
    }

    /// [`SimpleLayout::measure`] for a string slice.
    pub fn measure_str(&mut self, text: &str, anchor: Vec3) -> LayoutResult<BoundingBox> {
        self.measure(text.as_bytes(), Some(text.len()), anchor)
    }

    /// [`SimpleLayout::render`] for a string slice.
    pub fn render_str(&mut self, text: &str, anchor: Vec3, mode: RenderMode) -> LayoutResult<Vec3> {
        self.render(text.as_bytes(), Some(text.len()), anchor, mode)
    }

    /// Make sure the cache holds line records for `text`, breaking lines if needed.
    fn prepare<U: CodeUnit>(
        &mut self,
        text: &[U],
        len: Option<usize>,
        anchor: Vec3,
    ) -> LayoutResult<Arc<dyn Font>> {
        let result = self.refresh(text, len, anchor);
        if result.is_err() {
            self.cache.invalidate();
        }
        result
    }

    fn refresh<U: CodeUnit>(
        &mut self,
        text: &[U],
        len: Option<usize>,
        anchor: Vec3,
    ) -> LayoutResult<Arc<dyn Font>> {
        let font = match &self.font {
            None => return Err(LayoutError::NoFont),
            Some(weak) => weak.upgrade().ok_or(LayoutError::FontReleased)?,
        };
        let units = encoding::resolve(text, len)?;

        if self.cache.matches(units) {
            self.stats.hits += 1;
            self.cache.rebase(anchor);
            tracing::trace!(lines = self.cache.lines().len(), "String cache hit");
            return Ok(font);
        }

        self.stats.misses += 1;
        self.cache.store(units)?;
        let (chars, lines) = self.cache.split_mut();
        breaker::break_lines(font.as_ref(), chars, &self.config, anchor, lines)?;
        self.cache.commit(U::ENCODING);

        tracing::debug!(
            encoding = %U::ENCODING,
            chars = self.cache.chars().len(),
            lines = self.cache.lines().len(),
            "String cache miss, lines rebuilt"
        );
        Ok(font)
    }
}

impl Default for SimpleLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_on_line_length(length: f32) {
    if !(length > 0.0) {
        tracing::warn!(
            line_length = length,
            "Non-positive line length, every glyph will start a new line"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphline_test_utils::MockFont;

    fn layout_with(font: &Arc<MockFont>) -> SimpleLayout {
        let mut layout = SimpleLayout::new();
        layout.set_font(font);
        layout
    }

    #[test]
    fn test_no_font() {
        let mut layout = SimpleLayout::new();
        assert_eq!(layout.measure_str("abc", Vec3::ZERO), Err(LayoutError::NoFont));
    }

    #[test]
    fn test_font_released() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);
        assert!(layout.font().is_some());

        drop(font);
        assert!(layout.font().is_none());
        assert_eq!(
            layout.render_str("abc", Vec3::ZERO, RenderMode::FRONT),
            Err(LayoutError::FontReleased)
        );
    }

    #[test]
    fn test_cache_hit_skips_breaking() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);

        layout.measure_str("hello world", Vec3::ZERO).unwrap();
        let advances = font.count_advances();
        assert_eq!(advances, 11);

        layout.measure_str("hello world", Vec3::ZERO).unwrap();
        assert_eq!(font.count_advances(), advances);
        assert_eq!(layout.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_setters_invalidate() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);

        let setters: [fn(&mut SimpleLayout); 4] = [
            |l| l.set_line_length(50.0),
            |l| l.set_alignment(TextAlign::Right),
            |l| l.set_line_spacing(2.0),
            |l| l.set_config(LayoutConfig::new()),
        ];
        for setter in setters {
            layout.measure_str("abc def", Vec3::ZERO).unwrap();
            assert!(!layout.lines().is_empty());
            setter(&mut layout);
            assert!(layout.lines().is_empty());
        }
        assert_eq!(layout.cache_stats().misses, 4);
    }

    #[test]
    fn test_set_font_invalidates() {
        let first = Arc::new(MockFont::new());
        let second = Arc::new(MockFont::new());
        let mut layout = layout_with(&first);

        layout.measure_str("abc", Vec3::ZERO).unwrap();
        layout.set_font(&second);
        assert!(layout.lines().is_empty());

        layout.measure_str("abc", Vec3::ZERO).unwrap();
        assert_eq!(second.count_advances(), 3);
    }

    #[test]
    fn test_error_invalidates_cache() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);

        layout.measure_str("abc", Vec3::ZERO).unwrap();
        let err = layout.measure(&[b'a', 0xFF], Some(2), Vec3::ZERO).unwrap_err();
        assert!(matches!(err, LayoutError::Decode { offset: 1, .. }));
        assert!(layout.lines().is_empty());

        layout.measure_str("abc", Vec3::ZERO).unwrap();
        assert_eq!(layout.cache_stats().misses, 3);
    }

    #[test]
    fn test_anchor_change_rebases_without_breaking() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);

        layout.measure_str("abc", Vec3::ZERO).unwrap();
        let anchor = Vec3::new(5.0, 7.0, 0.0);
        let bounds = layout.measure_str("abc", anchor).unwrap();

        assert_eq!(layout.cache_stats().hits, 1);
        assert_eq!(layout.lines()[0].anchor, anchor);
        assert_eq!(bounds.lower.x, 5.0);
        assert_eq!(bounds.upper.y, 15.0);
    }

    #[test]
    fn test_render_returns_pen() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);
        let pen = layout
            .render_str("ab", Vec3::new(1.0, 2.0, 3.0), RenderMode::FRONT)
            .unwrap();
        assert_eq!(pen, Vec3::new(21.0, 2.0, 3.0));
    }

    #[test]
    fn test_line_runs() {
        let font = Arc::new(MockFont::new());
        let mut layout = layout_with(&font);
        layout.set_line_length(40.0);
        layout.measure_str("one two six", Vec3::ZERO).unwrap();

        let runs: Vec<String> = layout.line_runs().map(|run| run.iter().collect()).collect();
        assert_eq!(runs, vec!["one", "two", "six"]);
    }
}
