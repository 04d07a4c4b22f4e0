/// Horizontal alignment of each wrapped line within the line length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch interior whitespace so every line but the last fills the line length.
    Justify,
}

impl TextAlign {
    /// Horizontal pen offset for a line with `slack` unused width.
    pub fn offset(self, slack: f32) -> f32 {
        match self {
            TextAlign::Left | TextAlign::Justify => 0.0,
            TextAlign::Center => slack / 2.0,
            TextAlign::Right => slack,
        }
    }
}

/// Layout settings that affect where lines break and how they are placed.
///
/// ```
/// use glyphline_text::{LayoutConfig, TextAlign};
///
/// let config = LayoutConfig::new()
///     .line_length(320.0)
///     .align(TextAlign::Justify)
///     .line_spacing(1.5);
/// assert_eq!(config.alignment, TextAlign::Justify);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Maximum width of a line. `f32::INFINITY` disables wrapping.
    pub line_length: f32,
    pub alignment: TextAlign,
    /// Multiplier applied to the font's line height between baselines.
    pub line_spacing: f32,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self {
            line_length: 100.0,
            alignment: TextAlign::Left,
            line_spacing: 1.0,
        }
    }

    /// Set the maximum line length.
    pub fn line_length(mut self, length: f32) -> Self {
        self.line_length = length;
        self
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.alignment = align;
        self
    }

    /// Set the line spacing multiplier.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
