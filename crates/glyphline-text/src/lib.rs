//! Glyphline Text - line wrapping and justification over pluggable fonts
//!
//! This crate lays out strings of glyphs for a font backend that can measure and
//! draw single glyphs:
//! - Greedy line breaking at whitespace, with mid-word fallback for long words
//! - Left, center, right and justified alignment
//! - A string cache so unchanged text is only broken into lines once
//! - Narrow (UTF-8) and wide (UTF-16, UTF-32) text through one algorithm
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use glyphline_core::math::Vec3;
//! use glyphline_core::text::RenderMode;
//! use glyphline_text::{SimpleLayout, TextAlign};
//!
//! let font = Arc::new(MyFont::load("Sans.ttf", 24.0)?);
//! let mut layout = SimpleLayout::new();
//! layout.set_font(&font);
//! layout.set_line_length(400.0);
//! layout.set_alignment(TextAlign::Justify);
//!
//! let bounds = layout.measure_str(text, Vec3::ZERO)?;
//! layout.render_str(text, Vec3::new(10.0, bounds.height(), 0.0), RenderMode::FRONT)?;
//! ```
//!
//! The font backend is anything implementing [`glyphline_core::text::Font`].

pub mod cache;
pub mod encoding;
pub mod error;
pub mod layout;
pub mod text;

// Re-export main types
pub use cache::{CacheStats, LineExtent, LineRecord};
pub use encoding::{CodeUnit, Encoding};
pub use error::{LayoutError, LayoutResult};
pub use layout::SimpleLayout;
pub use text::{LayoutConfig, TextAlign};

// Re-export the font contract from glyphline-core
pub use glyphline_core::geometry::BoundingBox;
pub use glyphline_core::math::Vec3;
pub use glyphline_core::text::{Font, RenderMode};
