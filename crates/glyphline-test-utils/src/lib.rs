//! Test utilities for glyphline.
//!
//! This crate provides a recording font backend so layouts can be tested without
//! font files or a graphics context.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use glyphline_core::math::Vec3;
//! use glyphline_core::text::{Font, RenderMode};
//! use glyphline_test_utils::MockFont;
//!
//! let font = MockFont::new();
//! let pen = font.render(&['a'], Vec3::ZERO, RenderMode::FRONT);
//!
//! assert_eq!(pen.x, 10.0);
//! assert_eq!(font.count_renders(), 1);
//! # }
//! ```
//!
//! # Interior Mutability
//!
//! [`glyphline_core::text::Font`] takes `&self` everywhere, so the mock records
//! calls behind a `parking_lot::Mutex`.

#[cfg(feature = "mock")]
pub mod mock_font;

#[cfg(feature = "mock")]
pub use mock_font::*;
