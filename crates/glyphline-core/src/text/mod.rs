//! Contracts between layout code and the font backends that measure and draw glyphs.

mod font;

pub use font::{Font, RenderMode};
