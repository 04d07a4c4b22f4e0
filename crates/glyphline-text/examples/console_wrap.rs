//! Console Wrapping Example
//!
//! Lays out a paragraph with every alignment and prints it through a font that
//! draws into a character grid, one cell per glyph.
//!
//! ## Usage
//! ```bash
//! cargo run -p glyphline-text --example console_wrap
//! RUST_LOG=glyphline_text=trace cargo run -p glyphline-text --example console_wrap
//! ```

use std::cell::RefCell;
use std::sync::Arc;

use glyphline_core::config::Config;
use glyphline_text::{
    BoundingBox, Font, LayoutConfig, LayoutResult, RenderMode, SimpleLayout, TextAlign, Vec3,
};

const TEXT: &str = "The quick brown fox jumps over the lazy dog. Pack my box with five \
dozen liquor jugs.\nHow vexingly quick daft zebras jump!";

const COLUMNS: usize = 36;

/// A font where every glyph is one cell wide and one row tall.
///
/// The pen's x is the column; y grows upward, so row `r` sits at `y = -r`.
struct GridFont {
    rows: RefCell<Vec<Vec<char>>>,
}

impl GridFont {
    fn new() -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
        }
    }

    fn take_rows(&self) -> Vec<String> {
        self.rows
            .borrow_mut()
            .drain(..)
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn put(&self, ch: char, pen: Vec3) {
        let row = usize::try_from(-pen.y.round() as i64);
        let col = usize::try_from(pen.x.round() as i64);
        let (Ok(row), Ok(col)) = (row, col) else {
            return;
        };
        let mut rows = self.rows.borrow_mut();
        if rows.len() <= row {
            rows.resize(row + 1, Vec::new());
        }
        let cells = &mut rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, ' ');
        }
        cells[col] = ch;
    }
}

impl Font for GridFont {
    fn bbox(&self, run: &[char]) -> BoundingBox {
        let width = match run.last() {
            Some(last) if last.is_whitespace() => run.len() as f32 - 1.0,
            Some(_) => run.len() as f32,
            None => 0.0,
        };
        BoundingBox::from_extents(0.0, 0.0, width, 1.0)
    }

    fn advance(&self, run: &[char]) -> f32 {
        run.len() as f32
    }

    fn line_height(&self) -> f32 {
        1.0
    }

    fn render(&self, run: &[char], mut pen: Vec3, _mode: RenderMode) -> Vec3 {
        for &ch in run {
            self.put(ch, pen);
            pen.x += 1.0;
        }
        pen
    }

    fn pre_render(&self) {
        self.rows.borrow_mut().clear();
    }
}

fn main() -> LayoutResult<()> {
    glyphline_core::init(&Config::default());

    let font = Arc::new(GridFont::new());
    let mut layout = SimpleLayout::with_config(LayoutConfig::new().line_length(COLUMNS as f32));
    layout.set_font(&font);

    for align in [
        TextAlign::Left,
        TextAlign::Center,
        TextAlign::Right,
        TextAlign::Justify,
    ] {
        layout.set_alignment(align);

        let bounds = layout.measure_str(TEXT, Vec3::ZERO)?;
        layout.render_str(TEXT, Vec3::ZERO, RenderMode::FRONT)?;

        println!(
            "{:?} ({} lines, {}x{} cells)",
            align,
            layout.lines().len(),
            bounds.width(),
            bounds.height()
        );
        println!("+{}+", "-".repeat(COLUMNS));
        for row in font.take_rows() {
            println!("|{:<width$}|", row, width = COLUMNS);
        }
        println!("+{}+\n", "-".repeat(COLUMNS));
    }

    let stats = layout.cache_stats();
    tracing::info!("Cache: {}", stats);

    Ok(())
}
