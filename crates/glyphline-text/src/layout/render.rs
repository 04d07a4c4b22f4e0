//! Placing cached lines: alignment offsets, justification and bounds.

use std::slice;

use glyphline_core::geometry::BoundingBox;
use glyphline_core::math::Vec3;
use glyphline_core::text::{Font, RenderMode};

use crate::cache::LineRecord;
use crate::text::TextAlign;

/// Number of places where a whitespace run ends inside `run`.
pub(crate) fn gap_count(run: &[char]) -> usize {
    run.windows(2)
        .filter(|pair| pair[0].is_whitespace() && !pair[1].is_whitespace())
        .count()
}

/// Extra horizontal space added at each gap when `slack` is spread over `run`.
pub(crate) fn justify_gap(run: &[char], slack: f32) -> f32 {
    if slack <= 0.0 {
        return 0.0;
    }
    match gap_count(run) {
        0 => 0.0,
        gaps => slack / gaps as f32,
    }
}

/// Where the pen starts on a line, relative to the line's baseline origin, and
/// how much space goes into each interior gap.
fn placement(line: &LineRecord, run: &[char]) -> (f32, f32) {
    // Unbounded line lengths leave infinite slack; such lines are not aligned
    let slack = if line.slack.is_finite() { line.slack } else { 0.0 };
    let gap = match line.align {
        TextAlign::Justify => justify_gap(run, slack),
        _ => 0.0,
    };
    (line.align.offset(slack), gap)
}

/// Union of the boxes of all non-empty lines, placed where `render_lines` would
/// draw them.
pub(crate) fn measure_lines(font: &dyn Font, chars: &[char], lines: &[LineRecord]) -> BoundingBox {
    let mut bounds = BoundingBox::default();
    let mut displacement = Vec3::ZERO;

    for line in lines {
        let run = &chars[line.range(chars.len())];
        if !run.is_empty() {
            let (offset, gap) = placement(line, run);
            let origin = line.anchor + displacement + Vec3::new(offset, 0.0, 0.0);

            let mut line_bounds = font.bbox(run).translate(origin);
            line_bounds.upper.x += gap * gap_count(run) as f32;
            bounds |= line_bounds;
        }
        displacement -= line.pen_advance;
    }

    bounds
}

/// Draw every line glyph by glyph and return the final pen position.
///
/// Empty lines are skipped but still move the pen down.
pub(crate) fn render_lines(
    font: &dyn Font,
    chars: &[char],
    lines: &[LineRecord],
    mode: RenderMode,
) -> Vec3 {
    let mut displacement = Vec3::ZERO;
    let mut pen = Vec3::ZERO;

    for line in lines {
        let run = &chars[line.range(chars.len())];
        let (offset, gap) = placement(line, run);
        pen = line.anchor + displacement + Vec3::new(offset, 0.0, 0.0);

        if !run.is_empty() {
            pen = render_spaced(font, run, pen, mode, gap);
        }
        displacement -= line.pen_advance;
    }

    pen
}

/// Draw `run` one glyph at a time, adding `gap` before each glyph that ends a
/// whitespace run.
pub(crate) fn render_spaced(
    font: &dyn Font,
    run: &[char],
    mut pen: Vec3,
    mode: RenderMode,
    gap: f32,
) -> Vec3 {
    for (i, ch) in run.iter().enumerate() {
        if i > 0 && !ch.is_whitespace() && run[i - 1].is_whitespace() {
            pen.x += gap;
        }
        pen = font.render(slice::from_ref(ch), pen, mode);
    }
    pen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LineExtent;
    use glyphline_test_utils::MockFont;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn line(start: usize, extent: LineExtent, slack: f32, align: TextAlign) -> LineRecord {
        LineRecord {
            start,
            extent,
            anchor: Vec3::ZERO,
            slack,
            pen_advance: Vec3::new(0.0, 20.0, 0.0),
            align,
        }
    }

    #[test]
    fn test_gap_count() {
        assert_eq!(gap_count(&chars("a b c")), 2);
        assert_eq!(gap_count(&chars("a   b")), 1);
        assert_eq!(gap_count(&chars(" a b ")), 1);
        assert_eq!(gap_count(&chars("abc")), 0);
        assert_eq!(gap_count(&[]), 0);
    }

    #[test]
    fn test_justify_gap() {
        assert_eq!(justify_gap(&chars("a b c"), 30.0), 15.0);
        assert_eq!(justify_gap(&chars("a b c"), 0.0), 0.0);
        assert_eq!(justify_gap(&chars("a b c"), -4.0), 0.0);
        assert_eq!(justify_gap(&chars("abc"), 30.0), 0.0);
    }

    #[test]
    fn test_render_spaced_distributes_gap() {
        let font = MockFont::new();
        let run = chars("a b c");
        let pen = render_spaced(&font, &run, Vec3::ZERO, RenderMode::FRONT, 7.0);

        assert_eq!(pen.x, 50.0 + 14.0);
        let positions: Vec<f32> = font.rendered().iter().map(|(_, pen)| pen.x).collect();
        assert_eq!(positions, vec![0.0, 10.0, 27.0, 37.0, 54.0]);
    }

    #[test]
    fn test_render_lines_alignment_offsets() {
        let font = MockFont::new();
        let text = chars("ab");
        for (align, start) in [
            (TextAlign::Left, 0.0),
            (TextAlign::Center, 40.0),
            (TextAlign::Right, 80.0),
        ] {
            font.clear_calls();
            let lines = [line(0, LineExtent::ToEnd, 80.0, align)];
            render_lines(&font, &text, &lines, RenderMode::FRONT);
            assert_eq!(font.rendered()[0].1.x, start, "{:?}", align);
        }
    }

    #[test]
    fn test_render_lines_skips_empty_but_moves_down() {
        let font = MockFont::new();
        let text = chars("a\n\nb");
        let lines = [
            line(0, LineExtent::Count(1), 90.0, TextAlign::Left),
            line(2, LineExtent::Count(0), 100.0, TextAlign::Left),
            LineRecord {
                pen_advance: Vec3::ZERO,
                ..line(3, LineExtent::ToEnd, 90.0, TextAlign::Left)
            },
        ];

        let pen = render_lines(&font, &text, &lines, RenderMode::FRONT);
        let rendered = font.rendered();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0], ('a', Vec3::new(0.0, 0.0, 0.0)));
        assert_eq!(rendered[1], ('b', Vec3::new(0.0, -40.0, 0.0)));
        assert_eq!(pen, Vec3::new(10.0, -40.0, 0.0));
    }

    #[test]
    fn test_infinite_slack_is_not_aligned() {
        let font = MockFont::new();
        let text = chars("ab");
        let lines = [line(0, LineExtent::ToEnd, f32::INFINITY, TextAlign::Right)];
        let pen = render_lines(&font, &text, &lines, RenderMode::FRONT);
        assert_eq!(pen.x, 20.0);
    }

    #[test]
    fn test_measure_lines_stacks_lines() {
        let font = MockFont::new();
        let text = chars("ab\ncd");
        let lines = [
            line(0, LineExtent::Count(2), 80.0, TextAlign::Left),
            LineRecord {
                pen_advance: Vec3::ZERO,
                ..line(3, LineExtent::ToEnd, 80.0, TextAlign::Left)
            },
        ];

        let bounds = measure_lines(&font, &text, &lines);
        // Glyphs rise 8 above and drop 2 below the baseline
        assert_eq!(bounds, BoundingBox::from_extents(0.0, -22.0, 20.0, 8.0));
    }

    #[test]
    fn test_measure_lines_includes_justify_gaps() {
        let font = MockFont::new();
        let text = chars("a b");
        let lines = [line(0, LineExtent::ToEnd, 30.0, TextAlign::Justify)];
        let bounds = measure_lines(&font, &text, &lines);
        assert_eq!(bounds.upper.x, 60.0);
    }

    #[test]
    fn test_measure_lines_empty_text() {
        let font = MockFont::new();
        let lines = [line(0, LineExtent::ToEnd, 100.0, TextAlign::Left)];
        assert_eq!(measure_lines(&font, &[], &lines), BoundingBox::default());
    }
}
