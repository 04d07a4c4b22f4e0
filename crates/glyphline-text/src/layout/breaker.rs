//! Greedy line breaking over decoded codepoints.

use std::slice;

use glyphline_core::math::Vec3;
use glyphline_core::profiling::profile_function;
use glyphline_core::text::Font;

use crate::cache::{self, LineExtent, LineRecord};
use crate::error::LayoutResult;
use crate::text::LayoutConfig;

/// Break `chars` into lines no wider than `config.line_length` and write the
/// records to `lines`.
///
/// Lines break at the most recent whitespace seen since the line started. When
/// there is none, or a newline forces the break, the line ends right before the
/// current glyph. Break characters belong to neither line. The last record always
/// runs to the end of the text, so the output is never empty.
///
/// Every record is placed with the configured alignment, the last one included.
pub(crate) fn break_lines(
    font: &dyn Font,
    chars: &[char],
    config: &LayoutConfig,
    anchor: Vec3,
    lines: &mut Vec<LineRecord>,
) -> LayoutResult<()> {
    profile_function!();
    lines.clear();
    // At most one record per codepoint plus the final one
    cache::reserve(lines, chars.len() + 1)?;

    let max = config.line_length;
    let pen_advance = Vec3::new(0.0, font.line_height() * config.line_spacing, 0.0);

    let mut line_start = 0;
    // Latest whitespace after the first glyph of the current line
    let mut break_pos: Option<usize> = None;
    // Pen x of the next glyph, relative to the line start
    let mut next_start = 0.0_f32;
    // Right edge of the line up to and including the current glyph
    let mut current_width = 0.0_f32;
    // Right edge of the line before the whitespace run at `break_pos`
    let mut break_width = 0.0_f32;
    // Advance of the word in progress
    let mut word_length = 0.0_f32;

    for (i, ch) in chars.iter().enumerate() {
        let run = slice::from_ref(ch);
        let glyph_width = font.bbox(run).width();
        let mut advance = font.advance(run);

        let prev_width = current_width;
        current_width = next_start + glyph_width;
        next_start += advance;

        let is_newline = *ch == '\n';
        // A glyph too wide for an empty line stays on it
        let overflows = current_width > max && i > line_start;

        if overflows || is_newline {
            let (end, resume, width) = match break_pos {
                Some(pos) if !is_newline => (pos, pos + 1, break_width),
                _ => {
                    word_length = 0.0;
                    if is_newline {
                        advance = 0.0;
                    }
                    let width = if i == line_start { 0.0 } else { prev_width };
                    (i, if is_newline { i + 1 } else { i }, width)
                }
            };

            let record = LineRecord {
                start: line_start,
                extent: LineExtent::Count(end - line_start),
                anchor,
                slack: max - width,
                pen_advance,
                align: config.alignment,
            };
            tracing::trace!(
                start = record.start,
                count = end - line_start,
                slack = record.slack,
                "Line break"
            );
            lines.push(record);

            line_start = resume;
            break_pos = None;
            next_start = word_length + advance;
            current_width = if is_newline {
                0.0
            } else {
                word_length + glyph_width
            };

            if is_newline {
                continue;
            }
        }

        if ch.is_whitespace() {
            word_length = 0.0;
            if i > line_start {
                if break_pos.is_none() || !chars[i - 1].is_whitespace() {
                    break_width = current_width;
                }
                break_pos = Some(i);
            }
        } else {
            word_length += advance;
        }
    }

    lines.push(LineRecord {
        start: line_start,
        extent: LineExtent::ToEnd,
        anchor,
        slack: max - current_width,
        pen_advance: Vec3::ZERO,
        align: config.alignment,
    });
    Ok(())
}
