//! String cache for line-breaking results.
//!
//! Breaking a string into lines costs one bounding box and one advance query per
//! codepoint, so the layout keeps the most recent text together with the line
//! records computed for it. Incoming text is compared byte for byte against the
//! cached copy; only a mismatch (or a configuration change, which invalidates the
//! cache) triggers a new breaking pass.

use std::fmt;
use std::ops::Range;

use glyphline_core::math::Vec3;

use crate::encoding::{CodeUnit, Encoding};
use crate::error::{LayoutError, LayoutResult};
use crate::text::TextAlign;

/// How many codepoints a [`LineRecord`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineExtent {
    /// Exactly this many codepoints.
    Count(usize),
    /// Everything from the start of the line to the end of the text.
    ToEnd,
}

/// One wrapped line, ready to be measured or drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRecord {
    /// Index of the line's first codepoint in the cached text.
    pub start: usize,
    pub extent: LineExtent,
    /// Anchor position the layout call was made with.
    pub anchor: Vec3,
    /// Line length minus the line's natural width. Negative for overflowing lines.
    pub slack: f32,
    /// Displacement subtracted from the pen after the line (zero for the last line).
    pub pen_advance: Vec3,
    /// Alignment this line is placed with.
    pub align: TextAlign,
}

impl LineRecord {
    /// Codepoint range of this line in a text of `total` codepoints.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.start.min(total);
        match self.extent {
            LineExtent::Count(count) => start..(start + count).min(total),
            LineExtent::ToEnd => start..total,
        }
    }
}

/// Hit and miss counters for a layout's string cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StringCache: {:.1}% hit rate ({} hits, {} misses)",
            self.hit_rate() * 100.0,
            self.hits,
            self.misses
        )
    }
}

/// The most recently laid out text and its line records.
///
/// Valid only between a successful [`StringCache::commit`] and the next
/// [`StringCache::invalidate`]; buffers keep their capacity across invalidations.
#[derive(Debug, Default)]
pub(crate) struct StringCache {
    /// Encoding of the cached text, `None` while the cache is invalid.
    encoding: Option<Encoding>,
    bytes: Vec<u8>,
    chars: Vec<char>,
    lines: Vec<LineRecord>,
}

impl StringCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.encoding = None;
        self.bytes.clear();
        self.chars.clear();
        self.lines.clear();
    }

    pub fn is_valid(&self) -> bool {
        self.encoding.is_some()
    }

    /// Whether `units` is byte-identical to the cached text in the same encoding.
    pub fn matches<U: CodeUnit>(&self, units: &[U]) -> bool {
        self.encoding == Some(U::ENCODING)
            && self.bytes.as_slice() == bytemuck::cast_slice::<U, u8>(units)
    }

    /// Replace the cached text with `units` and decode it.
    ///
    /// The cache stays invalid until [`StringCache::commit`].
    pub fn store<U: CodeUnit>(&mut self, units: &[U]) -> LayoutResult<()> {
        self.invalidate();

        let bytes: &[u8] = bytemuck::cast_slice(units);
        reserve(&mut self.bytes, bytes.len())?;
        self.bytes.extend_from_slice(bytes);

        reserve(&mut self.chars, units.len())?;
        U::decode_into(units, &mut self.chars)
    }

    /// Decoded text alongside the line record buffer to fill.
    pub fn split_mut(&mut self) -> (&[char], &mut Vec<LineRecord>) {
        (&self.chars, &mut self.lines)
    }

    /// Mark the stored text and its line records as valid.
    pub fn commit(&mut self, encoding: Encoding) {
        self.encoding = Some(encoding);
    }

    /// Point every record at a new anchor. Breaking does not depend on the anchor.
    pub fn rebase(&mut self, anchor: Vec3) {
        for line in &mut self.lines {
            line.anchor = anchor;
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }
}

/// `Vec::try_reserve`, reporting failures as [`LayoutError::AllocationFailed`].
pub(crate) fn reserve<T>(buf: &mut Vec<T>, additional: usize) -> LayoutResult<()> {
    buf.try_reserve(additional)
        .map_err(|_| LayoutError::AllocationFailed {
            bytes: additional.saturating_mul(std::mem::size_of::<T>()),
        })
}
