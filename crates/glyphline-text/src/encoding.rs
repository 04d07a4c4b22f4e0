//! Code unit encodings accepted by the layout.
//!
//! Text reaches the layout as a slice of code units: bytes for the narrow (UTF-8)
//! encoding, `u16` or `u32` for the wide ones. Every encoding is decoded to
//! `char`s once per cache miss so the line breaker runs a single algorithm for all
//! of them.

use std::fmt;

use bytemuck::Pod;

use crate::error::{LayoutError, LayoutResult};

/// The encodings a [`CodeUnit`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
            Encoding::Utf32 => write!(f, "UTF-32"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit of one of the supported [`Encoding`]s.
///
/// Implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32` (UTF-32). Code units are
/// [`Pod`] so the string cache can compare incoming text byte for byte.
pub trait CodeUnit: Pod + Eq + fmt::Debug + sealed::Sealed {
    const ENCODING: Encoding;

    /// The terminator unit.
    const NUL: Self;

    /// Decode `units` and append the resulting codepoints to `out`.
    ///
    /// Never pushes more than `units.len()` codepoints.
    fn decode_into(units: &[Self], out: &mut Vec<char>) -> LayoutResult<()>;
}

impl CodeUnit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;
    const NUL: Self = 0;

    fn decode_into(units: &[Self], out: &mut Vec<char>) -> LayoutResult<()> {
        let text = std::str::from_utf8(units).map_err(|e| LayoutError::Decode {
            offset: e.valid_up_to(),
            encoding: Encoding::Utf8,
        })?;
        out.extend(text.chars());
        Ok(())
    }
}

impl CodeUnit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;
    const NUL: Self = 0;

    fn decode_into(units: &[Self], out: &mut Vec<char>) -> LayoutResult<()> {
        let mut offset = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            let ch = decoded.map_err(|_| LayoutError::Decode {
                offset,
                encoding: Encoding::Utf16,
            })?;
            offset += ch.len_utf16();
            out.push(ch);
        }
        Ok(())
    }
}

impl CodeUnit for u32 {
    const ENCODING: Encoding = Encoding::Utf32;
    const NUL: Self = 0;

    fn decode_into(units: &[Self], out: &mut Vec<char>) -> LayoutResult<()> {
        for (offset, &unit) in units.iter().enumerate() {
            let ch = char::from_u32(unit).ok_or(LayoutError::Decode {
                offset,
                encoding: Encoding::Utf32,
            })?;
            out.push(ch);
        }
        Ok(())
    }
}

/// Cut `text` down to the units a layout call should read.
///
/// `None` reads up to the first NUL and fails if there is none. `Some(n)` reads the
/// first `n` units, stopping early at an embedded NUL.
pub fn resolve<U: CodeUnit>(text: &[U], len: Option<usize>) -> LayoutResult<&[U]> {
    let bounded = match len {
        None => {
            let end = text
                .iter()
                .position(|&unit| unit == U::NUL)
                .ok_or(LayoutError::Unterminated)?;
            return Ok(&text[..end]);
        }
        Some(n) if n > text.len() => {
            return Err(LayoutError::OutOfBounds {
                requested: n,
                available: text.len(),
            });
        }
        Some(n) => &text[..n],
    };

    let end = bounded
        .iter()
        .position(|&unit| unit == U::NUL)
        .unwrap_or(bounded.len());
    Ok(&bounded[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode<U: CodeUnit>(units: &[U]) -> LayoutResult<Vec<char>> {
        let mut out = Vec::new();
        U::decode_into(units, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_resolve_reads_to_terminator() {
        let text = b"abc\0def";
        assert_eq!(resolve(text, None).unwrap(), b"abc");
    }

    #[test]
    fn test_resolve_unterminated() {
        assert_eq!(resolve(b"abc", None), Err(LayoutError::Unterminated));
    }

    #[test]
    fn test_resolve_explicit_length() {
        assert_eq!(resolve(b"abcdef", Some(4)).unwrap(), b"abcd");
        assert_eq!(resolve(b"ab\0def", Some(5)).unwrap(), b"ab");
        assert_eq!(resolve(b"", Some(0)).unwrap(), b"");
    }

    #[test]
    fn test_resolve_length_past_end() {
        assert_eq!(
            resolve(b"abc", Some(4)),
            Err(LayoutError::OutOfBounds {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_decode_utf8_multibyte() {
        let text = "héllo 世界".as_bytes();
        assert_eq!(decode(text).unwrap(), "héllo 世界".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_decode_utf8_invalid() {
        let err = decode(&[b'a', b'b', 0xFF, b'c']).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Decode {
                offset: 2,
                encoding: Encoding::Utf8
            }
        );
    }

    #[test]
    fn test_decode_utf16_surrogate_pair() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        assert_eq!(units.len(), 4);
        assert_eq!(decode(&units).unwrap(), vec!['a', '😀', 'b']);
    }

    #[test]
    fn test_decode_utf16_lone_surrogate() {
        let err = decode(&[0x61u16, 0xD800, 0x62]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Decode {
                offset: 1,
                encoding: Encoding::Utf16
            }
        );
    }

    #[test]
    fn test_decode_utf32() {
        let units: Vec<u32> = "wide text".chars().map(u32::from).collect();
        assert_eq!(decode(&units).unwrap(), "wide text".chars().collect::<Vec<_>>());

        let err = decode(&[0x41u32, 0x11_0000]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Decode {
                offset: 1,
                encoding: Encoding::Utf32
            }
        );
    }
}
