use crate::encoding::Encoding;

/// Errors that can occur while laying out text.
///
/// Any error leaves the layout's string cache invalidated; the next call
/// recomputes line records from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No font has been set on the layout.
    NoFont,

    /// The font was set but has since been dropped by its owner.
    FontReleased,

    /// The text was to be read up to a NUL terminator, but none was found.
    Unterminated,

    /// An explicit length runs past the end of the text slice.
    OutOfBounds { requested: usize, available: usize },

    /// The text is not valid in its encoding.
    Decode {
        /// Position of the offending code unit.
        offset: usize,
        encoding: Encoding,
    },

    /// Growing the string cache failed.
    AllocationFailed { bytes: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::NoFont => write!(f, "No font set on layout"),
            LayoutError::FontReleased => write!(f, "Layout font was dropped by its owner"),
            LayoutError::Unterminated => {
                write!(f, "Text has no NUL terminator and no explicit length")
            }
            LayoutError::OutOfBounds {
                requested,
                available,
            } => write!(
                f,
                "Text length {} exceeds buffer of {} code units",
                requested, available
            ),
            LayoutError::Decode { offset, encoding } => {
                write!(f, "Invalid {} sequence at code unit {}", encoding, offset)
            }
            LayoutError::AllocationFailed { bytes } => {
                write!(f, "Failed to allocate {} bytes for the string cache", bytes)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
