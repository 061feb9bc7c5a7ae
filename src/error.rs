//! Error types for binary encoding and decoding.

use std::string::FromUtf8Error;

/// Errors that can occur while encoding or decoding a value tree.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A numeric field or length does not fit in its one-byte budget (0..=255).
    #[error("{field} out of range: {value} does not fit in one byte")]
    Range { field: &'static str, value: i64 },

    /// A list or object has more than 255 entries.
    #[error("{kind} too large: {len} entries, at most 255 allowed")]
    ContainerTooLarge { kind: &'static str, len: usize },

    /// A value kind outside the five supported kinds.
    #[error("unsupported value type: {0}")]
    UnsupportedType(String),

    /// Attempted to read past the end of the input.
    #[error("buffer underrun at offset {offset}: need {needed} bytes but only {remaining} remaining")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A tag byte that is not one of the defined type tags.
    #[error("unknown type tag: 0x{0:02X}")]
    UnknownTag(u8),

    /// Containers nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    DepthExceeded(usize),

    #[error("invalid UTF-8 string: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Bytes left over after the root value (strict decoding only).
    #[error("{0} trailing bytes after root value")]
    TrailingBytes(usize),
}

impl CodecError {
    /// Builds a `Range` error from a length, saturating lengths beyond `i64`.
    pub(crate) fn length(field: &'static str, len: usize) -> Self {
        Self::Range {
            field,
            value: i64::try_from(len).unwrap_or(i64::MAX),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;
