//! One-byte type tags that precede every encoded value.

use std::fmt;

use crate::error::CodecError;

/// Discriminator written before each value's payload.
///
/// Byte 0 is reserved and has no member here; decoding it yields
/// [`CodecError::UnknownTag`] like any other undefined byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// 1 payload byte, unsigned 0..=255.
    Integer = 1,
    /// Length byte + UTF-8 bytes.
    String = 2,
    /// 1 payload byte, 0 = false, nonzero = true.
    Boolean = 3,
    /// Count byte + that many tagged values.
    List = 4,
    /// Count byte + that many (key string, tagged value) pairs.
    Object = 5,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Object => "object",
        }
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag as u8
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            1 => Ok(Self::Integer),
            2 => Ok(Self::String),
            3 => Ok(Self::Boolean),
            4 => Ok(Self::List),
            5 => Ok(Self::Object),
            other => Err(CodecError::UnknownTag(other)),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
