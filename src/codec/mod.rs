//! Tagged binary encoding for value trees.
//!
//! Every value is written as one tag byte followed by its payload:
//!
//! | Tag | Kind    | Payload                                              |
//! |-----|---------|------------------------------------------------------|
//! | 1   | Integer | 1 byte, 0..=255                                      |
//! | 2   | String  | length byte + UTF-8 bytes                            |
//! | 3   | Boolean | 1 byte, 0 = false, nonzero = true                    |
//! | 4   | List    | count byte + that many tagged values                 |
//! | 5   | Object  | count byte + that many (length-prefixed key, value)  |
//!
//! There is no header, version byte or checksum. The format terminates itself
//! because every container declares its own count.

pub mod decode;
pub mod encode;
pub mod tag;

pub use decode::Decoder;
pub use encode::Encoder;
pub use tag::TypeTag;

use bytes::Bytes;

use crate::error::Result;
use crate::types::Value;

/// Default maximum container nesting depth for encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Encodes `value` with the default [`Encoder`] settings.
pub fn compress(value: &Value) -> Result<Bytes> {
    Encoder::new().compress(value)
}

/// Decodes a value with the default [`Decoder`] settings.
pub fn decompress(bytes: &[u8]) -> Result<Value> {
    Decoder::new().decompress(bytes)
}
