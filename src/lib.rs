//! binjson — compact self-describing binary encoding for JSON-like value trees.
//!
//! A value tree of objects, lists, strings, byte-sized integers and booleans
//! is written as a sequence of one-byte type tags and payloads, and read back
//! into an equal tree. Every length and count fits in one byte, so strings are
//! limited to 255 bytes and containers to 255 entries.
//!
//! # Architecture
//!
//! - **`stream`** — `ByteStream`, byte and length-prefixed string I/O
//! - **`codec`** — type tags, `Encoder` and `Decoder`
//! - **`types`** — the `Value` tree
//! - **`error`** — `CodecError`
//! - **`json`** — conversions to and from `serde_json::Value` (feature-gated)
//!
//! ```
//! use binjson::{Value, compress, decompress};
//!
//! let value = Value::List(vec![Value::from("Item1"), Value::from(64), Value::from(true)]);
//! let bytes = compress(&value)?;
//! assert_eq!(decompress(&bytes)?, value);
//! # Ok::<(), binjson::CodecError>(())
//! ```

pub mod codec;
pub mod error;
pub mod stream;
pub mod types;

#[cfg(feature = "json")]
pub mod json;

pub use codec::{Decoder, Encoder, TypeTag, compress, decompress};
pub use error::CodecError;
pub use stream::ByteStream;
pub use types::{Object, Value};
