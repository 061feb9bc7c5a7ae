//! Decoding: bytes → `Value`.

use super::{DEFAULT_MAX_DEPTH, TypeTag};
use crate::error::{CodecError, Result};
use crate::stream::ByteStream;
use crate::types::{Object, Value};

/// Reconstructs value trees from the tagged binary format.
///
/// Decoding is a single forward pass: once a tag or count byte is consumed
/// it is never re-read. Each [`decompress`](Self::decompress) call wraps its
/// input in a fresh [`ByteStream`].
#[derive(Debug, Clone)]
pub struct Decoder {
    max_depth: usize,
    strict: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }

    /// Sets the maximum container nesting depth. The root container counts as depth 1.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// When enabled, bytes left after the root value are an error instead of ignored.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Decodes the root value from `bytes`.
    pub fn decompress(&self, bytes: &[u8]) -> Result<Value> {
        let mut stream = ByteStream::from_bytes(bytes);
        let value = match self.decode_value(&mut stream, 0) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, offset = stream.read_offset(), "decode failed");
                return Err(e);
            }
        };

        let trailing = stream.remaining();
        if trailing > 0 {
            if self.strict {
                return Err(CodecError::TrailingBytes(trailing));
            }
            tracing::debug!(trailing, "ignoring bytes after root value");
        }
        tracing::trace!(bytes = stream.read_offset(), "decoded value");
        Ok(value)
    }

    fn decode_value(&self, stream: &mut ByteStream, depth: usize) -> Result<Value> {
        let tag = TypeTag::try_from(stream.read_byte()?)?;
        match tag {
            TypeTag::Object => self.decode_object(stream, depth + 1),
            TypeTag::String => Ok(Value::String(read_utf8(stream)?)),
            TypeTag::Integer => Ok(Value::Integer(i64::from(stream.read_byte()?))),
            TypeTag::Boolean => Ok(Value::Boolean(stream.read_byte()? != 0)),
            TypeTag::List => self.decode_list(stream, depth + 1),
        }
    }

    fn decode_object(&self, stream: &mut ByteStream, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        let len = stream.read_byte()? as usize;
        let mut obj = Object::with_capacity(len);
        for _ in 0..len {
            let key = read_utf8(stream)?;
            let value = self.decode_value(stream, depth)?;
            // A repeated key keeps its first position and takes the later value.
            obj.insert(key, value);
        }
        Ok(Value::Object(obj))
    }

    fn decode_list(&self, stream: &mut ByteStream, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        let len = stream.read_byte()? as usize;
        if len == 0 {
            return Ok(Value::List(Vec::new()));
        }
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(self.decode_value(stream, depth)?);
        }
        Ok(Value::List(items))
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(CodecError::DepthExceeded(self.max_depth))
        } else {
            Ok(())
        }
    }
}

fn read_utf8(stream: &mut ByteStream) -> Result<String> {
    let data = stream.read_string()?.to_vec();
    Ok(String::from_utf8(data)?)
}
