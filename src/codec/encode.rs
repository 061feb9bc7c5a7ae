//! Encoding: `Value` → bytes.

use bytes::Bytes;

use super::{DEFAULT_MAX_DEPTH, TypeTag};
use crate::error::{CodecError, Result};
use crate::stream::ByteStream;
use crate::types::{Object, Value};

/// Serializes value trees into the tagged binary format.
///
/// An `Encoder` only carries configuration. Each [`compress`](Self::compress)
/// call writes into its own fresh [`ByteStream`].
#[derive(Debug, Clone)]
pub struct Encoder {
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum container nesting depth. The root container counts as depth 1.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Encodes `value` and returns the resulting bytes.
    ///
    /// On error no output is returned; whatever was written before the
    /// failure is dropped with the stream.
    pub fn compress(&self, value: &Value) -> Result<Bytes> {
        let mut stream = ByteStream::new();
        if let Err(e) = self.encode_value(&mut stream, value, 0) {
            tracing::debug!(error = %e, written = stream.write_offset(), "encode failed");
            return Err(e);
        }
        tracing::trace!(bytes = stream.write_offset(), "encoded value");
        Ok(stream.into_bytes())
    }

    fn encode_value(&self, stream: &mut ByteStream, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Object(obj) => self.encode_object(stream, obj, depth + 1),
            Value::String(s) => encode_string(stream, s),
            Value::Integer(i) => encode_int(stream, *i),
            Value::Boolean(b) => encode_bool(stream, *b),
            Value::List(items) => self.encode_list(stream, items, depth + 1),
        }
    }

    fn encode_object(&self, stream: &mut ByteStream, obj: &Object, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        write_tag(stream, TypeTag::Object)?;
        write_count(stream, "object", obj.len())?;
        for (key, value) in obj {
            stream.write_string(key.as_bytes())?;
            self.encode_value(stream, value, depth)?;
        }
        Ok(())
    }

    fn encode_list(&self, stream: &mut ByteStream, items: &[Value], depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        write_tag(stream, TypeTag::List)?;
        write_count(stream, "list", items.len())?;
        for item in items {
            self.encode_value(stream, item, depth)?;
        }
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(CodecError::DepthExceeded(self.max_depth))
        } else {
            Ok(())
        }
    }
}

fn encode_string(stream: &mut ByteStream, value: &str) -> Result<()> {
    write_tag(stream, TypeTag::String)?;
    stream.write_string(value.as_bytes())
}

fn encode_int(stream: &mut ByteStream, value: i64) -> Result<()> {
    // Checked before the tag is written.
    if !(0..=255).contains(&value) {
        return Err(CodecError::Range {
            field: "integer",
            value,
        });
    }
    write_tag(stream, TypeTag::Integer)?;
    stream.write_byte(value)
}

fn encode_bool(stream: &mut ByteStream, value: bool) -> Result<()> {
    write_tag(stream, TypeTag::Boolean)?;
    stream.write_bool(value)
}

fn write_tag(stream: &mut ByteStream, tag: TypeTag) -> Result<()> {
    stream.write_byte(i64::from(u8::from(tag)))
}

fn write_count(stream: &mut ByteStream, kind: &'static str, len: usize) -> Result<()> {
    let count = u8::try_from(len).map_err(|_| CodecError::ContainerTooLarge { kind, len })?;
    stream.write_byte(i64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress(value: &Value) -> Result<Bytes> {
        Encoder::new().compress(value)
    }

    fn nested_lists(levels: usize) -> Value {
        let mut value = Value::List(vec![]);
        for _ in 1..levels {
            value = Value::List(vec![value]);
        }
        value
    }

    #[test]
    fn encode_integer() {
        assert_eq!(&compress(&Value::Integer(0)).unwrap()[..], &[0x01, 0x00]);
        assert_eq!(&compress(&Value::Integer(255)).unwrap()[..], &[0x01, 0xFF]);
    }

    #[test]
    fn encode_integer_out_of_range() {
        let err = compress(&Value::Integer(256)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Range {
                field: "integer",
                value: 256
            }
        ));
        let err = compress(&Value::Integer(-1)).unwrap_err();
        assert!(matches!(err, CodecError::Range { value: -1, .. }));
    }

    #[test]
    fn encode_booleans_with_boolean_tag() {
        assert_eq!(&compress(&Value::Boolean(true)).unwrap()[..], &[0x03, 0x01]);
        assert_eq!(&compress(&Value::Boolean(false)).unwrap()[..], &[0x03, 0x00]);
    }

    #[test]
    fn encode_string_value() {
        assert_eq!(&compress(&Value::from("")).unwrap()[..], &[0x02, 0x00]);
        assert_eq!(
            &compress(&Value::from("hé")).unwrap()[..],
            &[0x02, 0x03, b'h', 0xC3, 0xA9]
        );
    }

    #[test]
    fn encode_string_byte_length_limit() {
        // 128 two-byte chars = 256 bytes, over the limit despite 128 chars.
        let s = "é".repeat(128);
        let err = compress(&Value::from(s)).unwrap_err();
        assert!(matches!(err, CodecError::Range { value: 256, .. }));

        let s = "a".repeat(255);
        assert_eq!(compress(&Value::from(s)).unwrap().len(), 257);
    }

    #[test]
    fn encode_empty_containers() {
        assert_eq!(&compress(&Value::List(vec![])).unwrap()[..], &[0x04, 0x00]);
        assert_eq!(&compress(&Value::Object(Object::new())).unwrap()[..], &[0x05, 0x00]);
    }

    #[test]
    fn encode_max_size_list() {
        let items = vec![Value::Integer(7); 255];
        let out = compress(&Value::List(items)).unwrap();
        assert_eq!(out.len(), 2 + 255 * 2);
        assert_eq!(out[1], 255);
    }

    #[test]
    fn encode_oversized_list() {
        let items = vec![Value::Integer(7); 256];
        let err = compress(&Value::List(items)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::ContainerTooLarge {
                kind: "list",
                len: 256
            }
        ));
    }

    #[test]
    fn encode_oversized_object() {
        let obj: Object = (0..256).map(|i| (format!("k{i}"), Value::Integer(0))).collect();
        let err = compress(&Value::Object(obj)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::ContainerTooLarge {
                kind: "object",
                len: 256
            }
        ));
    }

    #[test]
    fn encode_object_in_insertion_order() {
        let obj = Object::from([
            ("b".to_string(), Value::Integer(2)),
            ("a".to_string(), Value::Integer(1)),
        ]);
        assert_eq!(
            &compress(&Value::Object(obj)).unwrap()[..],
            &[0x05, 0x02, 0x01, b'b', 0x01, 0x02, 0x01, b'a', 0x01, 0x01]
        );
    }

    #[test]
    fn encode_object_key_too_long() {
        let obj = Object::from([("k".repeat(256), Value::Integer(1))]);
        let err = compress(&Value::Object(obj)).unwrap_err();
        assert!(matches!(err, CodecError::Range { field: "string length", .. }));
    }

    #[test]
    fn encode_mixed_list() {
        let value = Value::List(vec![
            Value::from("Item1"),
            Value::Integer(64),
            Value::Boolean(true),
            Value::Boolean(false),
            Value::Object(Object::from([("key1".to_string(), Value::Integer(122))])),
        ]);
        #[rustfmt::skip]
        let expected = [
            0x04, 0x05,
            0x02, 0x05, b'I', b't', b'e', b'm', b'1',
            0x01, 0x40,
            0x03, 0x01,
            0x03, 0x00,
            0x05, 0x01, 0x04, b'k', b'e', b'y', b'1', 0x01, 0x7A,
        ];
        assert_eq!(&compress(&value).unwrap()[..], &expected);
    }

    #[test]
    fn encode_depth_limit() {
        let encoder = Encoder::new().max_depth(3);
        assert!(encoder.compress(&nested_lists(3)).is_ok());
        let err = encoder.compress(&nested_lists(4)).unwrap_err();
        assert!(matches!(err, CodecError::DepthExceeded(3)));
    }

    #[test]
    fn encode_default_depth_limit() {
        assert!(compress(&nested_lists(DEFAULT_MAX_DEPTH)).is_ok());
        let err = compress(&nested_lists(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, CodecError::DepthExceeded(DEFAULT_MAX_DEPTH)));
    }

    #[test]
    fn scalars_ignore_depth_limit() {
        let encoder = Encoder::new().max_depth(0);
        assert!(encoder.compress(&Value::Integer(1)).is_ok());
        assert!(matches!(
            encoder.compress(&Value::List(vec![])),
            Err(CodecError::DepthExceeded(0))
        ));
    }
}
