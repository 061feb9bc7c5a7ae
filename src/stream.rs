//! Byte-level field I/O over an in-memory buffer.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};

/// Largest length that fits in a one-byte prefix.
const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// A growable byte buffer with independent write and read cursors.
///
/// Writes always append, so the write cursor is the buffer length. The read
/// cursor starts at zero and only moves forward. Neither cursor rewinds.
///
/// The stream knows nothing about values or tags; it only moves single bytes
/// and length-prefixed byte strings.
#[derive(Debug, Default)]
pub struct ByteStream {
    buf: BytesMut,
    read_offset: usize,
}

impl ByteStream {
    /// Creates an empty stream for writing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stream pre-loaded with `data`, positioned for reading at offset 0.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            buf: BytesMut::from(data),
            read_offset: 0,
        }
    }

    /// Appends a single byte. Fails if `value` is outside `0..=255`.
    pub fn write_byte(&mut self, value: i64) -> Result<()> {
        let byte = u8::try_from(value).map_err(|_| CodecError::Range {
            field: "byte",
            value,
        })?;
        self.buf.put_u8(byte);
        Ok(())
    }

    /// Appends a one-byte length prefix followed by the raw bytes of `data`.
    ///
    /// Nothing is appended when `data` is longer than 255 bytes.
    pub fn write_string(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > MAX_FIELD_LEN {
            return Err(CodecError::length("string length", data.len()));
        }
        self.write_byte(data.len() as i64)?;
        self.buf.put_slice(data);
        Ok(())
    }

    /// Appends `1` for true and `0` for false.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_byte(i64::from(value))
    }

    /// Reads the byte at the read cursor and advances past it.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.ensure_remaining(1)?;
        let byte = self.buf[self.read_offset];
        self.read_offset += 1;
        Ok(byte)
    }

    /// Reads a one-byte length prefix and then that many raw bytes.
    pub fn read_string(&mut self) -> Result<&[u8]> {
        let len = self.read_byte()? as usize;
        self.read_slice(len)
    }

    /// The bytes written so far.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the stream, returning its contents as an immutable `Bytes`.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn read_offset(&self) -> usize {
        self.read_offset
    }

    pub fn write_offset(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes between the read cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.read_offset)
    }

    fn read_slice(&mut self, len: usize) -> Result<&[u8]> {
        self.ensure_remaining(len)?;
        let start = self.read_offset;
        self.read_offset += len;
        Ok(&self.buf[start..start + len])
    }

    fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            Err(CodecError::BufferUnderrun {
                offset: self.read_offset,
                needed,
                remaining,
            })
        } else {
            Ok(())
        }
    }
}
