//! Binary wire codec shared with the full node.
//!
//! The format is Bitcoin-style serialization:
//! - Fixed-width integers are little-endian
//! - Variable lengths use the "compact size" encoding (1, 3, 5 or 9 bytes)
//! - Byte strings are compact-size length prefixed
//! - Repeated items are a compact-size count followed by the items
//!
//! **CRITICAL**: there is no version field. Any change to field order or width
//! is a breaking protocol change.

use bytes::{Buf, BufMut};

use crate::error::{DeserializationError, Result};

/// Largest length or count accepted when decoding (matches the node's MAX_SIZE).
pub const MAX_SIZE: u64 = 0x0200_0000;

/// A value with a fixed binary encoding.
pub trait BinaryCodec: Sized {
    /// Append the encoding of `self` to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Decode one value from the reader.
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;

    /// Encode to a fresh buffer.
    fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }

    /// Decode a value that must span the whole input.
    fn deserialize(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let value = Self::decode(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    /// Lowercase hex of the binary encoding.
    fn serialize_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    /// Inverse of [`BinaryCodec::serialize_hex`].
    fn deserialize_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::deserialize(&bytes)
    }
}

/// Number of bytes `write_compact_size` emits for `n`.
pub const fn compact_size_len(n: u64) -> usize {
    if n < 253 {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffff_ffff {
        5
    } else {
        9
    }
}

/// Write `n` using the smallest compact size width.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match compact_size_len(n) {
        1 => out.put_u8(n as u8),
        3 => {
            out.put_u8(0xfd);
            out.put_u16_le(n as u16);
        }
        5 => {
            out.put_u8(0xfe);
            out.put_u32_le(n as u32);
        }
        _ => {
            out.put_u8(0xff);
            out.put_u64_le(n);
        }
    }
}

/// Write a length-prefixed byte string.
pub fn write_blob(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.put_slice(bytes);
}

/// Write a count followed by each item's encoding.
pub fn write_sequence<T: BinaryCodec>(out: &mut Vec<u8>, items: &[T]) {
    write_compact_size(out, items.len() as u64);
    for item in items {
        item.encode(out);
    }
}

/// A cursor over an input buffer.
///
/// Every read checks the remaining length first, so truncated input surfaces
/// as [`DeserializationError::UnexpectedEndOfStream`] rather than a panic.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(DeserializationError::UnexpectedEndOfStream {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.ensure(8)?;
        Ok(self.buf.get_u64_le())
    }

    pub fn read_i64_le(&mut self) -> Result<i64> {
        self.ensure(8)?;
        Ok(self.buf.get_i64_le())
    }

    /// Read exactly `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        Ok(out)
    }

    /// Borrow the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Read a compact size.
    ///
    /// Returns `Ok(None)` when the input is exhausted exactly at the size
    /// field, which lets callers tell "no more records" apart from a record
    /// that was cut short.
    pub fn read_compact_size(&mut self) -> Result<Option<u64>> {
        if self.is_empty() {
            return Ok(None);
        }

        let value = match self.buf.get_u8() {
            0xfd => {
                let n = u64::from(self.read_u16_le()?);
                if n < 253 {
                    return Err(DeserializationError::NonCanonicalCompactSize);
                }
                n
            }
            0xfe => {
                let n = u64::from(self.read_u32_le()?);
                if n <= 0xffff {
                    return Err(DeserializationError::NonCanonicalCompactSize);
                }
                n
            }
            0xff => {
                let n = self.read_u64_le()?;
                if n <= 0xffff_ffff {
                    return Err(DeserializationError::NonCanonicalCompactSize);
                }
                n
            }
            n => u64::from(n),
        };

        Ok(Some(value))
    }

    /// Read a compact size that must be present.
    pub fn expect_compact_size(&mut self) -> Result<u64> {
        self.read_compact_size()?
            .ok_or(DeserializationError::UnexpectedEndOfStream {
                needed: 1,
                remaining: 0,
            })
    }

    fn read_length(&mut self) -> Result<u64> {
        let len = self.expect_compact_size()?;
        if len > MAX_SIZE {
            return Err(DeserializationError::SizeTooLarge {
                size: len,
                max: MAX_SIZE,
            });
        }
        Ok(len)
    }

    /// Read a length-prefixed byte string.
    pub fn read_blob(&mut self) -> Result<&'a [u8]> {
        let len = self.read_length()? as usize;
        self.read_bytes(len)
    }

    /// Read a counted sequence of items.
    pub fn read_sequence<T: BinaryCodec>(&mut self) -> Result<Vec<T>> {
        self.read_sequence_bounded(MAX_SIZE)
    }

    /// Read a counted sequence, rejecting counts above `max` before decoding
    /// any item.
    pub fn read_sequence_bounded<T: BinaryCodec>(&mut self, max: u64) -> Result<Vec<T>> {
        let count = self.read_length()?;
        if count > max {
            return Err(DeserializationError::TooManyItems { count, max });
        }

        // Every item takes at least one byte.
        let mut items = Vec::with_capacity((count as usize).min(self.remaining()));
        for _ in 0..count {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }

    /// Consume the reader, failing if input is left over.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DeserializationError::TrailingBytes(n)),
        }
    }
}
