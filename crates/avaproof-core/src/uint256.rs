//! 256-bit identifier blob.
//!
//! Transaction ids, stake ids, proof ids and delegation ids are all 32-byte
//! hash outputs. They are stored in hash output order but displayed and
//! compared the way the node treats 256-bit integers: little-endian, so the
//! hex text is byte-reversed and ordering starts from the last byte.

use serde::{Deserializer, Serializer};
use std::cmp::Ordering;
use std::fmt;

use bytes::BufMut;

use crate::codec::{BinaryCodec, Reader};
use crate::error::{DeserializationError, Result};

/// A raw 32-byte identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint256(pub [u8; 32]);

impl Uint256 {
    /// The null (all-zero) value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create from raw bytes (hash output order).
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Byte-reversed hex, as displayed by the node.
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Parse byte-reversed hex. Exactly 64 hex characters are required.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != 64 {
            return Err(DeserializationError::InvalidHexLength {
                expected: 64,
                got: s.len(),
            });
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Uint256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Uint256 {
    type Error = DeserializationError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; 32] = slice
            .try_into()
            .map_err(|_| DeserializationError::InvalidLength {
                expected: 32,
                got: slice.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl BinaryCodec for Uint256 {
    fn encode(&self, out: &mut Vec<u8>) {
        out.put_slice(&self.0);
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self(reader.read_array::<32>()?))
    }
}

impl serde::Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Uint256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_byte_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0xff;
        let id = Uint256::from_bytes(bytes);
        let hex = id.to_hex();
        assert!(hex.starts_with("ff"));
        assert!(hex.ends_with("01"));
        assert_eq!(Uint256::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn test_ordering_is_little_endian() {
        let mut low = [0u8; 32];
        low[0] = 0xff;
        let mut high = [0u8; 32];
        high[31] = 0x01;
        assert!(Uint256(low) < Uint256(high));
        assert!(Uint256::ZERO < Uint256(low));
        assert_eq!(Uint256(low).cmp(&Uint256(low)), Ordering::Equal);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        let short = "ab".repeat(31);
        assert_eq!(
            Uint256::from_hex(&short),
            Err(DeserializationError::InvalidHexLength { expected: 64, got: 62 })
        );
        let long = "ab".repeat(33);
        assert!(Uint256::from_hex(&long).is_err());
        let bad = format!("yz{}", "00".repeat(31));
        assert!(matches!(
            Uint256::from_hex(&bad),
            Err(DeserializationError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_try_from_slice_width() {
        assert!(Uint256::try_from(&[0u8; 31][..]).is_err());
        assert!(Uint256::try_from(&[0u8; 33][..]).is_err());
        assert!(Uint256::try_from(&[0u8; 32][..]).unwrap().is_null());
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let id = Uint256::from_bytes([0x11; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(32)));
        let back: Uint256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
