//! secp256k1 key wrappers.
//!
//! Public keys keep their exact wire encoding, compressed or not, because the
//! encoding is part of every hash that covers them. A key is only checked
//! against the curve when a signature is verified with it. Private keys carry
//! the compression flag of the public key they derive.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, SecretKey};
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::codec::{write_blob, BinaryCodec, Reader};
use crate::error::{DeserializationError, KeyError, Result};
use crate::schnorr::{self, SchnorrSignature};

/// Length of a compressed SEC1 point.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Length of an uncompressed SEC1 point.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

#[derive(Clone, PartialEq, Eq, Hash)]
enum Encoding {
    Compressed([u8; COMPRESSED_PUBLIC_KEY_SIZE]),
    Uncompressed([u8; UNCOMPRESSED_PUBLIC_KEY_SIZE]),
}

/// A secp256k1 public key in compressed (33-byte) or uncompressed (65-byte)
/// SEC1 form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    encoding: Encoding,
}

impl PublicKey {
    /// Parse a raw SEC1 encoding (no length prefix).
    ///
    /// Only `0x02`/`0x03` with 33 bytes and `0x04` with 65 bytes are accepted.
    /// The point itself is not checked here: a key off the curve decodes, and
    /// every signature check against it fails.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let encoding = match (bytes.len(), bytes.first().copied()) {
            (COMPRESSED_PUBLIC_KEY_SIZE, Some(0x02 | 0x03)) => {
                let mut raw = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
                raw.copy_from_slice(bytes);
                Encoding::Compressed(raw)
            }
            (UNCOMPRESSED_PUBLIC_KEY_SIZE, Some(0x04)) => {
                let mut raw = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
                raw.copy_from_slice(bytes);
                Encoding::Uncompressed(raw)
            }
            (len, prefix) => {
                return Err(DeserializationError::InvalidPublicKey(format!(
                    "unsupported encoding: {len} bytes with prefix {prefix:02x?}"
                )))
            }
        };
        Ok(Self { encoding })
    }

    /// Parse the hex of a raw SEC1 encoding.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    fn from_point(point: &k256::PublicKey, compressed: bool) -> Self {
        let encoded = point.to_encoded_point(compressed);
        let encoding = if compressed {
            let mut raw = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
            raw.copy_from_slice(encoded.as_bytes());
            Encoding::Compressed(raw)
        } else {
            let mut raw = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
            raw.copy_from_slice(encoded.as_bytes());
            Encoding::Uncompressed(raw)
        };
        Self { encoding }
    }

    /// The raw SEC1 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.encoding {
            Encoding::Compressed(raw) => raw,
            Encoding::Uncompressed(raw) => raw,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.encoding, Encoding::Compressed(_))
    }

    /// The 33-byte encoding, whatever format this key is stored in.
    ///
    /// An uncompressed key is compressed from its bytes: the Y parity picks
    /// the prefix and X is copied.
    pub fn to_compressed_bytes(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        match &self.encoding {
            Encoding::Compressed(raw) => *raw,
            Encoding::Uncompressed(raw) => {
                let mut out = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
                out[0] = 0x02 | (raw[64] & 1);
                out[1..].copy_from_slice(&raw[1..33]);
                out
            }
        }
    }

    /// Whether the encoding names a point on the curve.
    pub fn is_fully_valid(&self) -> bool {
        k256::PublicKey::from_sec1_bytes(self.as_bytes()).is_ok()
    }

    /// Check a Schnorr signature over a 32-byte message hash.
    ///
    /// Always false for a key that is not on the curve.
    pub fn verify_schnorr(&self, signature: &SchnorrSignature, message_hash: &[u8; 32]) -> bool {
        let Ok(point) = k256::PublicKey::from_sec1_bytes(self.as_bytes()) else {
            return false;
        };
        schnorr::verify(
            &point.to_projective(),
            &self.to_compressed_bytes(),
            signature,
            message_hash,
        )
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Length-prefixed on the wire.
impl BinaryCodec for PublicKey {
    fn encode(&self, out: &mut Vec<u8>) {
        write_blob(out, self.as_bytes());
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::from_slice(reader.read_blob()?)
    }
}

impl serde::Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A secp256k1 secret scalar plus the compression flag of its public key.
///
/// Never part of any wire encoding.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    compressed: bool,
}

impl PrivateKey {
    /// Generate a new random key with a compressed public key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            secret: SecretKey::random(&mut rng),
            compressed: true,
        }
    }

    /// Create from a 32-byte big-endian secret.
    pub fn from_bytes(secret: &[u8; 32], compressed: bool) -> std::result::Result<Self, KeyError> {
        let secret = SecretKey::from_bytes(&FieldBytes::from(*secret))
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self { secret, compressed })
    }

    /// Parse a 64-character hex secret.
    pub fn from_hex(s: &str, compressed: bool) -> std::result::Result<Self, KeyError> {
        if s.len() != 64 {
            return Err(DeserializationError::InvalidHexLength {
                expected: 64,
                got: s.len(),
            }
            .into());
        }
        let mut secret = [0u8; 32];
        hex::decode_to_slice(s, &mut secret).map_err(DeserializationError::from)?;
        Self::from_bytes(&secret, compressed)
    }

    /// The raw secret bytes.
    pub fn secret_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.secret.to_bytes());
        out
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The matching public key, in this key's compression format.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(&self.secret.public_key(), self.compressed)
    }

    /// Sign a 32-byte message hash.
    pub fn sign_schnorr(&self, message_hash: &[u8; 32]) -> SchnorrSignature {
        let scalar = self.secret.to_nonzero_scalar();
        schnorr::sign(&scalar, &self.public_key().to_compressed_bytes(), message_hash)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({:?})", self.public_key())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed && self.secret_bytes() == other.secret_bytes()
    }
}

impl Eq for PrivateKey {}
