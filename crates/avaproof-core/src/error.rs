//! Error types for avaproof core primitives.

use thiserror::Error;

/// Malformed or truncated binary/hex input.
///
/// Always recoverable: the caller rejects the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeserializationError {
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEndOfStream { needed: usize, remaining: usize },

    #[error("non-canonical compact size encoding")]
    NonCanonicalCompactSize,

    #[error("size {size} exceeds maximum of {max}")]
    SizeTooLarge { size: u64, max: u64 },

    #[error("too many items: {count} exceeds maximum of {max}")]
    TooManyItems { count: u64, max: u64 },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid hex length: expected {expected} characters, got {got}")]
    InvalidHexLength { expected: usize, got: usize },

    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// Errors constructing private keys.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("secret key is zero or not below the curve order")]
    InvalidSecretKey,

    #[error("key decoding failed: {0}")]
    Deserialization(#[from] DeserializationError),
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DeserializationError>;
