//! # avaproof core
//!
//! Wire-level primitives for Avalanche stake proofs: the Bitcoin-style binary
//! codec, 256-bit identifiers, SHA-256d, secp256k1 keys with BCH Schnorr
//! signatures, outpoints and payout scripts.
//!
//! This crate does no I/O. Every type here has an exact binary encoding shared
//! with the full node, exposed through [`BinaryCodec`].
//!
//! ## Key Types
//!
//! - [`Uint256`] - 32-byte hash value with reversed hex and little-endian ordering
//! - [`PublicKey`] / [`PrivateKey`] - secp256k1 keys that remember their compression
//! - [`SchnorrSignature`] - 64-byte BCH Schnorr signature
//! - [`OutPoint`] - reference to a transaction output
//! - [`PayoutScript`] - raw output script with standardness classification

pub mod codec;
pub mod error;
pub mod hash;
pub mod ids;
pub mod keys;
pub mod outpoint;
pub mod schnorr;
pub mod script;
pub mod uint256;

pub use codec::{BinaryCodec, Reader};
pub use error::{DeserializationError, KeyError, Result};
pub use hash::{sha256, sha256d};
pub use ids::{DelegationId, LimitedProofId, ProofId, StakeCommitment, StakeId, TxId};
pub use keys::{PrivateKey, PublicKey};
pub use outpoint::OutPoint;
pub use schnorr::SchnorrSignature;
pub use script::{PayoutDestination, PayoutScript};
pub use uint256::Uint256;
