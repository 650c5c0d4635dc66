//! SHA-256 based hashing.

use sha2::{Digest, Sha256};

use crate::uint256::Uint256;

/// Single SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256, the hash behind every identifier in the wire format.
pub fn sha256d(data: &[u8]) -> Uint256 {
    Uint256(sha256(&sha256(data)))
}
