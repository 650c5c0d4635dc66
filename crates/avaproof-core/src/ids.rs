//! Strongly typed identifiers.
//!
//! All identifiers are `Uint256` newtypes so that a proof id can never be
//! passed where a limited proof id is expected. They share the reversed hex
//! text form and little-endian ordering of [`Uint256`].

use bytes::BufMut;
use std::fmt;

use crate::codec::{BinaryCodec, Reader};
use crate::error::Result;
use crate::hash::sha256d;
use crate::keys::PublicKey;
use crate::uint256::Uint256;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uint256);

        impl $name {
            /// Create from raw bytes (hash output order).
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(Uint256::from_bytes(bytes))
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                self.0.as_bytes()
            }

            pub const fn as_uint256(&self) -> &Uint256 {
                &self.0
            }

            /// Byte-reversed hex.
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }

            /// Parse byte-reversed hex.
            pub fn from_hex(s: &str) -> Result<Self> {
                Uint256::from_hex(s).map(Self)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), &self.to_hex()[..16])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }

        impl From<Uint256> for $name {
            fn from(value: Uint256) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uint256 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl BinaryCodec for $name {
            fn encode(&self, out: &mut Vec<u8>) {
                self.0.encode(out);
            }

            fn decode(reader: &mut Reader<'_>) -> Result<Self> {
                Uint256::decode(reader).map(Self)
            }
        }
    };
}

define_id!(
    /// A transaction id.
    TxId
);

define_id!(
    /// Hash of a stake's encoding. Only used to order stakes inside a proof.
    StakeId
);

define_id!(
    /// Hash of a proof's content, excluding the master key and signatures.
    ///
    /// Seeds delegation chains.
    LimitedProofId
);

define_id!(
    /// The canonical proof identifier: limited id bound to the master key.
    ProofId
);

define_id!(
    /// Identifier of a delegation chain state.
    DelegationId
);

define_id!(
    /// Per-proof value mixed into every stake signature.
    StakeCommitment
);

impl LimitedProofId {
    /// `sha256d(limited_id || blob(master))`.
    pub fn compute_proof_id(&self, master: &PublicKey) -> ProofId {
        let mut buf = Vec::with_capacity(32 + 66);
        self.encode(&mut buf);
        master.encode(&mut buf);
        ProofId(sha256d(&buf))
    }
}

impl StakeCommitment {
    /// `sha256d(LE64(expiration) || blob(master))`.
    pub fn compute(expiration_time: i64, master: &PublicKey) -> Self {
        let mut buf = Vec::with_capacity(8 + 66);
        buf.put_i64_le(expiration_time);
        master.encode(&mut buf);
        Self(sha256d(&buf))
    }
}

impl DelegationId {
    /// Fold one more delegated key into the chain: `sha256d(id || blob(pubkey))`.
    pub fn extend(&self, pubkey: &PublicKey) -> Self {
        let mut buf = Vec::with_capacity(32 + 66);
        self.encode(&mut buf);
        pubkey.encode(&mut buf);
        Self(sha256d(&buf))
    }
}

/// A delegation with no levels has the proof id as its id.
impl From<ProofId> for DelegationId {
    fn from(proof_id: ProofId) -> Self {
        Self(proof_id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER_PUB: &str = "030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744";

    #[test]
    fn test_compute_proof_id() {
        let limited =
            LimitedProofId::from_hex("e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864")
                .unwrap();
        let master = PublicKey::from_hex(MASTER_PUB).unwrap();
        assert_eq!(
            limited.compute_proof_id(&master).to_hex(),
            "74c91491e5d6730ea1701817ed6c34e9627904fc3117647cc7d4bce73f56e45a"
        );
    }

    #[test]
    fn test_typed_ids_keep_uint256_order() {
        let a = StakeId::from_bytes([0xff; 32]);
        let mut low = [0xff; 32];
        low[31] = 0x00;
        let b = StakeId::from_bytes(low);
        assert!(b < a);
    }

    #[test]
    fn test_debug_names_the_type() {
        let id = ProofId::from_bytes([0xab; 32]);
        assert_eq!(format!("{id:?}"), "ProofId(abababababababab)");
    }

    #[test]
    fn test_delegation_id_extend_changes_id() {
        let master = PublicKey::from_hex(MASTER_PUB).unwrap();
        let root = DelegationId::from(ProofId::from_bytes([0x01; 32]));
        let next = root.extend(&master);
        assert_ne!(root, next);
        assert_eq!(next, root.extend(&master));
    }
}
