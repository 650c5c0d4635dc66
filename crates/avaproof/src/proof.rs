//! Proof: a signed bundle of stakes under one master key.
//!
//! A proof is immutable once built. All identifiers are recomputed from its
//! content on demand.

use bytes::BufMut;

use avaproof_core::codec::{write_compact_size, write_sequence, BinaryCodec, Reader};
use avaproof_core::hash::sha256d;
use avaproof_core::{
    LimitedProofId, PayoutDestination, PayoutScript, ProofId, PublicKey, SchnorrSignature,
    StakeCommitment,
};

use crate::error::Result;
use crate::stake::{SignedStake, Stake};

/// Satoshis per unit of proof score.
pub const AMOUNT_PER_SCORE: i64 = 1_000_000;

/// An avalanche proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub sequence: u64,
    /// Unix time after which the proof is no longer valid; 0 means never.
    pub expiration_time: i64,
    pub master: PublicKey,
    /// Sorted by ascending stake id.
    pub stakes: Vec<SignedStake>,
    pub payout_script: PayoutScript,
    /// Master key signature over the limited proof id.
    pub signature: SchnorrSignature,
}

/// `sha256d(seq || exp || blob(payout) || compactsize(n) || stakes...)`.
///
/// Stakes are hashed without their signatures.
pub(crate) fn compute_limited_id<'a>(
    sequence: u64,
    expiration_time: i64,
    payout_script: &PayoutScript,
    stakes: impl ExactSizeIterator<Item = &'a Stake>,
) -> LimitedProofId {
    let mut buf = Vec::new();
    buf.put_u64_le(sequence);
    buf.put_i64_le(expiration_time);
    payout_script.encode(&mut buf);
    write_compact_size(&mut buf, stakes.len() as u64);
    for stake in stakes {
        stake.encode(&mut buf);
    }
    LimitedProofId(sha256d(&buf))
}

impl Proof {
    pub fn limited_proof_id(&self) -> LimitedProofId {
        compute_limited_id(
            self.sequence,
            self.expiration_time,
            &self.payout_script,
            self.stakes.iter().map(|s| &s.stake),
        )
    }

    pub fn proof_id(&self) -> ProofId {
        self.limited_proof_id().compute_proof_id(&self.master)
    }

    /// The value every stake signature in this proof covers.
    pub fn stake_commitment(&self) -> StakeCommitment {
        StakeCommitment::compute(self.expiration_time, &self.master)
    }

    /// Check the master signature over the raw limited id bytes.
    pub fn verify_master_signature(&self) -> bool {
        self.master
            .verify_schnorr(&self.signature, self.limited_proof_id().as_bytes())
    }

    pub fn stake_count(&self) -> usize {
        self.stakes.len()
    }

    /// Sum of all stake amounts, saturating.
    pub fn total_staked_amount(&self) -> i64 {
        self.stakes
            .iter()
            .fold(0i64, |total, s| total.saturating_add(s.stake.amount))
    }

    /// Total staked amount in units of [`AMOUNT_PER_SCORE`].
    pub fn score(&self) -> u32 {
        let score = self.total_staked_amount() / AMOUNT_PER_SCORE;
        score.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Whether the proof is expired at `time` (Unix seconds).
    pub fn is_expired_at(&self, time: i64) -> bool {
        self.expiration_time > 0 && time >= self.expiration_time
    }

    pub fn payout_destination(&self) -> PayoutDestination {
        self.payout_script.destination()
    }

    pub fn to_hex(&self) -> String {
        self.serialize_hex()
    }

    /// Parse a hex encoded proof. The input must hold exactly one proof.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::deserialize_hex(s)?)
    }
}

/// seq || exp || blob(master) || sequence(signed stakes) || blob(payout) || signature
impl BinaryCodec for Proof {
    fn encode(&self, out: &mut Vec<u8>) {
        out.put_u64_le(self.sequence);
        out.put_i64_le(self.expiration_time);
        self.master.encode(out);
        write_sequence(out, &self.stakes);
        self.payout_script.encode(out);
        self.signature.encode(out);
    }

    fn decode(reader: &mut Reader<'_>) -> avaproof_core::Result<Self> {
        let sequence = reader.read_u64_le()?;
        let expiration_time = reader.read_i64_le()?;
        let master = PublicKey::decode(reader)?;
        let stakes = reader.read_sequence()?;
        let payout_script = PayoutScript::decode(reader)?;
        let signature = SchnorrSignature::decode(reader)?;
        Ok(Self {
            sequence,
            expiration_time,
            master,
            stakes,
            payout_script,
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use avaproof_core::DeserializationError;

    const PROOF_HEX: &str = "2a00000000000000fff053650000000021030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a74401b7fc19792583e9cb39843fc5e22a4e3648ab1cb18a70290b341ee8d4f550ae24000000001027000000000000788814004104d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0abd9740c85a05a7d543c3d301273d79ff7054758579e30cc05cdfe1aca3374adfe55104b409ffce4a2f19d8a5981d5f0c79b23edac73352ab2898aca89270282500788bac77505ca17d6d0dcc946ced3990c2857c73743cd74d881fcbcbc8eaaa8d72812ebb9a556610687ca592fe907a4af024390e0a9260c4f5ea59e7ac426cc5";

    #[test]
    fn test_decode_known_proof() {
        let proof = Proof::from_hex(PROOF_HEX).unwrap();
        assert_eq!(proof.sequence, 42);
        assert_eq!(proof.expiration_time, 1_699_999_999);
        assert_eq!(proof.stake_count(), 1);
        assert_eq!(proof.total_staked_amount(), 10_000);
        assert_eq!(proof.score(), 0);
        assert!(proof.payout_script.is_empty());
        assert_eq!(
            proof.limited_proof_id().to_hex(),
            "e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864"
        );
        assert_eq!(
            proof.proof_id().to_hex(),
            "74c91491e5d6730ea1701817ed6c34e9627904fc3117647cc7d4bce73f56e45a"
        );
        assert!(proof.verify_master_signature());
        assert!(proof.stakes[0].verify_signature(&proof.stake_commitment()));
        assert_eq!(proof.to_hex(), PROOF_HEX);
    }

    #[test]
    fn test_master_signature_tamper() {
        let mut proof = Proof::from_hex(PROOF_HEX).unwrap();
        proof.signature.0[10] ^= 0x01;
        assert!(!proof.verify_master_signature());
        // Stake signatures do not cover the master signature.
        assert!(proof.stakes[0].verify_signature(&proof.stake_commitment()));
    }

    #[test]
    fn test_payout_change_changes_ids() {
        let proof = Proof::from_hex(PROOF_HEX).unwrap();
        let mut changed = proof.clone();
        changed.payout_script = PayoutScript::from(vec![0x6a]);
        assert_ne!(changed.limited_proof_id(), proof.limited_proof_id());
        assert!(!changed.verify_master_signature());
    }

    #[test]
    fn test_expiry() {
        let proof = Proof::from_hex(PROOF_HEX).unwrap();
        assert!(!proof.is_expired_at(1_699_999_998));
        assert!(proof.is_expired_at(1_699_999_999));

        let mut never = proof;
        never.expiration_time = 0;
        assert!(!never.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_truncated_and_trailing_input() {
        let bytes = hex::decode(PROOF_HEX).unwrap();
        for len in [0, 8, 16, 50, 200, 293] {
            assert!(Proof::deserialize(&bytes[..len]).is_err(), "len {len}");
        }

        let mut extra = PROOF_HEX.to_string();
        extra.push_str("00");
        assert_eq!(
            Proof::from_hex(&extra),
            Err(Error::Deserialization(DeserializationError::TrailingBytes(1)))
        );
        assert!(Proof::from_hex("2a0").is_err());
        assert!(Proof::from_hex("zz").is_err());
    }
}
