//! Stakes: UTXOs committed to a proof.
//!
//! A stake proves control of one coin. Its signature covers the proof's stake
//! commitment, so a signed stake cannot be lifted into a proof with a
//! different master key or expiration.

use bytes::BufMut;

use avaproof_core::codec::{BinaryCodec, Reader};
use avaproof_core::hash::sha256d;
use avaproof_core::{
    OutPoint, PrivateKey, PublicKey, SchnorrSignature, StakeCommitment, StakeId, TxId,
};

use crate::error::{Error, Result};

/// An unsigned stake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Stake {
    pub utxo: OutPoint,
    /// Value in satoshis.
    pub amount: i64,
    /// Block height of the UTXO. Only the low 31 bits survive encoding.
    pub height: u32,
    pub is_coinbase: bool,
    pub pubkey: PublicKey,
}

impl Stake {
    /// `height` must fit in 31 bits. The top bit is shifted out when the
    /// coinbase flag is packed in, so a larger height does not survive encoding.
    pub fn new(
        utxo: OutPoint,
        amount: i64,
        height: u32,
        is_coinbase: bool,
        pubkey: PublicKey,
    ) -> Self {
        Self {
            utxo,
            amount,
            height,
            is_coinbase,
            pubkey,
        }
    }

    /// Sort key inside a proof.
    pub fn stake_id(&self) -> StakeId {
        StakeId(sha256d(&self.serialize()))
    }

    /// The hash a stake signature covers: `sha256d(commitment || stake)`.
    pub fn signature_hash(&self, commitment: &StakeCommitment) -> [u8; 32] {
        let mut buf = Vec::with_capacity(32 + 116);
        commitment.encode(&mut buf);
        self.encode(&mut buf);
        sha256d(&buf).0
    }

    /// Sign with the private key of `self.pubkey`.
    pub fn sign(self, key: &PrivateKey, commitment: &StakeCommitment) -> Result<SignedStake> {
        if key.public_key() != self.pubkey {
            return Err(Error::StakeKeyMismatch);
        }
        let signature = key.sign_schnorr(&self.signature_hash(commitment));
        Ok(SignedStake {
            stake: self,
            signature,
        })
    }

    fn packed_height(&self) -> u32 {
        (self.height << 1) | u32::from(self.is_coinbase)
    }
}

/// outpoint || LE i64 amount || LE u32 (height << 1 | coinbase) || blob(pubkey)
impl BinaryCodec for Stake {
    fn encode(&self, out: &mut Vec<u8>) {
        self.utxo.encode(out);
        out.put_i64_le(self.amount);
        out.put_u32_le(self.packed_height());
        self.pubkey.encode(out);
    }

    fn decode(reader: &mut Reader<'_>) -> avaproof_core::Result<Self> {
        let txid = TxId::decode(reader)?;
        let vout = reader.read_u32_le()?;
        let amount = reader.read_i64_le()?;
        let packed = reader.read_u32_le()?;
        let pubkey = PublicKey::decode(reader)?;
        Ok(Self {
            utxo: OutPoint::new(txid, vout),
            amount,
            height: packed >> 1,
            is_coinbase: packed & 1 == 1,
            pubkey,
        })
    }
}

/// A stake with its signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SignedStake {
    pub stake: Stake,
    pub signature: SchnorrSignature,
}

impl SignedStake {
    pub fn new(stake: Stake, signature: SchnorrSignature) -> Self {
        Self { stake, signature }
    }

    pub fn stake_id(&self) -> StakeId {
        self.stake.stake_id()
    }

    /// Check the signature against the proof's commitment.
    pub fn verify_signature(&self, commitment: &StakeCommitment) -> bool {
        self.stake
            .pubkey
            .verify_schnorr(&self.signature, &self.stake.signature_hash(commitment))
    }
}

impl BinaryCodec for SignedStake {
    fn encode(&self, out: &mut Vec<u8>) {
        self.stake.encode(out);
        self.signature.encode(out);
    }

    fn decode(reader: &mut Reader<'_>) -> avaproof_core::Result<Self> {
        let stake = Stake::decode(reader)?;
        let signature = SchnorrSignature::decode(reader)?;
        Ok(Self { stake, signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avaproof_core::DeserializationError;

    const STAKE_SECRET: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const MASTER_PUB: &str = "030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744";
    const STAKE_HEX: &str = "b7fc19792583e9cb39843fc5e22a4e3648ab1cb18a70290b341ee8d4f550ae24000000001027000000000000788814004104d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0a";
    const STAKE_SIG: &str = "bd9740c85a05a7d543c3d301273d79ff7054758579e30cc05cdfe1aca3374adfe55104b409ffce4a2f19d8a5981d5f0c79b23edac73352ab2898aca892702825";

    fn stake_key() -> PrivateKey {
        PrivateKey::from_hex(STAKE_SECRET, false).unwrap()
    }

    fn commitment() -> StakeCommitment {
        StakeCommitment::compute(1_699_999_999, &PublicKey::from_hex(MASTER_PUB).unwrap())
    }

    fn stake() -> Stake {
        let txid =
            TxId::from_hex("24ae50f5d4e81e340b29708ab11cab48364e2ae2c53f8439cbe983257919fcb7")
                .unwrap();
        Stake::new(OutPoint::new(txid, 0), 10_000, 672_828, false, stake_key().public_key())
    }

    #[test]
    fn test_stake_encoding() {
        let stake = stake();
        assert_eq!(hex::encode(stake.serialize()), STAKE_HEX);
        assert_eq!(Stake::deserialize_hex(STAKE_HEX).unwrap(), stake);
        assert_eq!(
            stake.stake_id().to_hex(),
            "6a7c6d1790a370ba1324e3d49e23d7eaf5850988437111a0a1b51433ceb4183e"
        );
    }

    #[test]
    fn test_commitment() {
        assert_eq!(
            commitment().to_hex(),
            "b0633432751cb17f8da3f4b72f44bb004ab313ce0ce2b336a51313d5e417932a"
        );
    }

    #[test]
    fn test_coinbase_flag_packs_into_height() {
        let mut stake = stake();
        stake.is_coinbase = true;
        let bytes = stake.serialize();
        assert_eq!(&bytes[44..48], &(672_828u32 * 2 + 1).to_le_bytes());
        let decoded = Stake::deserialize(&bytes).unwrap();
        assert!(decoded.is_coinbase);
        assert_eq!(decoded.height, 672_828);
    }

    #[test]
    fn test_height_top_bit_is_dropped() {
        let mut stake = stake();
        stake.height = (1 << 31) | 5;
        stake.is_coinbase = true;

        let decoded = Stake::deserialize(&stake.serialize()).unwrap();
        assert_eq!(decoded.height, 5);
        assert!(decoded.is_coinbase);
        assert_ne!(decoded, stake);
    }

    #[test]
    fn test_json_and_binary_encodings_coexist() {
        let signed = stake().sign(&stake_key(), &commitment()).unwrap();

        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["stake"]["pubkey"], stake_key().public_key().to_hex());
        assert_eq!(json["signature"], STAKE_SIG);
        let from_json: SignedStake = serde_json::from_value(json).unwrap();
        assert_eq!(from_json, signed);

        let bytes = signed.serialize();
        assert_eq!(bytes.len(), STAKE_HEX.len() / 2 + 64);
        assert_eq!(SignedStake::deserialize(&bytes).unwrap(), from_json);
    }

    #[test]
    fn test_sign_matches_vector() {
        let signed = stake().sign(&stake_key(), &commitment()).unwrap();
        assert_eq!(signed.signature.to_hex(), STAKE_SIG);
        assert!(signed.verify_signature(&commitment()));

        let other = StakeCommitment::compute(0, &PublicKey::from_hex(MASTER_PUB).unwrap());
        assert!(!signed.verify_signature(&other));
    }

    #[test]
    fn test_sign_rejects_foreign_key() {
        let compressed = PrivateKey::from_hex(STAKE_SECRET, true).unwrap();
        assert_eq!(
            stake().sign(&compressed, &commitment()),
            Err(Error::StakeKeyMismatch)
        );
    }

    #[test]
    fn test_signed_stake_short_signature() {
        let mut bytes = hex::decode(STAKE_HEX).unwrap();
        bytes.extend_from_slice(&[0u8; 63]);
        assert!(matches!(
            SignedStake::deserialize(&bytes),
            Err(DeserializationError::UnexpectedEndOfStream { needed: 64, remaining: 63 })
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_height_and_coinbase_survive(height in 0u32..(1 << 31), is_coinbase in any::<bool>(), amount in any::<i64>()) {
                let mut stake = stake();
                stake.height = height;
                stake.is_coinbase = is_coinbase;
                stake.amount = amount;

                let decoded = Stake::deserialize(&stake.serialize()).unwrap();
                prop_assert_eq!(decoded, stake);
            }
        }
    }
}
