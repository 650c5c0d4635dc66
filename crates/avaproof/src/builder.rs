//! Proof builder.

use avaproof_core::{OutPoint, PayoutScript, PrivateKey, PublicKey, SchnorrSignature, StakeCommitment};

use crate::error::{Error, Result};
use crate::proof::{compute_limited_id, Proof};
use crate::stake::{SignedStake, Stake};

/// Who signs the proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signer {
    /// Sign with the master private key.
    Key(PrivateKey),
    /// Only the master public key is known; the proof gets a zero signature.
    PubkeyOnly(PublicKey),
}

impl Signer {
    pub fn public_key(&self) -> PublicKey {
        match self {
            Self::Key(key) => key.public_key(),
            Self::PubkeyOnly(pubkey) => pubkey.clone(),
        }
    }
}

/// Assembles signed stakes into a [`Proof`].
///
/// Stakes are kept sorted by stake id as they are added, so the insertion
/// order never affects the built proof.
#[derive(Debug, Clone)]
pub struct ProofBuilder {
    sequence: u64,
    expiration_time: i64,
    payout_script: PayoutScript,
    signer: Signer,
    master: PublicKey,
    commitment: StakeCommitment,
    stakes: Vec<SignedStake>,
}

impl ProofBuilder {
    /// Start building a proof.
    pub fn new(
        sequence: u64,
        expiration_time: i64,
        payout_script: PayoutScript,
        signer: Signer,
    ) -> Self {
        let master = signer.public_key();
        let commitment = StakeCommitment::compute(expiration_time, &master);
        Self {
            sequence,
            expiration_time,
            payout_script,
            signer,
            master,
            commitment,
            stakes: Vec::new(),
        }
    }

    /// Re-open an existing proof, keeping its stakes.
    ///
    /// Without a master key the rebuilt proof carries a zero signature.
    pub fn from_proof(proof: Proof, master_key: Option<PrivateKey>) -> Result<Self> {
        let signer = match master_key {
            Some(key) if key.public_key() != proof.master => return Err(Error::MasterKeyMismatch),
            Some(key) => Signer::Key(key),
            None => Signer::PubkeyOnly(proof.master),
        };
        let mut builder = Self::new(
            proof.sequence,
            proof.expiration_time,
            proof.payout_script,
            signer,
        );
        for stake in proof.stakes {
            builder.add_signed_stake(stake);
        }
        Ok(builder)
    }

    pub fn master(&self) -> &PublicKey {
        &self.master
    }

    pub fn stake_commitment(&self) -> &StakeCommitment {
        &self.commitment
    }

    pub fn stakes(&self) -> &[SignedStake] {
        &self.stakes
    }

    /// Build a stake from UTXO fields, sign it with `key` and add it.
    pub fn add_utxo(
        &mut self,
        utxo: OutPoint,
        amount: i64,
        height: u32,
        is_coinbase: bool,
        key: &PrivateKey,
    ) -> Result<&mut Self> {
        let stake = Stake::new(utxo, amount, height, is_coinbase, key.public_key());
        self.sign_and_add_stake(stake, key)
    }

    /// Sign `stake` under this builder's commitment and add it.
    ///
    /// Fails with [`Error::StakeKeyMismatch`] unless `key` owns the stake.
    pub fn sign_and_add_stake(&mut self, stake: Stake, key: &PrivateKey) -> Result<&mut Self> {
        let signed = stake.sign(key, &self.commitment)?;
        Ok(self.add_signed_stake(signed))
    }

    /// Add an already signed stake at its sorted position.
    ///
    /// Equal stake ids keep insertion order. Duplicates are not rejected here.
    pub fn add_signed_stake(&mut self, stake: SignedStake) -> &mut Self {
        let id = stake.stake_id();
        let index = self.stakes.partition_point(|s| s.stake_id() <= id);
        self.stakes.insert(index, stake);
        self
    }

    /// Sign and return the proof. The builder stays usable.
    pub fn build(&self) -> Proof {
        let limited_id = compute_limited_id(
            self.sequence,
            self.expiration_time,
            &self.payout_script,
            self.stakes.iter().map(|s| &s.stake),
        );
        let signature = match &self.signer {
            Signer::Key(key) => key.sign_schnorr(limited_id.as_bytes()),
            Signer::PubkeyOnly(_) => SchnorrSignature::ZERO,
        };

        let proof = Proof {
            sequence: self.sequence,
            expiration_time: self.expiration_time,
            master: self.master.clone(),
            stakes: self.stakes.clone(),
            payout_script: self.payout_script.clone(),
            signature,
        };
        tracing::debug!(
            proof_id = %proof.proof_id(),
            limited_id = %limited_id,
            stakes = proof.stakes.len(),
            "built proof"
        );
        proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avaproof_core::TxId;

    const MASTER_SECRET: &str = "12b004fff7f4b69ef8650e767f18f11ede158148b425660723b9f9a66e61f747";
    const STAKE_SECRET: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const TXID: &str = "24ae50f5d4e81e340b29708ab11cab48364e2ae2c53f8439cbe983257919fcb7";

    fn master() -> PrivateKey {
        PrivateKey::from_hex(MASTER_SECRET, true).unwrap()
    }

    fn stake_key() -> PrivateKey {
        PrivateKey::from_hex(STAKE_SECRET, false).unwrap()
    }

    fn utxo(vout: u32) -> OutPoint {
        OutPoint::new(TxId::from_hex(TXID).unwrap(), vout)
    }

    #[test]
    fn test_build_known_proof() {
        let mut builder =
            ProofBuilder::new(42, 1_699_999_999, PayoutScript::empty(), Signer::Key(master()));
        builder
            .add_utxo(utxo(0), 10_000, 672_828, false, &stake_key())
            .unwrap();
        let proof = builder.build();
        assert_eq!(
            proof.proof_id().to_hex(),
            "74c91491e5d6730ea1701817ed6c34e9627904fc3117647cc7d4bce73f56e45a"
        );
        assert!(proof.verify_master_signature());
        assert_eq!(builder.build(), proof);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let key = stake_key();
        let mut forward =
            ProofBuilder::new(1, 0, PayoutScript::empty(), Signer::Key(master()));
        let mut backward = forward.clone();
        for vout in 0..5 {
            forward.add_utxo(utxo(vout), 1_000, 100, false, &key).unwrap();
        }
        for vout in (0..5).rev() {
            backward.add_utxo(utxo(vout), 1_000, 100, false, &key).unwrap();
        }
        let proof = forward.build();
        assert_eq!(proof, backward.build());
        assert!(proof
            .stakes
            .windows(2)
            .all(|w| w[0].stake_id() <= w[1].stake_id()));
    }

    #[test]
    fn test_pubkey_only_builder() {
        let mut builder = ProofBuilder::new(
            1,
            0,
            PayoutScript::empty(),
            Signer::PubkeyOnly(master().public_key()),
        );
        builder.add_utxo(utxo(0), 1_000, 1, true, &stake_key()).unwrap();
        let proof = builder.build();
        assert!(proof.signature.is_zero());
        assert!(!proof.verify_master_signature());
        assert!(proof.stakes[0].verify_signature(&proof.stake_commitment()));
    }

    #[test]
    fn test_stake_key_mismatch() {
        let mut builder =
            ProofBuilder::new(1, 0, PayoutScript::empty(), Signer::Key(master()));
        let stake = Stake::new(utxo(0), 1_000, 1, false, stake_key().public_key());
        assert_eq!(
            builder.sign_and_add_stake(stake, &master()).map(|_| ()),
            Err(Error::StakeKeyMismatch)
        );
        assert!(builder.stakes().is_empty());
    }

    #[test]
    fn test_from_proof() {
        let mut builder =
            ProofBuilder::new(7, 0, PayoutScript::empty(), Signer::Key(master()));
        builder.add_utxo(utxo(3), 5_000, 10, false, &stake_key()).unwrap();
        let proof = builder.build();

        let reopened = ProofBuilder::from_proof(proof.clone(), Some(master())).unwrap();
        assert_eq!(reopened.build(), proof);

        let unsigned = ProofBuilder::from_proof(proof.clone(), None).unwrap().build();
        assert_eq!(unsigned.proof_id(), proof.proof_id());
        assert!(unsigned.signature.is_zero());

        assert_eq!(
            ProofBuilder::from_proof(proof, Some(stake_key())).map(|_| ()),
            Err(Error::MasterKeyMismatch)
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut builder =
            ProofBuilder::new(1, 0, PayoutScript::empty(), Signer::Key(master()));
        builder.add_utxo(utxo(0), 1_000, 1, false, &stake_key()).unwrap();
        builder.add_utxo(utxo(0), 1_000, 1, false, &stake_key()).unwrap();
        assert_eq!(builder.build().stake_count(), 2);
    }
}
