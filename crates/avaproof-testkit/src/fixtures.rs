//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use avaproof::{
    Delegation, DelegationBuilder, OutPoint, PayoutScript, PrivateKey, Proof, ProofBuilder,
    PublicKey, Signer, TxId,
};

/// Satoshis per coin.
pub const COIN: i64 = 100_000_000;

/// Stake amount used by fixtures; clears the default dust threshold.
pub const FIXTURE_STAKE_AMOUNT: i64 = 200 * COIN;

/// A standard P2PKH payout script.
pub const FIXTURE_PAYOUT_HEX: &str = "76a914f8172c51efbf34aaa1c0a1ba5ddc5a9b72fd5c0f88ac";

/// Deterministic private key for a small integer seed.
pub fn key_from_seed(seed: u8) -> PrivateKey {
    let mut secret = [0x11u8; 32];
    secret[31] = seed;
    PrivateKey::from_bytes(&secret, true).expect("0x11.. is below the curve order")
}

/// A master key plus a stake key.
pub struct TestFixture {
    pub master: PrivateKey,
    pub stake_key: PrivateKey,
}

impl TestFixture {
    /// Create a new test fixture with random keys.
    pub fn new() -> Self {
        Self {
            master: PrivateKey::generate(),
            stake_key: PrivateKey::generate(),
        }
    }

    /// Create with deterministic keys.
    pub fn with_seed(seed: u8) -> Self {
        Self {
            master: key_from_seed(seed),
            stake_key: key_from_seed(seed.wrapping_add(0x80)),
        }
    }

    pub fn master_public_key(&self) -> PublicKey {
        self.master.public_key()
    }

    /// A builder signing with the master key and paying to a P2PKH script.
    pub fn proof_builder(&self, sequence: u64, expiration_time: i64) -> ProofBuilder {
        let payout = PayoutScript::from_hex(FIXTURE_PAYOUT_HEX).expect("fixture payout hex");
        ProofBuilder::new(
            sequence,
            expiration_time,
            payout,
            Signer::Key(self.master.clone()),
        )
    }

    /// A network-valid proof with `stakes` distinct UTXOs.
    pub fn make_proof(&self, stakes: u32) -> Proof {
        let mut builder = self.proof_builder(1, 0);
        for vout in 0..stakes {
            builder
                .add_utxo(
                    fixture_outpoint(vout),
                    FIXTURE_STAKE_AMOUNT,
                    100,
                    false,
                    &self.stake_key,
                )
                .expect("stake key signs its own stake");
        }
        builder.build()
    }

    /// A single-stake proof on a random UTXO.
    pub fn make_random_proof(&self, amount: i64) -> Proof {
        let mut builder = self.proof_builder(1, 0);
        builder
            .add_utxo(random_outpoint(), amount, 100, false, &self.stake_key)
            .expect("stake key signs its own stake");
        builder.build()
    }

    /// Delegate `proof` through `levels` fresh keys.
    ///
    /// Returns the delegation and the private key of every delegated level.
    pub fn delegate(&self, proof: &Proof, levels: usize) -> (Delegation, Vec<PrivateKey>) {
        let mut builder = DelegationBuilder::from_proof(proof);
        let mut keys = Vec::with_capacity(levels);
        let mut delegator = self.master.clone();
        for _ in 0..levels {
            let next = PrivateKey::generate();
            builder
                .add_level(&delegator, next.public_key())
                .expect("delegator is the chain tip");
            delegator = next.clone();
            keys.push(next);
        }
        (builder.build(), keys)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// An outpoint of a fixed fixture transaction.
pub fn fixture_outpoint(vout: u32) -> OutPoint {
    OutPoint::new(TxId::from_bytes([0x5a; 32]), vout)
}

/// An outpoint of a random transaction.
pub fn random_outpoint() -> OutPoint {
    OutPoint::new(TxId::from_bytes(rand::random()), rand::random::<u32>() % 4)
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: u8) -> Vec<TestFixture> {
    (0..count).map(TestFixture::with_seed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avaproof::{validate_proof, ProofValidationConfig};

    #[test]
    fn test_fixture_proof_is_valid() {
        let fixture = TestFixture::with_seed(1);
        let proof = fixture.make_proof(3);
        assert_eq!(proof.stake_count(), 3);
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Ok(())
        );
    }

    #[test]
    fn test_fixture_delegation() {
        let fixture = TestFixture::new();
        let proof = fixture.make_proof(1);
        let (delegation, keys) = fixture.delegate(&proof, 3);
        assert_eq!(delegation.level_count(), 3);
        assert_eq!(delegation.proof_id(), proof.proof_id());
        assert_eq!(delegation.verify(), (true, keys[2].public_key()));
    }

    #[test]
    fn test_random_proofs_differ() {
        let fixture = TestFixture::with_seed(2);
        let p1 = fixture.make_random_proof(FIXTURE_STAKE_AMOUNT);
        let p2 = fixture.make_random_proof(FIXTURE_STAKE_AMOUNT);
        assert_ne!(p1.proof_id(), p2.proof_id());
        assert_eq!(p1.master, p2.master);
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);

        // Each party has unique keys
        let pks: Vec<_> = parties.iter().map(|p| p.master_public_key()).collect();
        assert_ne!(pks[0], pks[1]);
        assert_ne!(pks[1], pks[2]);
        assert_ne!(pks[0], pks[2]);
    }
}
