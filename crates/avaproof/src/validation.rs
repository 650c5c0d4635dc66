//! Network acceptance rules for proofs and delegations.
//!
//! Decoding only guarantees a proof is well formed. These checks decide
//! whether the node would accept it.

use std::collections::HashSet;

use crate::delegation::{Delegation, MAX_DELEGATION_LEVELS};
use crate::error::{DelegationValidationError, ProofValidationError};
use crate::proof::Proof;
use avaproof_core::PublicKey;

/// Limits applied by [`validate_proof`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofValidationConfig {
    /// Smallest accepted stake, in satoshis.
    pub stake_utxo_dust_threshold: i64,
    pub max_proof_stakes: usize,
    /// Largest accepted `OP_RETURN` payout script, in bytes.
    pub max_nulldata_size: usize,
    pub max_delegation_levels: usize,
}

impl Default for ProofValidationConfig {
    fn default() -> Self {
        Self {
            stake_utxo_dust_threshold: 10_000_000_000,
            max_proof_stakes: 1000,
            max_nulldata_size: 223,
            max_delegation_levels: MAX_DELEGATION_LEVELS,
        }
    }
}

/// Check a proof's structure and signatures.
///
/// Expiration is not checked; see [`validate_proof_at`].
pub fn validate_proof(
    proof: &Proof,
    config: &ProofValidationConfig,
) -> Result<(), ProofValidationError> {
    check_proof(proof, config).map_err(|e| {
        tracing::warn!(proof_id = %proof.proof_id(), error = %e, "proof rejected");
        e
    })
}

/// [`validate_proof`], then reject proofs expired at `now` (Unix seconds).
pub fn validate_proof_at(
    proof: &Proof,
    config: &ProofValidationConfig,
    now: i64,
) -> Result<(), ProofValidationError> {
    validate_proof(proof, config)?;
    if proof.is_expired_at(now) {
        tracing::warn!(proof_id = %proof.proof_id(), now, "proof expired");
        return Err(ProofValidationError::Expired {
            expiration: proof.expiration_time,
        });
    }
    Ok(())
}

fn check_proof(proof: &Proof, config: &ProofValidationConfig) -> Result<(), ProofValidationError> {
    if proof.stakes.is_empty() {
        return Err(ProofValidationError::NoStake);
    }

    if proof.stakes.len() > config.max_proof_stakes {
        return Err(ProofValidationError::TooManyStakes {
            count: proof.stakes.len(),
            max: config.max_proof_stakes,
        });
    }

    if !proof.payout_script.is_standard(config.max_nulldata_size) {
        return Err(ProofValidationError::InvalidPayoutScript);
    }

    if !proof.verify_master_signature() {
        return Err(ProofValidationError::InvalidProofSignature);
    }

    let commitment = proof.stake_commitment();
    let mut seen = HashSet::with_capacity(proof.stakes.len());
    let mut previous = None;

    for (index, signed) in proof.stakes.iter().enumerate() {
        let stake = &signed.stake;
        if stake.amount < config.stake_utxo_dust_threshold {
            return Err(ProofValidationError::DustThreshold {
                index,
                amount: stake.amount,
                threshold: config.stake_utxo_dust_threshold,
            });
        }

        let stake_id = signed.stake_id();
        if previous.is_some_and(|prev| stake_id < prev) {
            return Err(ProofValidationError::WrongStakeOrdering { index });
        }
        previous = Some(stake_id);

        if !seen.insert(stake.utxo) {
            return Err(ProofValidationError::DuplicateStake { index, stake_id });
        }

        if !signed.verify_signature(&commitment) {
            return Err(ProofValidationError::InvalidStakeSignature { index });
        }
    }

    Ok(())
}

/// Check a delegation against `config.max_delegation_levels`.
///
/// Returns the delegated public key.
pub fn validate_delegation(
    delegation: &Delegation,
    config: &ProofValidationConfig,
) -> Result<PublicKey, DelegationValidationError> {
    delegation.validate_with_limit(config.max_delegation_levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ProofBuilder, Signer};
    use crate::stake::{SignedStake, Stake};
    use avaproof_core::{OutPoint, PayoutScript, PrivateKey, SchnorrSignature, TxId};

    const MASTER_SECRET: &str = "12b004fff7f4b69ef8650e767f18f11ede158148b425660723b9f9a66e61f747";
    const P2PKH: &str = "76a914a4b9a3c7c5a93c9e22c9f4a1b0a8e2b1c3d4e5f688ac";
    const COIN: i64 = 100_000_000;

    fn master() -> PrivateKey {
        PrivateKey::from_hex(MASTER_SECRET, true).unwrap()
    }

    fn utxo(vout: u32) -> OutPoint {
        OutPoint::new(TxId::from_bytes([0x11; 32]), vout)
    }

    fn builder(payout: &str) -> ProofBuilder {
        ProofBuilder::new(
            1,
            2_000_000_000,
            PayoutScript::from_hex(payout).unwrap(),
            Signer::Key(master()),
        )
    }

    fn valid_proof(stakes: u32) -> Proof {
        let key = PrivateKey::generate();
        let mut builder = builder(P2PKH);
        for vout in 0..stakes {
            builder.add_utxo(utxo(vout), 200 * COIN, 100, false, &key).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_valid_proof() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let proof = valid_proof(3);
        let config = ProofValidationConfig::default();
        assert_eq!(validate_proof(&proof, &config), Ok(()));
        assert_eq!(proof.score(), 60_000);
    }

    #[test]
    fn test_no_stake() {
        let proof = builder(P2PKH).build();
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::NoStake)
        );
    }

    #[test]
    fn test_too_many_stakes() {
        let config = ProofValidationConfig {
            max_proof_stakes: 2,
            ..Default::default()
        };
        assert_eq!(
            validate_proof(&valid_proof(3), &config),
            Err(ProofValidationError::TooManyStakes { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_payout_checked_before_signature() {
        let mut proof = valid_proof(1);
        proof.payout_script = PayoutScript::from_hex("00").unwrap();
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::InvalidPayoutScript)
        );

        proof.payout_script = PayoutScript::from_hex("6a").unwrap();
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::InvalidProofSignature)
        );
    }

    #[test]
    fn test_dust_threshold() {
        let key = PrivateKey::generate();
        let mut builder = builder(P2PKH);
        builder.add_utxo(utxo(0), 100 * COIN - 1, 1, false, &key).unwrap();
        let proof = builder.build();

        assert!(matches!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::DustThreshold { index: 0, .. })
        ));
        let relaxed = ProofValidationConfig {
            stake_utxo_dust_threshold: COIN,
            ..Default::default()
        };
        assert_eq!(validate_proof(&proof, &relaxed), Ok(()));

        // The threshold itself is not dust.
        let mut exact = self::builder(P2PKH);
        exact.add_utxo(utxo(0), 100 * COIN, 1, false, &key).unwrap();
        assert_eq!(
            validate_proof(&exact.build(), &ProofValidationConfig::default()),
            Ok(())
        );
    }

    #[test]
    fn test_wrong_stake_ordering() {
        let mut proof = valid_proof(2);
        proof.stakes.reverse();
        // The builder would re-sort, so sign the reversed list by hand.
        proof.signature = master().sign_schnorr(proof.limited_proof_id().as_bytes());
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::WrongStakeOrdering { index: 1 })
        );
    }

    #[test]
    fn test_duplicate_stake() {
        let key = PrivateKey::generate();
        let mut builder = builder(P2PKH);
        builder.add_utxo(utxo(0), 200 * COIN, 1, false, &key).unwrap();
        builder.add_utxo(utxo(0), 200 * COIN, 1, false, &key).unwrap();
        let proof = builder.build();
        assert!(matches!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::DuplicateStake { index: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_stake_signature() {
        let mut proof = valid_proof(2);
        proof.stakes[1].signature.0[0] ^= 0x01;
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::InvalidStakeSignature { index: 1 })
        );
    }

    #[test]
    fn test_off_curve_stake_key() {
        let mut off_curve = vec![0x03];
        off_curve.extend_from_slice(&[0xff; 32]);
        let stake = Stake::new(
            utxo(0),
            200 * COIN,
            100,
            false,
            PublicKey::from_slice(&off_curve).unwrap(),
        );
        let mut builder = builder(P2PKH);
        builder.add_signed_stake(SignedStake::new(stake, SchnorrSignature::ZERO));
        let proof = builder.build();

        assert!(proof.verify_master_signature());
        assert_eq!(
            validate_proof(&proof, &ProofValidationConfig::default()),
            Err(ProofValidationError::InvalidStakeSignature { index: 0 })
        );
        assert_eq!(Proof::from_hex(&proof.to_hex()).unwrap(), proof);
    }

    #[test]
    fn test_expiration() {
        let proof = valid_proof(1);
        let config = ProofValidationConfig::default();
        assert_eq!(validate_proof_at(&proof, &config, 1_999_999_999), Ok(()));
        assert_eq!(
            validate_proof_at(&proof, &config, 2_000_000_000),
            Err(ProofValidationError::Expired {
                expiration: 2_000_000_000
            })
        );
    }

    #[test]
    fn test_delegation_level_limit_from_config() {
        let proof = valid_proof(1);
        let mut builder = crate::delegation::DelegationBuilder::from_proof(&proof);
        let level1 = PrivateKey::generate();
        builder.add_level(&master(), level1.public_key()).unwrap();
        builder
            .add_level(&level1, PrivateKey::generate().public_key())
            .unwrap();
        let delegation = builder.build();

        let strict = ProofValidationConfig {
            max_delegation_levels: 1,
            ..Default::default()
        };
        assert_eq!(
            validate_delegation(&delegation, &strict),
            Err(DelegationValidationError::TooManyLevels { count: 2, max: 1 })
        );
        assert!(validate_delegation(&delegation, &ProofValidationConfig::default()).is_ok());
    }
}
