//! Property tests over generated proofs and delegations.

use proptest::prelude::*;

use avaproof::{BinaryCodec, Delegation, DelegationBuilder, Error, PrivateKey, Proof};
use avaproof_testkit::generators::{
    private_key, proof_from_params, proof_with_stake_order, ProofParams,
};

fn delegate(proof: &Proof, master: &PrivateKey, keys: &[PrivateKey]) -> Delegation {
    let mut builder = DelegationBuilder::from_proof(proof);
    let mut delegator = master;
    for key in keys {
        builder.add_level(delegator, key.public_key()).unwrap();
        delegator = key;
    }
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proof_round_trips(params: ProofParams) {
        let proof = proof_from_params(&params);
        let bytes = proof.serialize();
        let decoded = Proof::deserialize(&bytes).unwrap();

        prop_assert_eq!(decoded.serialize(), bytes);
        prop_assert_eq!(decoded.proof_id(), proof.proof_id());
        prop_assert_eq!(decoded.limited_proof_id(), proof.limited_proof_id());
        prop_assert_eq!(decoded, proof);
    }

    #[test]
    fn stake_insertion_order_is_irrelevant(params in any::<ProofParams>(), rotate in 0usize..8) {
        let forward = proof_from_params(&params);
        let reversed = proof_with_stake_order(&params, params.stakes.iter().rev());

        let mid = if params.stakes.is_empty() { 0 } else { rotate % params.stakes.len() };
        let rotated = proof_with_stake_order(
            &params,
            params.stakes[mid..].iter().chain(&params.stakes[..mid]),
        );

        prop_assert_eq!(reversed.serialize(), forward.serialize());
        prop_assert_eq!(rotated.serialize(), forward.serialize());
        prop_assert_eq!(rotated.proof_id(), forward.proof_id());
    }

    #[test]
    fn master_signature_tamper_is_isolated(params in any::<ProofParams>(), byte in 0usize..64) {
        prop_assume!(!params.stakes.is_empty());
        let mut proof = proof_from_params(&params);
        prop_assert!(proof.verify_master_signature());

        proof.signature.0[byte] ^= 0x01;
        prop_assert!(!proof.verify_master_signature());

        let commitment = proof.stake_commitment();
        prop_assert!(proof.stakes.iter().all(|s| s.verify_signature(&commitment)));
    }

    #[test]
    fn stake_signature_tamper_is_isolated(
        params in any::<ProofParams>(),
        pick in any::<prop::sample::Index>(),
        byte in 0usize..64,
    ) {
        prop_assume!(!params.stakes.is_empty());
        let mut proof = proof_from_params(&params);
        let target = pick.index(proof.stakes.len());

        proof.stakes[target].signature.0[byte] ^= 0x80;
        let commitment = proof.stake_commitment();

        prop_assert!(proof.verify_master_signature());
        for (index, stake) in proof.stakes.iter().enumerate() {
            prop_assert_eq!(stake.verify_signature(&commitment), index != target);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn delegation_round_trips(
        params in any::<ProofParams>(),
        keys in prop::collection::vec(private_key(), 0..5),
    ) {
        let proof = proof_from_params(&params);
        let delegation = delegate(&proof, &params.master, &keys);
        let decoded = Delegation::from_hex(&delegation.to_hex()).unwrap();

        prop_assert_eq!(decoded.id(), delegation.id());
        prop_assert_eq!(decoded.proof_id(), proof.proof_id());
        let expected = keys.last().map_or_else(|| params.master.public_key(), |k| k.public_key());
        prop_assert_eq!(decoded.verify(), (true, expected));
        prop_assert_eq!(decoded, delegation);
    }

    #[test]
    fn level_signature_tamper_reports_signer(
        params in any::<ProofParams>(),
        keys in prop::collection::vec(private_key(), 1..5),
        pick in any::<prop::sample::Index>(),
        byte in 0usize..64,
    ) {
        let proof = proof_from_params(&params);
        let mut delegation = delegate(&proof, &params.master, &keys);
        let target = pick.index(keys.len());
        delegation.levels[target].signature.0[byte] ^= 0x01;

        let signer = if target == 0 {
            params.master.public_key()
        } else {
            keys[target - 1].public_key()
        };
        prop_assert_eq!(delegation.verify(), (false, signer));
        prop_assert!(delegation.validate().is_err());
    }

    #[test]
    fn non_tip_key_cannot_extend(
        params in any::<ProofParams>(),
        keys in prop::collection::vec(private_key(), 0..4),
        outsider in private_key(),
        delegated in private_key(),
    ) {
        let proof = proof_from_params(&params);
        let tip = keys.last().unwrap_or(&params.master).public_key();
        prop_assume!(outsider.public_key() != tip);

        let delegation = delegate(&proof, &params.master, &keys);
        let mut builder = DelegationBuilder::from_delegation(&delegation);
        let is_wrong_delegator = matches!(
            builder.add_level(&outsider, delegated.public_key()),
            Err(Error::WrongDelegatorKey { .. })
        );
        prop_assert!(is_wrong_delegator);
        prop_assert_eq!(builder.build(), delegation);
    }
}
