//! Proptest generators for property-based testing.

use proptest::prelude::*;

use avaproof::{
    OutPoint, PayoutScript, PrivateKey, Proof, ProofBuilder, PublicKey, Signer, Stake, TxId,
};

/// Generate a random private key with a compressed public key.
pub fn private_key() -> impl Strategy<Value = PrivateKey> {
    any::<[u8; 32]>().prop_filter_map("secret must be a valid scalar", |secret| {
        PrivateKey::from_bytes(&secret, true).ok()
    })
}

/// Generate a random compressed public key.
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    private_key().prop_map(|key| key.public_key())
}

/// Generate a random TxId.
pub fn txid() -> impl Strategy<Value = TxId> {
    any::<[u8; 32]>().prop_map(TxId::from_bytes)
}

/// Generate a random outpoint.
pub fn outpoint() -> impl Strategy<Value = OutPoint> {
    (txid(), 0u32..16).prop_map(|(txid, vout)| OutPoint::new(txid, vout))
}

/// Generate a stake amount in satoshis, up to 21M coins.
pub fn amount() -> impl Strategy<Value = i64> {
    1i64..=2_100_000_000_000_000
}

/// Generate a block height that fits in 31 bits.
pub fn height() -> impl Strategy<Value = u32> {
    0u32..(1 << 31)
}

/// Generate a payout script.
pub fn payout_script() -> impl Strategy<Value = PayoutScript> {
    prop_oneof![
        Just(PayoutScript::empty()),
        any::<[u8; 20]>().prop_map(|hash| {
            let mut script = vec![0x76, 0xa9, 0x14];
            script.extend_from_slice(&hash);
            script.extend_from_slice(&[0x88, 0xac]);
            PayoutScript::from(script)
        }),
        prop::collection::vec(any::<u8>(), 0..=80).prop_map(PayoutScript::from),
    ]
}

/// Generate a stake signed by nobody yet.
pub fn stake() -> impl Strategy<Value = Stake> {
    (outpoint(), amount(), height(), any::<bool>(), public_key()).prop_map(
        |(utxo, amount, height, is_coinbase, pubkey)| {
            Stake::new(utxo, amount, height, is_coinbase, pubkey)
        },
    )
}

/// One UTXO of a [`ProofParams`].
#[derive(Debug, Clone)]
pub struct StakeParams {
    pub utxo: OutPoint,
    pub amount: i64,
    pub height: u32,
    pub is_coinbase: bool,
}

/// Parameters for generating a proof.
#[derive(Debug, Clone)]
pub struct ProofParams {
    pub master: PrivateKey,
    pub stake_key: PrivateKey,
    pub sequence: u64,
    pub expiration_time: i64,
    pub payout_script: PayoutScript,
    /// Insertion order; the builder sorts them.
    pub stakes: Vec<StakeParams>,
}

impl Arbitrary for ProofParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let stake_params = (outpoint(), amount(), height(), any::<bool>()).prop_map(
            |(utxo, amount, height, is_coinbase)| StakeParams {
                utxo,
                amount,
                height,
                is_coinbase,
            },
        );
        (
            private_key(),
            private_key(),
            any::<u64>(),
            0i64..=4_000_000_000i64, // expiration
            payout_script(),
            prop::collection::vec(stake_params, 0..=8),
        )
            .prop_map(
                |(master, stake_key, sequence, expiration_time, payout_script, stakes)| {
                    ProofParams {
                        master,
                        stake_key,
                        sequence,
                        expiration_time,
                        payout_script,
                        stakes,
                    }
                },
            )
            .boxed()
    }
}

/// Generate a proof from parameters.
pub fn proof_from_params(params: &ProofParams) -> Proof {
    proof_with_stake_order(params, params.stakes.iter())
}

/// Build the proof of `params`, adding stakes in the order `stakes` yields them.
pub fn proof_with_stake_order<'a>(
    params: &ProofParams,
    stakes: impl Iterator<Item = &'a StakeParams>,
) -> Proof {
    let mut builder = ProofBuilder::new(
        params.sequence,
        params.expiration_time,
        params.payout_script.clone(),
        Signer::Key(params.master.clone()),
    );
    for stake in stakes {
        builder
            .add_utxo(
                stake.utxo,
                stake.amount,
                stake.height,
                stake.is_coinbase,
                &params.stake_key,
            )
            .expect("stake key signs its own stake");
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avaproof::BinaryCodec;

    proptest! {
        #[test]
        fn test_proof_id_deterministic(params: ProofParams) {
            let p1 = proof_from_params(&params);
            let p2 = proof_from_params(&params);

            prop_assert_eq!(p1.proof_id(), p2.proof_id());
            prop_assert_eq!(p1.serialize(), p2.serialize());
        }

        #[test]
        fn test_stakes_sorted_by_id(params: ProofParams) {
            let proof = proof_from_params(&params);
            let ids: Vec<_> = proof.stakes.iter().map(|s| s.stake_id()).collect();

            prop_assert!(ids.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(proof.stake_count(), params.stakes.len());
        }

        #[test]
        fn test_stake_id_changes_with_amount(stake in stake(), delta in 1i64..1000) {
            let mut other = stake.clone();
            other.amount = stake.amount.wrapping_add(delta);

            prop_assert_ne!(stake.stake_id(), other.stake_id());
        }
    }
}
