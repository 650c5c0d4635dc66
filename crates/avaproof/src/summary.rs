//! Decoded JSON views of proofs and delegations.
//!
//! Field names follow the node's `decodeavalancheproof` and
//! `decodeavalanchedelegation` RPC results. Amounts stay in satoshis and
//! signatures are hex.

use serde::Serialize;

use avaproof_core::{DelegationId, LimitedProofId, ProofId, PublicKey, SchnorrSignature, TxId};

use crate::delegation::Delegation;
use crate::proof::Proof;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofSummary {
    pub proofid: ProofId,
    pub limitedid: LimitedProofId,
    pub sequence: u64,
    pub expiration: i64,
    pub master: PublicKey,
    pub signature: SchnorrSignature,
    pub payoutscript: ScriptSummary,
    pub stakes: Vec<StakeSummary>,
    pub staked_amount: i64,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptSummary {
    pub hex: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeSummary {
    pub txid: TxId,
    pub vout: u32,
    pub amount: i64,
    pub height: u32,
    pub iscoinbase: bool,
    pub pubkey: PublicKey,
    pub signature: SchnorrSignature,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegationSummary {
    pub limitedid: LimitedProofId,
    pub proofid: ProofId,
    pub proofmaster: PublicKey,
    pub delegationid: DelegationId,
    /// The delegated key.
    pub pubkey: PublicKey,
    pub levels: Vec<LevelSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub index: usize,
    pub pubkey: PublicKey,
    pub signature: SchnorrSignature,
}

impl Proof {
    pub fn summary(&self) -> ProofSummary {
        ProofSummary {
            proofid: self.proof_id(),
            limitedid: self.limited_proof_id(),
            sequence: self.sequence,
            expiration: self.expiration_time,
            master: self.master.clone(),
            signature: self.signature,
            payoutscript: ScriptSummary {
                hex: self.payout_script.to_hex(),
                kind: self.payout_destination().kind(),
            },
            stakes: self
                .stakes
                .iter()
                .map(|signed| StakeSummary {
                    txid: signed.stake.utxo.txid,
                    vout: signed.stake.utxo.vout,
                    amount: signed.stake.amount,
                    height: signed.stake.height,
                    iscoinbase: signed.stake.is_coinbase,
                    pubkey: signed.stake.pubkey.clone(),
                    signature: signed.signature,
                })
                .collect(),
            staked_amount: self.total_staked_amount(),
            score: self.score(),
        }
    }
}

impl Delegation {
    pub fn summary(&self) -> DelegationSummary {
        DelegationSummary {
            limitedid: self.limited_proof_id,
            proofid: self.proof_id(),
            proofmaster: self.master.clone(),
            delegationid: self.id(),
            pubkey: self.delegated_public_key().clone(),
            levels: self
                .levels
                .iter()
                .enumerate()
                .map(|(index, level)| LevelSummary {
                    index,
                    pubkey: level.pubkey.clone(),
                    signature: level.signature,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROOF_HEX: &str = "2a00000000000000fff053650000000021030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a74401b7fc19792583e9cb39843fc5e22a4e3648ab1cb18a70290b341ee8d4f550ae24000000001027000000000000788814004104d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0abd9740c85a05a7d543c3d301273d79ff7054758579e30cc05cdfe1aca3374adfe55104b409ffce4a2f19d8a5981d5f0c79b23edac73352ab2898aca89270282500788bac77505ca17d6d0dcc946ced3990c2857c73743cd74d881fcbcbc8eaaa8d72812ebb9a556610687ca592fe907a4af024390e0a9260c4f5ea59e7ac426cc5";

    #[test]
    fn test_proof_summary_json() {
        let proof = Proof::from_hex(PROOF_HEX).unwrap();
        let json = serde_json::to_value(proof.summary()).unwrap();

        assert_eq!(
            json["proofid"],
            "74c91491e5d6730ea1701817ed6c34e9627904fc3117647cc7d4bce73f56e45a"
        );
        assert_eq!(
            json["limitedid"],
            "e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864"
        );
        assert_eq!(json["sequence"], 42);
        assert_eq!(json["expiration"], 1_699_999_999);
        assert_eq!(json["payoutscript"]["hex"], "");
        assert_eq!(json["payoutscript"]["type"], "nonstandard");
        assert_eq!(
            json["stakes"][0]["txid"],
            "24ae50f5d4e81e340b29708ab11cab48364e2ae2c53f8439cbe983257919fcb7"
        );
        assert_eq!(json["stakes"][0]["height"], 672_828);
        assert_eq!(json["stakes"][0]["iscoinbase"], false);
        assert_eq!(json["staked_amount"], 10_000);
        assert_eq!(json["score"], 0);
    }

    #[test]
    fn test_delegation_summary_json() {
        let delegation = Delegation::from_hex("46116afa1abaab88b96c115c248b77c7d8e099565c5fb40731482c6655ca450d21023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde300").unwrap();
        let json = serde_json::to_value(delegation.summary()).unwrap();
        assert_eq!(
            json["delegationid"],
            "afc74900c1f28b69e466461fb1e0663352da6153be0fcd59280e27f2446391d5"
        );
        assert_eq!(json["pubkey"], json["proofmaster"]);
        assert_eq!(json["levels"].as_array().map(Vec::len), Some(0));
    }
}
