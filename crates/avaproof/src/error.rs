//! Error types for proofs and delegations.

use avaproof_core::{DeserializationError, KeyError, PublicKey, StakeId};
use thiserror::Error;

/// Errors from building or decoding proofs and delegations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),

    #[error(transparent)]
    Key(#[from] KeyError),

    /// The delegator key is not the current tip of the delegation chain.
    #[error("wrong delegator key: expected {expected}, got {got}")]
    WrongDelegatorKey { expected: PublicKey, got: PublicKey },

    #[error("master private key does not match the proof's master public key")]
    MasterKeyMismatch,

    #[error("signing key does not match the stake's public key")]
    StakeKeyMismatch,

    #[error("delegation already has the maximum of {max} levels")]
    TooManyDelegationLevels { max: usize },
}

/// Result type for proof and delegation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a well-formed proof is not acceptable to the network.
///
/// Checks run in a fixed order and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofValidationError {
    #[error("proof has no stakes")]
    NoStake,

    #[error("proof has {count} stakes, maximum is {max}")]
    TooManyStakes { count: usize, max: usize },

    #[error("payout script is not standard")]
    InvalidPayoutScript,

    #[error("master signature is invalid")]
    InvalidProofSignature,

    #[error("stake {index} amount {amount} is below the dust threshold of {threshold}")]
    DustThreshold {
        index: usize,
        amount: i64,
        threshold: i64,
    },

    #[error("stake {index} is out of order")]
    WrongStakeOrdering { index: usize },

    #[error("stake {index} spends an outpoint already staked")]
    DuplicateStake { index: usize, stake_id: StakeId },

    #[error("stake {index} signature is invalid")]
    InvalidStakeSignature { index: usize },

    #[error("proof expired at {expiration}")]
    Expired { expiration: i64 },
}

/// Why a delegation chain does not verify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegationValidationError {
    #[error("delegation has {count} levels, maximum is {max}")]
    TooManyLevels { count: usize, max: usize },

    /// Levels are numbered from 1.
    #[error("signature at level {level} is invalid")]
    InvalidSignature { level: usize },
}
