//! # avaproof
//!
//! Stake-backed avalanche proofs and delegations.
//!
//! A [`Proof`] bundles UTXOs ([`SignedStake`]s) under a master key. A
//! [`Delegation`] hands the proof's authority to another key through a chain
//! of signed levels, without revealing the master private key.
//!
//! ## Key Types
//!
//! - [`ProofBuilder`] - collects stakes in canonical order and signs the proof
//! - [`Proof`] - immutable proof with its wire encoding and identifiers
//! - [`DelegationBuilder`] - extends a delegation chain one key at a time
//! - [`Delegation`] - immutable delegation with verification
//! - [`ProofValidationConfig`] - network acceptance limits
//!
//! All wire encodings go through [`BinaryCodec`] and are byte-for-byte
//! compatible with the node.

pub mod builder;
pub mod delegation;
pub mod error;
pub mod proof;
pub mod stake;
pub mod summary;
pub mod validation;

pub use avaproof_core::{
    BinaryCodec, DelegationId, LimitedProofId, OutPoint, PayoutDestination, PayoutScript,
    PrivateKey, ProofId, PublicKey, SchnorrSignature, StakeCommitment, StakeId, TxId, Uint256,
};
pub use builder::{ProofBuilder, Signer};
pub use delegation::{reduce_levels, Delegation, DelegationBuilder, Level, MAX_DELEGATION_LEVELS};
pub use error::{DelegationValidationError, Error, ProofValidationError, Result};
pub use proof::{Proof, AMOUNT_PER_SCORE};
pub use stake::{SignedStake, Stake};
pub use summary::{DelegationSummary, ProofSummary};
pub use validation::{validate_delegation, validate_proof, validate_proof_at, ProofValidationConfig};
