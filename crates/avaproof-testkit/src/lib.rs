//! # Avaproof Testkit
//!
//! Testing utilities for avaproof.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Proofs and delegations produced by the node, with their exact bytes and ids
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic keys and ready-made proofs for test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the wire format and every hash derived from it:
//!
//! ```rust
//! use avaproof_testkit::vectors::{build_proof, proof_vectors};
//!
//! for vector in proof_vectors() {
//!     let proof = build_proof(&vector);
//!     assert_eq!(proof.proof_id().to_hex(), vector.expected_proof_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use avaproof_testkit::generators::{proof_from_params, ProofParams};
//!
//! proptest! {
//!     #[test]
//!     fn proof_id_is_deterministic(params: ProofParams) {
//!         let p1 = proof_from_params(&params);
//!         let p2 = proof_from_params(&params);
//!         prop_assert_eq!(p1.proof_id(), p2.proof_id());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use avaproof_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let proof = fixture.make_proof(2);
//! let (delegation, _keys) = fixture.delegate(&proof, 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{proof_from_params, ProofParams};
pub use vectors::{
    delegation_vectors, proof_vectors, regular_format_vectors, verify_all_vectors,
    DelegationVector, ProofVector, RegularFormatVector,
};
