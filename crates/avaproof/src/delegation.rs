//! Delegations: chains of keys authorized to act for a proof's master key.
//!
//! Each level names a new public key and carries a signature by the previous
//! key (the master key for the first level) over the running delegation id.
//! The id starts at the proof id and absorbs one public key per level:
//!
//! ```text
//! id_0 = proof_id
//! id_i = sha256d(id_{i-1} || blob(pubkey_i))
//! ```

use avaproof_core::codec::{write_sequence, BinaryCodec, Reader};
use avaproof_core::{DelegationId, LimitedProofId, PrivateKey, ProofId, PublicKey, SchnorrSignature};

use crate::error::{DelegationValidationError, Error, Result};
use crate::proof::Proof;

/// Longest delegation chain the network accepts.
pub const MAX_DELEGATION_LEVELS: usize = 20;

/// One step of a delegation chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level {
    /// The key being delegated to.
    pub pubkey: PublicKey,
    /// Signature by the previous key over this level's delegation id.
    pub signature: SchnorrSignature,
}

impl Level {
    pub fn new(pubkey: PublicKey, signature: SchnorrSignature) -> Self {
        Self { pubkey, signature }
    }
}

/// blob(pubkey) || signature
impl BinaryCodec for Level {
    fn encode(&self, out: &mut Vec<u8>) {
        self.pubkey.encode(out);
        self.signature.encode(out);
    }

    fn decode(reader: &mut Reader<'_>) -> avaproof_core::Result<Self> {
        let pubkey = PublicKey::decode(reader)?;
        let signature = SchnorrSignature::decode(reader)?;
        Ok(Self { pubkey, signature })
    }
}

/// Fold the levels into a delegation id, starting from `seed`.
///
/// `check` sees each level together with the id that level's signature must
/// cover. The first level it rejects stops the fold and its index is
/// returned as the error.
pub fn reduce_levels<F>(
    seed: DelegationId,
    levels: &[Level],
    mut check: F,
) -> std::result::Result<DelegationId, usize>
where
    F: FnMut(&DelegationId, &Level) -> bool,
{
    let mut id = seed;
    for (index, level) in levels.iter().enumerate() {
        id = id.extend(&level.pubkey);
        if !check(&id, level) {
            return Err(index);
        }
    }
    Ok(id)
}

/// A delegation of a proof's authority to another key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    pub limited_proof_id: LimitedProofId,
    pub master: PublicKey,
    pub levels: Vec<Level>,
}

impl Delegation {
    /// The proof this delegation belongs to.
    pub fn proof_id(&self) -> ProofId {
        self.limited_proof_id.compute_proof_id(&self.master)
    }

    /// The id after all levels. Equals the proof id when there are none.
    pub fn id(&self) -> DelegationId {
        let seed = DelegationId::from(self.proof_id());
        match reduce_levels(seed, &self.levels, |_, _| true) {
            Ok(id) => id,
            Err(_) => unreachable!("an accepting check never stops the fold"),
        }
    }

    /// The key currently authorized: the last level's key, or the master.
    pub fn delegated_public_key(&self) -> &PublicKey {
        self.levels
            .last()
            .map_or(&self.master, |level| &level.pubkey)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Check every level signature.
    ///
    /// Returns whether the chain is valid and the last key reached: the
    /// delegated key on success, or the key whose signature failed.
    pub fn verify(&self) -> (bool, PublicKey) {
        let (result, signer) = self.check_signatures();
        (result.is_ok(), signer)
    }

    /// Structural and signature checks against the network's level limit.
    ///
    /// Returns the delegated public key.
    pub fn validate(&self) -> std::result::Result<PublicKey, DelegationValidationError> {
        self.validate_with_limit(MAX_DELEGATION_LEVELS)
    }

    pub(crate) fn validate_with_limit(
        &self,
        max_levels: usize,
    ) -> std::result::Result<PublicKey, DelegationValidationError> {
        if self.levels.len() > max_levels {
            return Err(DelegationValidationError::TooManyLevels {
                count: self.levels.len(),
                max: max_levels,
            });
        }
        match self.check_signatures() {
            (Ok(_), signer) => Ok(signer),
            (Err(index), _) => {
                tracing::warn!(
                    proof_id = %self.proof_id(),
                    level = index + 1,
                    "delegation signature rejected"
                );
                Err(DelegationValidationError::InvalidSignature { level: index + 1 })
            }
        }
    }

    fn check_signatures(&self) -> (std::result::Result<DelegationId, usize>, PublicKey) {
        let mut signer = self.master.clone();
        let result = reduce_levels(self.proof_id().into(), &self.levels, |id, level| {
            if !signer.verify_schnorr(&level.signature, id.as_bytes()) {
                return false;
            }
            signer = level.pubkey.clone();
            true
        });
        (result, signer)
    }

    pub fn to_hex(&self) -> String {
        self.serialize_hex()
    }

    /// Parse a hex encoded delegation. The input must hold exactly one.
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::deserialize_hex(s)?)
    }
}

/// limited id || blob(master) || sequence(levels)
impl BinaryCodec for Delegation {
    fn encode(&self, out: &mut Vec<u8>) {
        self.limited_proof_id.encode(out);
        self.master.encode(out);
        write_sequence(out, &self.levels);
    }

    fn decode(reader: &mut Reader<'_>) -> avaproof_core::Result<Self> {
        let limited_proof_id = LimitedProofId::decode(reader)?;
        let master = PublicKey::decode(reader)?;
        let levels = reader.read_sequence_bounded(MAX_DELEGATION_LEVELS as u64)?;
        Ok(Self {
            limited_proof_id,
            master,
            levels,
        })
    }
}

/// Extends a delegation chain one level at a time.
///
/// Keeps `(key, signature)` pairs where the signature is the one that key
/// produced for the next level. The tip has a zero signature until it
/// delegates further.
#[derive(Debug, Clone)]
pub struct DelegationBuilder {
    limited_proof_id: LimitedProofId,
    master: PublicKey,
    delegation_id: DelegationId,
    levels: Vec<(PublicKey, SchnorrSignature)>,
}

impl DelegationBuilder {
    /// Start a chain for the proof identified by `limited_proof_id` and
    /// `master`.
    ///
    /// `delegation_id` is the id reached so far; `None` starts at the proof id.
    pub fn new(
        limited_proof_id: LimitedProofId,
        master: PublicKey,
        delegation_id: Option<DelegationId>,
    ) -> Self {
        let delegation_id =
            delegation_id.unwrap_or_else(|| limited_proof_id.compute_proof_id(&master).into());
        Self {
            limited_proof_id,
            levels: vec![(master.clone(), SchnorrSignature::ZERO)],
            master,
            delegation_id,
        }
    }

    pub fn from_proof(proof: &Proof) -> Self {
        Self::new(proof.limited_proof_id(), proof.master.clone(), None)
    }

    /// Continue an existing delegation.
    pub fn from_delegation(delegation: &Delegation) -> Self {
        let mut builder = Self::new(
            delegation.limited_proof_id,
            delegation.master.clone(),
            Some(delegation.id()),
        );
        for level in &delegation.levels {
            builder.push_level(level.signature, level.pubkey.clone());
        }
        builder
    }

    /// The key that must sign the next level.
    pub fn tip(&self) -> &PublicKey {
        &self.levels[self.levels.len() - 1].0
    }

    pub fn delegation_id(&self) -> DelegationId {
        self.delegation_id
    }

    /// Delegate from the current tip to `delegated`.
    ///
    /// `delegator` must be the private key of [`DelegationBuilder::tip`].
    pub fn add_level(&mut self, delegator: &PrivateKey, delegated: PublicKey) -> Result<&mut Self> {
        let got = delegator.public_key();
        if &got != self.tip() {
            return Err(Error::WrongDelegatorKey {
                expected: self.tip().clone(),
                got,
            });
        }
        if self.levels.len() > MAX_DELEGATION_LEVELS {
            return Err(Error::TooManyDelegationLevels {
                max: MAX_DELEGATION_LEVELS,
            });
        }

        let next_id = self.delegation_id.extend(&delegated);
        let signature = delegator.sign_schnorr(next_id.as_bytes());
        self.push_level(signature, delegated);
        self.delegation_id = next_id;

        tracing::debug!(
            delegation_id = %self.delegation_id,
            levels = self.levels.len() - 1,
            "added delegation level"
        );
        Ok(self)
    }

    fn push_level(&mut self, tip_signature: SchnorrSignature, pubkey: PublicKey) {
        if let Some(tip) = self.levels.last_mut() {
            tip.1 = tip_signature;
        }
        self.levels.push((pubkey, SchnorrSignature::ZERO));
    }

    /// Produce the delegation.
    ///
    /// # Panics
    ///
    /// If the id recomputed from the levels differs from the tracked id,
    /// which means the builder was seeded with a wrong `delegation_id`.
    pub fn build(&self) -> Delegation {
        let levels = self
            .levels
            .windows(2)
            .map(|pair| Level::new(pair[1].0.clone(), pair[0].1))
            .collect();

        let delegation = Delegation {
            limited_proof_id: self.limited_proof_id,
            master: self.master.clone(),
            levels,
        };
        assert_eq!(
            delegation.id(),
            self.delegation_id,
            "delegation id diverged from its levels"
        );
        delegation
    }
}
