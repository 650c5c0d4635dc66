//! Schnorr signatures over secp256k1, in the BCH/eCash flavour.
//!
//! This is not BIP-340. The differences that matter on the wire:
//! - public keys keep their 33-byte compressed encoding in the challenge
//! - the nonce point is normalised so its Y coordinate is a quadratic residue
//! - nonces come from RFC 6979 with the algorithm tag `"Schnorr+SHA256  "`
//!
//! Signing: `R = kG` (negate `k` when `R.y` is not a square),
//! `e = SHA256(R.x || compressed(P) || m)`, `s = k + e*x`, signature `R.x || s`.
//!
//! Verification: reject `r >= p` and `s >= n`, compute `R = sG - eP` and
//! require a finite `R` with square `R.y` and `R.x == r`.

use hmac::{Hmac, Mac};
use k256::elliptic_curve::group::Group;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, FieldElement, ProjectivePoint, Scalar, U256};
use serde::{Deserializer, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use bytes::BufMut;

use crate::codec::{BinaryCodec, Reader};
use crate::error::{DeserializationError, Result};

/// Algorithm tag mixed into the RFC 6979 key data.
const NONCE_ALGO16: &[u8; 16] = b"Schnorr+SHA256  ";

type HmacSha256 = Hmac<Sha256>;

/// A 64-byte Schnorr signature: `R.x || s`, both big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchnorrSignature(pub [u8; 64]);

impl SchnorrSignature {
    /// All-zero placeholder. Never verifies.
    pub const ZERO: Self = Self([0u8; 64]);

    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 64]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != 128 {
            return Err(DeserializationError::InvalidHexLength {
                expected: 128,
                got: s.len(),
            });
        }
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..]);
        s
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for SchnorrSignature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

/// Fixed width on the wire, no length prefix.
impl BinaryCodec for SchnorrSignature {
    fn encode(&self, out: &mut Vec<u8>) {
        out.put_slice(&self.0);
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self(reader.read_array::<64>()?))
    }
}

impl serde::Serialize for SchnorrSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for SchnorrSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// RFC 6979 HMAC-SHA256 DRBG seeded with `seckey || msg || algo16`.
struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
    retry: bool,
}

impl NonceGenerator {
    fn new(seckey: &[u8; 32], msg: &[u8; 32]) -> Self {
        let mut k = [0x00; 32];
        let mut v = [0x01; 32];
        k = hmac(&k, &[&v, &[0x00], seckey, msg, NONCE_ALGO16]);
        v = hmac(&k, &[&v]);
        k = hmac(&k, &[&v, &[0x01], seckey, msg, NONCE_ALGO16]);
        v = hmac(&k, &[&v]);
        Self { k, v, retry: false }
    }

    fn next_candidate(&mut self) -> [u8; 32] {
        if self.retry {
            self.k = hmac(&self.k, &[&self.v, &[0x00]]);
            self.v = hmac(&self.k, &[&self.v]);
        }
        self.v = hmac(&self.k, &[&self.v]);
        self.retry = true;
        self.v
    }

    /// First candidate in `[1, n)`.
    fn next_nonce(&mut self) -> Scalar {
        loop {
            let candidate = FieldBytes::from(self.next_candidate());
            if let Some(k) = Option::<Scalar>::from(Scalar::from_repr(candidate)) {
                if !bool::from(k.is_zero()) {
                    return k;
                }
            }
        }
    }
}

fn hmac(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC takes keys of any length");
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// `SHA256(r || compressed(P) || m) mod n`.
fn challenge(r: &[u8; 32], pubkey: &[u8; 33], msg: &[u8; 32]) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update(r);
    hasher.update(pubkey);
    hasher.update(msg);
    <Scalar as Reduce<U256>>::reduce_bytes(&hasher.finalize())
}

fn is_square(y: &FieldBytes) -> bool {
    Option::<FieldElement>::from(FieldElement::from_bytes(y))
        .map_or(false, |y| bool::from(y.sqrt().is_some()))
}

/// Sign a 32-byte message hash.
///
/// `pubkey` must be the compressed encoding of `seckey * G`.
pub(crate) fn sign(seckey: &Scalar, pubkey: &[u8; 33], msg: &[u8; 32]) -> SchnorrSignature {
    let mut seckey_bytes = [0u8; 32];
    seckey_bytes.copy_from_slice(&seckey.to_bytes());

    let mut nonces = NonceGenerator::new(&seckey_bytes, msg);
    let mut k = nonces.next_nonce();

    let nonce_point = (ProjectivePoint::GENERATOR * k).to_affine().to_encoded_point(false);
    let (Some(x), Some(y)) = (nonce_point.x(), nonce_point.y()) else {
        unreachable!("k is non-zero so kG is finite");
    };
    if !is_square(y) {
        k = -k;
    }

    let mut r = [0u8; 32];
    r.copy_from_slice(x);

    let e = challenge(&r, pubkey, msg);
    let s = k + e * seckey;

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&r);
    sig[32..].copy_from_slice(&s.to_bytes());
    SchnorrSignature(sig)
}

/// Verify `sig` over a 32-byte message hash.
pub(crate) fn verify(
    point: &ProjectivePoint,
    pubkey: &[u8; 33],
    sig: &SchnorrSignature,
    msg: &[u8; 32],
) -> bool {
    let r = sig.r();

    // r must be a field element.
    if bool::from(FieldElement::from_bytes(&FieldBytes::from(r)).is_none()) {
        return false;
    }
    let Some(s) = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(sig.s()))) else {
        return false;
    };

    let e = challenge(&r, pubkey, msg);
    let nonce_point = ProjectivePoint::GENERATOR * s - *point * e;
    if bool::from(nonce_point.is_identity()) {
        return false;
    }

    let encoded = nonce_point.to_affine().to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => x.as_slice() == r.as_slice() && is_square(y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        hex::decode_to_slice(s, &mut out).unwrap();
        out
    }

    fn keypair(secret: &str) -> (Scalar, ProjectivePoint, [u8; 33]) {
        let x = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(hex32(secret)))).unwrap();
        let point = ProjectivePoint::GENERATOR * x;
        let mut compressed = [0u8; 33];
        compressed.copy_from_slice(point.to_affine().to_encoded_point(true).as_bytes());
        (x, point, compressed)
    }

    const SECRET: &str = "12b004fff7f4b69ef8650e767f18f11ede158148b425660723b9f9a66e61f747";

    #[test]
    fn test_sign_verify() {
        let (x, point, compressed) = keypair(SECRET);
        let msg = [0x5a; 32];
        let sig = sign(&x, &compressed, &msg);
        assert!(verify(&point, &compressed, &sig, &msg));

        let mut other = msg;
        other[0] ^= 1;
        assert!(!verify(&point, &compressed, &sig, &other));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let (x, _, compressed) = keypair(SECRET);
        let msg = [0x01; 32];
        assert_eq!(sign(&x, &compressed, &msg), sign(&x, &compressed, &msg));
        assert_ne!(sign(&x, &compressed, &msg), sign(&x, &compressed, &[0x02; 32]));
    }

    #[test]
    fn test_every_signature_byte_matters() {
        let (x, point, compressed) = keypair(SECRET);
        let msg = [0x33; 32];
        let sig = sign(&x, &compressed, &msg);
        for i in 0..64 {
            let mut tampered = sig;
            tampered.0[i] ^= 0x80;
            assert!(!verify(&point, &compressed, &tampered, &msg), "byte {i}");
        }
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        let (_, point, compressed) = keypair(SECRET);
        let msg = [0u8; 32];
        assert!(!verify(&point, &compressed, &SchnorrSignature([0xff; 64]), &msg));
        assert!(!verify(&point, &compressed, &SchnorrSignature::ZERO, &msg));
    }

    #[test]
    fn test_signature_hex() {
        let sig = SchnorrSignature([0xab; 64]);
        assert_eq!(SchnorrSignature::from_hex(&sig.to_hex()).unwrap(), sig);
        assert!(SchnorrSignature::from_hex("abab").is_err());
    }
}
