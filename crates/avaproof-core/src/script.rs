//! Payout scripts.
//!
//! A proof carries its payout destination as a raw output script. The wallet
//! never needs to render it as an address, only to know what kind of output
//! it is and whether the node would relay it.

use bytes::Bytes;
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::codec::{write_blob, BinaryCodec, Reader};
use crate::error::Result;
use crate::keys::{PublicKey, COMPRESSED_PUBLIC_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;
const OP_1: u8 = 0x51;
const OP_16: u8 = 0x60;
const OP_RETURN: u8 = 0x6a;
const OP_DUP: u8 = 0x76;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_HASH160: u8 = 0xa9;
const OP_CHECKSIG: u8 = 0xac;
const OP_CHECKMULTISIG: u8 = 0xae;

/// Largest standard bare multisig: 3 keys.
const MAX_STANDARD_MULTISIG_KEYS: u8 = 3;

/// What a payout script pays to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayoutDestination {
    PayToPublicKeyHash([u8; 20]),
    PayToScriptHash([u8; 20]),
    PayToPublicKey(PublicKey),
    /// Bare `m`-of-`n` multisig.
    Multisig { required: u8, keys: Vec<PublicKey> },
    /// Unspendable `OP_RETURN` data carrier.
    NullData,
    NonStandard,
}

impl PayoutDestination {
    /// The node's name for this script type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PayToPublicKeyHash(_) => "pubkeyhash",
            Self::PayToScriptHash(_) => "scripthash",
            Self::PayToPublicKey(_) => "pubkey",
            Self::Multisig { .. } => "multisig",
            Self::NullData => "nulldata",
            Self::NonStandard => "nonstandard",
        }
    }
}

/// A raw output script.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PayoutScript(Bytes);

impl PayoutScript {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// The empty script.
    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(Bytes::from(hex::decode(s)?)))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the script.
    pub fn destination(&self) -> PayoutDestination {
        let script = self.as_bytes();

        if let Some(hash) = match_p2pkh(script) {
            return PayoutDestination::PayToPublicKeyHash(hash);
        }
        if let Some(hash) = match_p2sh(script) {
            return PayoutDestination::PayToScriptHash(hash);
        }
        if let Some(key) = match_p2pk(script) {
            return PayoutDestination::PayToPublicKey(key);
        }
        if script.first() == Some(&OP_RETURN) && is_push_only(&script[1..]) {
            return PayoutDestination::NullData;
        }
        if let Some((required, keys)) = match_multisig(script) {
            return PayoutDestination::Multisig { required, keys };
        }
        PayoutDestination::NonStandard
    }

    /// Whether the node would accept this as a standard output.
    ///
    /// Null data scripts are limited to `max_nulldata_size` bytes in total,
    /// and bare multisig to at most 3 keys.
    pub fn is_standard(&self, max_nulldata_size: usize) -> bool {
        match self.destination() {
            PayoutDestination::NonStandard => false,
            PayoutDestination::NullData => self.len() <= max_nulldata_size,
            PayoutDestination::Multisig { required, keys } => {
                let n = keys.len();
                (1..=usize::from(MAX_STANDARD_MULTISIG_KEYS)).contains(&n)
                    && required >= 1
                    && usize::from(required) <= n
            }
            _ => true,
        }
    }
}

fn hash160(bytes: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(bytes);
    out
}

fn match_p2pkh(script: &[u8]) -> Option<[u8; 20]> {
    match script {
        [OP_DUP, OP_HASH160, 20, hash @ .., OP_EQUALVERIFY, OP_CHECKSIG] if hash.len() == 20 => {
            Some(hash160(hash))
        }
        _ => None,
    }
}

fn match_p2sh(script: &[u8]) -> Option<[u8; 20]> {
    match script {
        [OP_HASH160, 20, hash @ .., OP_EQUAL] if hash.len() == 20 => Some(hash160(hash)),
        _ => None,
    }
}

fn match_p2pk(script: &[u8]) -> Option<PublicKey> {
    match script {
        [push, key @ .., OP_CHECKSIG] if usize::from(*push) == key.len() && is_key_size(key) => {
            PublicKey::from_slice(key).ok()
        }
        _ => None,
    }
}

fn is_key_size(key: &[u8]) -> bool {
    key.len() == COMPRESSED_PUBLIC_KEY_SIZE || key.len() == UNCOMPRESSED_PUBLIC_KEY_SIZE
}

/// `OP_m <key>... OP_n OP_CHECKMULTISIG` with exactly `n` keys and `m <= n`.
fn match_multisig(script: &[u8]) -> Option<(u8, Vec<PublicKey>)> {
    let (&first, rest) = script.split_first()?;
    let (&last, rest) = rest.split_last()?;
    let (&count, mut body) = rest.split_last()?;
    if last != OP_CHECKMULTISIG {
        return None;
    }
    let required = small_integer(first)?;
    let total = small_integer(count)?;

    let mut keys = Vec::new();
    while let Some((&push, tail)) = body.split_first() {
        let len = usize::from(push);
        if tail.len() < len || !is_key_size(&tail[..len]) {
            return None;
        }
        keys.push(PublicKey::from_slice(&tail[..len]).ok()?);
        body = &tail[len..];
    }

    (keys.len() == usize::from(total) && required <= total).then_some((required, keys))
}

fn small_integer(opcode: u8) -> Option<u8> {
    (OP_1..=OP_16).contains(&opcode).then(|| opcode - OP_1 + 1)
}

/// Every instruction is a data push or a small-integer opcode, and every push
/// fits in the script.
fn is_push_only(mut script: &[u8]) -> bool {
    while let Some((&opcode, rest)) = script.split_first() {
        if opcode > OP_16 {
            return false;
        }
        let mut reader = Reader::new(rest);
        let len = match opcode {
            OP_PUSHDATA1 => reader.read_u8().map(usize::from),
            OP_PUSHDATA2 => reader.read_u16_le().map(usize::from),
            OP_PUSHDATA4 => reader.read_u32_le().map(|n| n as usize),
            n if n < OP_PUSHDATA1 => Ok(usize::from(n)),
            _ => Ok(0),
        };
        let Ok(len) = len else {
            return false;
        };
        match reader.read_bytes(len) {
            Ok(_) => script = &rest[rest.len() - reader.remaining()..],
            Err(_) => return false,
        }
    }
    true
}

impl fmt::Debug for PayoutScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayoutScript({})", self.to_hex())
    }
}

impl AsRef<[u8]> for PayoutScript {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PayoutScript {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

/// Length-prefixed on the wire.
impl BinaryCodec for PayoutScript {
    fn encode(&self, out: &mut Vec<u8>) {
        write_blob(out, &self.0);
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(Self(Bytes::copy_from_slice(reader.read_blob()?)))
    }
}

impl serde::Serialize for PayoutScript {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for PayoutScript {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBKEY: &str = "030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744";
    const UNCOMPRESSED: &str = "04d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0a";

    fn script(hex: &str) -> PayoutScript {
        PayoutScript::from_hex(hex).unwrap()
    }

    fn multisig(required: u8, keys: &[&str]) -> PayoutScript {
        let mut bytes = vec![OP_1 + required - 1];
        for key in keys {
            let key = hex::decode(key).unwrap();
            bytes.push(key.len() as u8);
            bytes.extend_from_slice(&key);
        }
        bytes.push(OP_1 + keys.len() as u8 - 1);
        bytes.push(OP_CHECKMULTISIG);
        PayoutScript::from(bytes)
    }

    #[test]
    fn test_p2pkh() {
        let s = script("76a914a4b9a3c7c5a93c9e22c9f4a1b0a8e2b1c3d4e5f688ac");
        assert_eq!(s.destination().kind(), "pubkeyhash");
        assert!(s.is_standard(223));
    }

    #[test]
    fn test_p2sh() {
        let s = script("a914a4b9a3c7c5a93c9e22c9f4a1b0a8e2b1c3d4e5f687");
        assert!(matches!(s.destination(), PayoutDestination::PayToScriptHash(_)));
    }

    #[test]
    fn test_p2pk_both_key_sizes() {
        for key in [PUBKEY, UNCOMPRESSED] {
            let s = script(&format!("{:02x}{key}ac", key.len() / 2));
            match s.destination() {
                PayoutDestination::PayToPublicKey(pk) => assert_eq!(pk.to_hex(), key),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_multisig_limits() {
        let one_of_one = multisig(1, &[PUBKEY]);
        assert!(matches!(
            one_of_one.destination(),
            PayoutDestination::Multisig { required: 1, .. }
        ));
        assert!(one_of_one.is_standard(223));

        let two_of_three = multisig(2, &[PUBKEY, UNCOMPRESSED, PUBKEY]);
        assert!(two_of_three.is_standard(223));

        let one_of_four = multisig(1, &[PUBKEY; 4]);
        assert_eq!(one_of_four.destination().kind(), "multisig");
        assert!(!one_of_four.is_standard(223));

        // m > n never matches.
        let mut bytes = multisig(1, &[PUBKEY]).as_bytes().to_vec();
        bytes[0] = OP_1 + 1;
        assert_eq!(PayoutScript::from(bytes).destination(), PayoutDestination::NonStandard);
    }

    #[test]
    fn test_null_data() {
        assert_eq!(script("6a").destination(), PayoutDestination::NullData);
        assert_eq!(script("6a0401020304").destination(), PayoutDestination::NullData);
        assert_eq!(script("6a4c0201020051").destination(), PayoutDestination::NullData);

        // Push runs past the end.
        assert_eq!(script("6a0501020304").destination(), PayoutDestination::NonStandard);
        // Non-push opcode after OP_RETURN.
        assert_eq!(script("6a76").destination(), PayoutDestination::NonStandard);

        let mut long = vec![OP_RETURN, OP_PUSHDATA1, 222];
        long.extend_from_slice(&[0u8; 222]);
        let long = PayoutScript::from(long);
        assert_eq!(long.destination(), PayoutDestination::NullData);
        assert_eq!(long.len(), 225);
        assert!(!long.is_standard(223));
        assert!(long.is_standard(225));
    }

    #[test]
    fn test_non_standard() {
        assert_eq!(PayoutScript::empty().destination(), PayoutDestination::NonStandard);
        assert!(!PayoutScript::empty().is_standard(223));
        assert!(!script("00").is_standard(223));
        // A 33-byte key behind the uncompressed prefix is not a key at all.
        let mut bad = vec![33, 0x04];
        bad.extend_from_slice(&[0x11; 32]);
        bad.push(OP_CHECKSIG);
        assert_eq!(
            PayoutScript::from(bad).destination(),
            PayoutDestination::NonStandard
        );
    }

    #[test]
    fn test_off_curve_keys_still_classify() {
        // x >= p cannot be on the curve, but size and prefix are what count.
        let mut off_curve = vec![0x02];
        off_curve.extend_from_slice(&[0xff; 32]);

        let mut p2pk = vec![33];
        p2pk.extend_from_slice(&off_curve);
        p2pk.push(OP_CHECKSIG);
        let p2pk = PayoutScript::from(p2pk);
        match p2pk.destination() {
            PayoutDestination::PayToPublicKey(key) => {
                assert_eq!(key.as_bytes(), off_curve.as_slice());
                assert!(!key.is_fully_valid());
            }
            other => panic!("expected pubkey, got {other:?}"),
        }
        assert!(p2pk.is_standard(223));

        let mut multisig = vec![OP_1, 33];
        multisig.extend_from_slice(&off_curve);
        multisig.extend_from_slice(&[OP_1, OP_CHECKMULTISIG]);
        let multisig = PayoutScript::from(multisig);
        assert!(matches!(
            multisig.destination(),
            PayoutDestination::Multisig { required: 1, .. }
        ));
        assert!(multisig.is_standard(223));
    }

    #[test]
    fn test_blob_encoding() {
        let s = script("6a0401020304");
        let bytes = s.serialize();
        assert_eq!(bytes[0], 6);
        assert_eq!(PayoutScript::deserialize(&bytes).unwrap(), s);
    }
}
