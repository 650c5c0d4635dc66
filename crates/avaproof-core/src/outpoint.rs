//! Transaction output references.

use bytes::BufMut;
use std::fmt;

use crate::codec::{BinaryCodec, Reader};
use crate::error::Result;
use crate::ids::TxId;

/// A reference to one output of a transaction: txid plus output index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OutPoint {
    pub txid: TxId,
    pub vout: u32,
}

impl OutPoint {
    pub const fn new(txid: TxId, vout: u32) -> Self {
        Self { txid, vout }
    }
}

impl fmt::Debug for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutPoint({}:{})", &self.txid.to_hex()[..16], self.vout)
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

/// 32 raw txid bytes followed by the little-endian index; 36 bytes total.
impl BinaryCodec for OutPoint {
    fn encode(&self, out: &mut Vec<u8>) {
        self.txid.encode(out);
        out.put_u32_le(self.vout);
    }

    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let txid = TxId::decode(reader)?;
        let vout = reader.read_u32_le()?;
        Ok(Self { txid, vout })
    }
}
