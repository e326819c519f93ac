use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    encoding::fixed_hex_type,
    frame::{Frame, FrameDecodeError, TxHash, parse_frames},
};

fixed_hex_type!(
    /// A 20-byte account address such as the batch inbox or a sender.
    Address,
    20,
    prefix = "0x"
);

/// One persisted batcher transaction as written by the fetch step.
///
/// Frames are usually stored already decoded in `frames`. Records that only
/// carry raw `calldata` have their frames decoded on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Hash of the transaction.
    pub tx_hash: TxHash,
    /// Recipient of the transaction.
    pub inbox_address: Address,
    /// Number of the including block.
    pub block_number: u64,
    /// Position of the transaction within its block.
    pub tx_index: u64,
    /// Recovered sender of the transaction.
    pub sender: Address,
    /// Whether the sender is an authorised batcher.
    pub valid_sender: bool,
    /// Frames decoded by the fetch step, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<Frame>>,
    /// Raw calldata, used when `frames` is absent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::encoding::prefixed::option"
    )]
    pub calldata: Option<Bytes>,
    /// Error reported by the fetch step while decoding frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_err: Option<String>,
}

impl TransactionRecord {
    /// Whether this record was sent to `inbox` by a validated batcher.
    #[must_use]
    pub fn is_submitted_to(&self, inbox: Address) -> bool {
        self.inbox_address == inbox && self.valid_sender
    }

    /// Resolve the record's frames, decoding `calldata` when needed.
    ///
    /// # Errors
    ///
    /// Returns [`FrameDecodeError`] if the frames had to be decoded from
    /// calldata and the calldata is malformed.
    pub fn into_batcher_transaction(self) -> Result<BatcherTransaction, FrameDecodeError> {
        if let Some(err) = &self.frame_err {
            debug!(tx = %self.tx_hash, error = %err, "record carries a fetch-time frame error");
        }
        let frames = match (self.frames, self.calldata) {
            (Some(frames), _) => frames,
            (None, Some(calldata)) => parse_frames(&calldata)?,
            (None, None) => Vec::new(),
        };
        Ok(BatcherTransaction {
            tx_hash: self.tx_hash,
            block_number: self.block_number,
            tx_index: self.tx_index,
            frames,
        })
    }
}

/// A validated batcher transaction reduced to what reassembly needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatcherTransaction {
    tx_hash: TxHash,
    block_number: u64,
    tx_index: u64,
    frames: Vec<Frame>,
}

impl BatcherTransaction {
    /// Create a batcher transaction from its parts.
    #[must_use]
    pub fn new(tx_hash: TxHash, block_number: u64, tx_index: u64, frames: Vec<Frame>) -> Self {
        Self {
            tx_hash,
            block_number,
            tx_index,
            frames,
        }
    }

    /// Hash of the transaction.
    #[must_use]
    pub const fn tx_hash(&self) -> TxHash { self.tx_hash }

    /// Number of the including block.
    #[must_use]
    pub const fn block_number(&self) -> u64 { self.block_number }

    /// Position of the transaction within its block.
    #[must_use]
    pub const fn tx_index(&self) -> u64 { self.tx_index }

    /// Frames carried by the transaction, in calldata order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] { &self.frames }

    /// Consume the transaction, returning its frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> { self.frames }
}
