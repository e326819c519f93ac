//! Provenance attached to frames as they are pulled out of transactions.

use serde::{Deserialize, Serialize};

use super::{ChannelId, Frame, FrameNumber};
use crate::encoding::fixed_hex_type;

fixed_hex_type!(
    /// Hash of the transaction that carried a frame.
    TxHash,
    32,
    prefix = "0x"
);

/// A frame together with where it was included on chain.
///
/// The provenance fields only drive the global ordering that happens before
/// grouping. Reassembly carries them through untouched so reports can point
/// at the transaction behind every accepted or skipped frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameWithMetadata {
    transaction_hash: TxHash,
    inclusion_block: u64,
    #[serde(default)]
    transaction_index: u64,
    frame: Frame,
}

impl FrameWithMetadata {
    /// Attach provenance to `frame`.
    #[must_use]
    pub const fn new(
        transaction_hash: TxHash,
        inclusion_block: u64,
        transaction_index: u64,
        frame: Frame,
    ) -> Self {
        Self {
            transaction_hash,
            inclusion_block,
            transaction_index,
            frame,
        }
    }

    /// Hash of the carrying transaction.
    #[must_use]
    pub const fn transaction_hash(&self) -> TxHash { self.transaction_hash }

    /// Number of the block that included the carrying transaction.
    #[must_use]
    pub const fn inclusion_block(&self) -> u64 { self.inclusion_block }

    /// Index of the carrying transaction within its block.
    #[must_use]
    pub const fn transaction_index(&self) -> u64 { self.transaction_index }

    /// Borrow the wrapped frame.
    #[must_use]
    pub const fn frame(&self) -> &Frame { &self.frame }

    /// Shorthand for the wrapped frame's channel identifier.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId { self.frame.channel_id() }

    /// Shorthand for the wrapped frame's number.
    #[must_use]
    pub const fn frame_number(&self) -> FrameNumber { self.frame.frame_number() }

    /// Shorthand for the wrapped frame's terminal marker.
    #[must_use]
    pub const fn is_last(&self) -> bool { self.frame.is_last() }
}
