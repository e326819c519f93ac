//! Builders for frames and per-channel buckets.

use channel_reassembler::{ChannelId, Frame, FrameNumber, FrameWithMetadata, TxHash};

/// A channel identifier filled with `byte`.
#[must_use]
pub fn channel(byte: u8) -> ChannelId { ChannelId::new([byte; 16]) }

/// A frame on `id` carried by a transaction at `(block, index)`.
///
/// The transaction hash and payload are derived from the position so frames
/// that share a number remain distinguishable.
#[must_use]
pub fn frame(
    id: ChannelId,
    block: u64,
    index: u64,
    number: u16,
    is_last: bool,
) -> FrameWithMetadata {
    let mut hash = [0_u8; 32];
    hash[..8].copy_from_slice(&block.to_be_bytes());
    hash[8..16].copy_from_slice(&index.to_be_bytes());
    let payload = [block.to_be_bytes(), index.to_be_bytes()].concat();
    let frame = Frame::new(id, FrameNumber::new(number), payload, is_last);
    FrameWithMetadata::new(TxHash::new(hash), block, index, frame)
}

/// A bucket for `id` built from `(number, is_last)` pairs in arrival order.
///
/// Each frame lands in its own block, numbered by position.
#[must_use]
pub fn sequence(id: ChannelId, layout: &[(u16, bool)]) -> Vec<FrameWithMetadata> {
    layout.iter()
        .zip(0_u64..)
        .map(|(&(number, is_last), block)| frame(id, block, 0, number, is_last))
        .collect()
}

/// Frame numbers of `frames`, in order.
#[must_use]
pub fn numbers(frames: &[FrameWithMetadata]) -> Vec<u16> {
    frames.iter().map(|frame| frame.frame_number().get()).collect()
}
