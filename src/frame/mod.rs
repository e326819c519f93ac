//! Frame primitives shared by ingestion, reassembly and reporting.
//!
//! A frame is the smallest unit a batcher submits: a slice of channel data
//! tagged with the channel it belongs to, its position inside that channel
//! and whether it closes the channel. Each sub-module holds one concept so the
//! types stay small and easy to audit.

pub mod codec;
pub mod error;
pub mod id;
pub mod metadata;
pub mod number;
pub mod record;

pub use codec::{DERIVATION_VERSION_0, MAX_FRAME_LEN, encode_calldata, parse_frames};
pub use error::{FrameDecodeError, FrameEncodeError};
pub use id::ChannelId;
pub use metadata::{FrameWithMetadata, TxHash};
pub use number::FrameNumber;
pub use record::Frame;

#[cfg(test)]
mod tests;
