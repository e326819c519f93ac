#![doc(html_root_url = "https://docs.rs/channel-reassembler/latest")]
//! Public API for the `channel-reassembler` library.
//!
//! This crate rebuilds channels from the frames a batcher submitted on chain
//! and reports, per channel, which frames were skipped and whether the
//! channel is complete. The [`channel`] module holds the reconstruction core;
//! [`ingest`], [`output`] and [`pipeline`] wire it to persisted records and
//! report files.

mod encoding;

pub mod channel;
pub mod config;
pub mod error;
pub mod frame;
pub mod ingest;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod output;
pub mod pipeline;

pub use channel::{
    ChannelReport,
    ChannelState,
    FrameDisposition,
    SkipReason,
    SkippedFrame,
    group_by_channel,
    is_ready,
    reassemble_all,
    reassemble_channel,
    reassemble_frames,
};
pub use config::ReassembleConfig;
pub use encoding::ParseHexError;
pub use error::{ReassembleError, Result};
pub use frame::{ChannelId, Frame, FrameNumber, FrameWithMetadata, TxHash};
pub use ingest::{Address, BatcherTransaction, IngestError, TransactionRecord};
pub use output::{OutputError, ReportWriter};
pub use pipeline::{RunSummary, reassemble_channels};
