//! Command line interface for the `channel-reassembler` binary.
//!
//! Kept free of library types so the build script can render a man page
//! from it.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the `channel-reassembler` binary.
#[derive(Debug, Parser)]
#[command(
    name = "channel-reassembler",
    version,
    about = "Reassemble channels from persisted batcher transactions"
)]
pub struct Cli {
    /// Batch inbox address the transactions must be sent to.
    #[arg(long)]
    pub inbox: String,
    /// Directory holding persisted transaction records.
    #[arg(long = "in", default_value = "/tmp/batch_decoder/transactions_cache")]
    pub in_directory: PathBuf,
    /// Directory receiving one report per channel.
    #[arg(long = "out", default_value = "/tmp/batch_decoder/channel_cache")]
    pub out_directory: PathBuf,
}
