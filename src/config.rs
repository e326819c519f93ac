//! Run configuration for channel reassembly.

use std::path::PathBuf;

use crate::ingest::Address;

/// Default directory holding persisted transaction records.
pub const DEFAULT_IN_DIRECTORY: &str = "/tmp/batch_decoder/transactions_cache";
/// Default directory receiving channel reports.
pub const DEFAULT_OUT_DIRECTORY: &str = "/tmp/batch_decoder/channel_cache";

/// Settings for a single reassembly run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReassembleConfig {
    /// Only records sent to this address are considered.
    pub batch_inbox: Address,
    /// Directory holding one persisted transaction record per file.
    pub in_directory: PathBuf,
    /// Directory receiving one report per channel.
    pub out_directory: PathBuf,
}

impl ReassembleConfig {
    /// Configuration for `batch_inbox` using the default directories.
    #[must_use]
    pub fn new(batch_inbox: Address) -> Self {
        Self {
            batch_inbox,
            in_directory: PathBuf::from(DEFAULT_IN_DIRECTORY),
            out_directory: PathBuf::from(DEFAULT_OUT_DIRECTORY),
        }
    }

    /// Read records from `dir` instead of the default.
    #[must_use]
    pub fn with_in_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.in_directory = dir.into();
        self
    }

    /// Write reports to `dir` instead of the default.
    #[must_use]
    pub fn with_out_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_directory = dir.into();
        self
    }
}
