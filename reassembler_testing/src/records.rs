//! Helpers for laying out directories of persisted transaction records.

use std::{fs, path::Path};

use channel_reassembler::{Address, Frame, TransactionRecord, TxHash};
use rstest::fixture;
use tempfile::TempDir;

/// Batch inbox used by the record fixtures.
pub const INBOX: Address = Address::new([0xba; 20]);

/// A record sent to [`INBOX`] by a validated sender at `(block, index)`.
#[must_use]
pub fn record(block: u64, index: u64, frames: Vec<Frame>) -> TransactionRecord {
    let mut hash = [0_u8; 32];
    hash[..8].copy_from_slice(&block.to_be_bytes());
    hash[8..16].copy_from_slice(&index.to_be_bytes());
    TransactionRecord {
        tx_hash: TxHash::new(hash),
        inbox_address: INBOX,
        block_number: block,
        tx_index: index,
        sender: Address::new([0x01; 20]),
        valid_sender: true,
        frames: Some(frames),
        calldata: None,
        frame_err: None,
    }
}

/// Input and output directories for an end-to-end run.
pub struct RecordDir {
    input: TempDir,
    output: TempDir,
}

impl RecordDir {
    /// Create empty input and output directories.
    ///
    /// # Panics
    ///
    /// Panics if a temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: tempfile::tempdir().expect("create input dir"),
            output: tempfile::tempdir().expect("create output dir"),
        }
    }

    /// Directory holding the records.
    #[must_use]
    pub fn input(&self) -> &Path { self.input.path() }

    /// Directory receiving reports.
    #[must_use]
    pub fn output(&self) -> &Path { self.output.path() }

    /// Persist `record` as `<name>.json` in the input directory.
    ///
    /// # Panics
    ///
    /// Panics if the record cannot be serialised or written.
    pub fn write(&self, name: &str, record: &TransactionRecord) {
        let json = serde_json::to_vec_pretty(record).expect("serialise record");
        fs::write(self.input().join(format!("{name}.json")), json).expect("write record");
    }

    /// Persist raw bytes as `name` in the input directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, name: &str, contents: &[u8]) {
        fs::write(self.input().join(name), contents).expect("write raw record");
    }
}

impl Default for RecordDir {
    fn default() -> Self { Self::new() }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn record_dir() -> RecordDir { RecordDir::new() }
