//! Directory loader for persisted transaction records.
//!
//! A malformed record is reported and skipped rather than aborting the run,
//! so one bad file cannot hide the channels carried by every other file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::{Address, BatcherTransaction, IngestError, TransactionRecord};

/// A record file that could not be used.
#[derive(Debug)]
pub struct LoadFailure {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Why the file was rejected.
    pub error: IngestError,
}

/// Result of scanning an input directory.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records sent to the inbox by a validated batcher, in file-name order.
    pub transactions: Vec<BatcherTransaction>,
    /// Number of well-formed records filtered out by inbox or sender.
    pub filtered: usize,
    /// Files that could not be read or decoded.
    pub failures: Vec<LoadFailure>,
}

/// Load every record in `dir` that was submitted to `inbox`.
///
/// Files are visited in file-name order. Sub-directories are ignored.
///
/// # Errors
///
/// Returns [`IngestError::ReadDir`] if `dir` cannot be listed. Problems with
/// individual files are collected in [`LoadOutcome::failures`] instead.
pub fn load_transactions(dir: &Path, inbox: Address) -> Result<LoadOutcome, IngestError> {
    let read_dir_error = |source| IngestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if entry.file_type().map_err(read_dir_error)?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut outcome = LoadOutcome::default();
    for path in paths {
        match load_submitted(&path, inbox) {
            Ok(Some(tx)) => outcome.transactions.push(tx),
            Ok(None) => {
                debug!(path = %path.display(), "record not submitted to inbox");
                outcome.filtered += 1;
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable record");
                #[cfg(feature = "metrics")]
                crate::metrics::inc_records_rejected();
                outcome.failures.push(LoadFailure { path, error });
            }
        }
    }
    Ok(outcome)
}

fn load_submitted(path: &Path, inbox: Address) -> Result<Option<BatcherTransaction>, IngestError> {
    let record = load_transaction_file(path)?;
    if !record.is_submitted_to(inbox) {
        return Ok(None);
    }
    record
        .into_batcher_transaction()
        .map(Some)
        .map_err(|source| IngestError::Frames {
            path: path.to_path_buf(),
            source,
        })
}

/// Read and decode a single record file.
///
/// # Errors
///
/// Returns [`IngestError::ReadFile`] if the file cannot be read and
/// [`IngestError::Decode`] if it is not a valid record.
pub fn load_transaction_file(path: &Path) -> Result<TransactionRecord, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
