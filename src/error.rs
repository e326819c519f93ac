//! Canonical error and result types for the crate.
//!
//! The reassembly core itself cannot fail; a channel with rejected frames is
//! still a successful result. `ReassembleError` only covers the I/O around
//! it that prevents a run from starting at all.

use thiserror::Error;

use crate::{ingest::IngestError, output::OutputError};

/// Fatal failures of a reassembly run.
#[derive(Debug, Error)]
pub enum ReassembleError {
    /// The input directory could not be scanned.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// The output directory could not be prepared.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Canonical result alias used by the run-level APIs.
pub type Result<T> = std::result::Result<T, ReassembleError>;
