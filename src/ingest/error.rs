use std::{io, path::PathBuf};

use thiserror::Error;

use crate::frame::FrameDecodeError;

/// Errors raised while loading persisted transaction records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input directory could not be listed.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    /// A record file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    /// A record file is not a valid transaction record.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The calldata of a record could not be split into frames.
    #[error("failed to parse frames of {}: {source}", path.display())]
    Frames {
        path: PathBuf,
        source: FrameDecodeError,
    },
}
