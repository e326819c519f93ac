//! Persistence of channel reports.
//!
//! Every report is written as a single JSON document named after its channel
//! identifier, so a directory of reports can be inspected or diffed with
//! ordinary tools.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::channel::ChannelReport;

/// Errors raised while persisting reports.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    /// A report could not be serialised.
    #[error("failed to encode report {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A report file could not be written.
    #[error("failed to write report {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Writes channel reports into a directory, one file per channel.
#[derive(Clone, Debug)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Prepare `dir` for reports, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::CreateDir`] if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, OutputError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory receiving the reports.
    #[must_use]
    pub fn dir(&self) -> &Path { &self.dir }

    /// Write `report` to `<dir>/<channel id>.json`, replacing any earlier
    /// report for the same channel, and return the file path.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Encode`] or [`OutputError::Write`] if the report
    /// cannot be serialised or written.
    pub fn write(&self, report: &ChannelReport) -> Result<PathBuf, OutputError> {
        let path = self.dir.join(report.file_name());
        let mut json = match serde_json::to_vec(report) {
            Ok(json) => json,
            Err(source) => return Err(OutputError::Encode { path, source }),
        };
        json.push(b'\n');
        match fs::write(&path, json) {
            Ok(()) => Ok(path),
            Err(source) => Err(OutputError::Write { path, source }),
        }
    }
}
