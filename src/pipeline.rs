//! End-to-end reassembly run: load, order, group, reassemble and write.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    Result,
    channel::reassemble_frames,
    config::ReassembleConfig,
    ingest::{
        LoadFailure,
        LoadOutcome,
        load_transactions,
        order_transactions,
        transactions_to_frames,
    },
    output::{OutputError, ReportWriter},
};

/// What a run produced and what it had to leave behind.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of distinct channels reassembled.
    pub channels: usize,
    /// Channels that were closed and complete.
    pub ready: usize,
    /// Channels with at least one skipped frame.
    pub invalid: usize,
    /// Paths of the reports written.
    pub written: Vec<PathBuf>,
    /// Record files that could not be used.
    pub load_failures: Vec<LoadFailure>,
    /// Reports that could not be written.
    pub write_failures: Vec<OutputError>,
}

impl RunSummary {
    /// Whether every record loaded and every report was written.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.load_failures.is_empty() && self.write_failures.is_empty()
    }
}

/// Reassemble every channel found in `config.in_directory` and write one
/// report per channel to `config.out_directory`.
///
/// # Errors
///
/// Fails only if the output directory cannot be created or the input
/// directory cannot be listed. Unusable records and failed writes are
/// collected in the returned [`RunSummary`].
pub fn reassemble_channels(config: &ReassembleConfig) -> Result<RunSummary> {
    let writer = ReportWriter::create(&config.out_directory)?;
    let LoadOutcome {
        mut transactions,
        filtered,
        failures,
    } = load_transactions(&config.in_directory, config.batch_inbox)?;
    info!(
        loaded = transactions.len(),
        filtered,
        failed = failures.len(),
        "loaded batcher transactions"
    );

    order_transactions(&mut transactions);
    let reports = reassemble_frames(transactions_to_frames(transactions));

    let mut summary = RunSummary {
        channels: reports.len(),
        load_failures: failures,
        ..RunSummary::default()
    };
    for report in &reports {
        summary.ready += usize::from(report.is_ready());
        summary.invalid += usize::from(report.has_invalid_frames());
        match writer.write(report) {
            Ok(path) => summary.written.push(path),
            Err(error) => {
                warn!(channel = %report.id(), %error, "failed to persist channel report");
                summary.write_failures.push(error);
            }
        }
    }

    info!(
        channels = summary.channels,
        ready = summary.ready,
        invalid = summary.invalid,
        "reassembled channels"
    );
    Ok(summary)
}
