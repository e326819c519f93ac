//! Command line entry point for `channel-reassembler`.
//!
//! Parses CLI arguments, runs a reassembly pass and reports a summary.

mod cli;

use std::process::ExitCode;

use channel_reassembler::{Address, ReassembleConfig, reassemble_channels};
use clap::Parser;
use tracing::{error, info};

fn main() -> ExitCode {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let batch_inbox: Address = match cli.inbox.parse() {
        Ok(address) => address,
        Err(err) => {
            error!(inbox = %cli.inbox, %err, "invalid batch inbox address");
            return ExitCode::FAILURE;
        }
    };
    let config = ReassembleConfig::new(batch_inbox)
        .with_in_directory(cli.in_directory)
        .with_out_directory(cli.out_directory);

    match reassemble_channels(&config) {
        Ok(summary) => {
            info!(
                channels = summary.channels,
                ready = summary.ready,
                written = summary.written.len(),
                skipped_records = summary.load_failures.len(),
                "reassembly finished"
            );
            if summary.write_failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                error!(failures = summary.write_failures.len(), "some reports were not written");
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!(%err, "reassembly failed");
            ExitCode::FAILURE
        }
    }
}
