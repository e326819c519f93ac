//! Metric helpers for `channel-reassembler`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate.

use metrics::counter;

use crate::channel::SkipReason;

/// Name of the counter tracking skipped frames, labelled by `reason`.
pub const FRAMES_SKIPPED: &str = "reassembler_frames_skipped_total";
/// Name of the counter tracking reassembled channels, labelled by `state`.
pub const CHANNELS_TOTAL: &str = "reassembler_channels_total";
/// Name of the counter tracking persisted records that could not be used.
pub const RECORDS_REJECTED: &str = "reassembler_records_rejected_total";

/// Record `count` frames skipped for `reason`.
pub fn inc_frames_skipped_by(reason: SkipReason, count: usize) {
    counter!(FRAMES_SKIPPED, "reason" => reason.as_str())
        .increment(u64::try_from(count).unwrap_or(u64::MAX));
}

/// Record a reassembled channel.
pub fn inc_channels(ready: bool) {
    let state = if ready { "ready" } else { "incomplete" };
    counter!(CHANNELS_TOTAL, "state" => state).increment(1);
}

/// Record a persisted record that failed to load or decode.
pub fn inc_records_rejected() { counter!(RECORDS_REJECTED).increment(1); }
