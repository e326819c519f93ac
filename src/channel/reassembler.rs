//! Folds channel buckets into reports.
//!
//! This is the entry point of the reconstruction core: it drives a
//! [`ChannelState`] over a bucket, logs and counts every skip, and evaluates
//! readiness once the bucket is exhausted. The fold is total and
//! deterministic, so running it twice over the same bucket yields identical
//! reports.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{ChannelReport, ChannelState, FrameDisposition, group_by_channel};
use crate::frame::{ChannelId, FrameWithMetadata};

/// Reassemble a single channel from its frames in arrival order.
///
/// # Examples
///
/// ```
/// use channel_reassembler::{
///     channel::reassemble_channel,
///     frame::{ChannelId, Frame, FrameNumber, FrameWithMetadata, TxHash},
/// };
/// let id = ChannelId::new([9; 16]);
/// let frame = |number: u16, is_last: bool| {
///     let frame = Frame::new(id, FrameNumber::new(number), Vec::new(), is_last);
///     FrameWithMetadata::new(TxHash::default(), 1, 0, frame)
/// };
/// let report = reassemble_channel(id, vec![frame(0, false), frame(1, true)]);
/// assert!(report.is_ready());
/// assert!(!report.has_invalid_frames());
/// ```
#[must_use]
pub fn reassemble_channel(id: ChannelId, frames: Vec<FrameWithMetadata>) -> ChannelReport {
    let mut state = ChannelState::new();

    for frame in &frames {
        let number = frame.frame_number();
        match state.ingest(frame.clone()) {
            FrameDisposition::Accepted | FrameDisposition::Closed { pruned: 0 } => {}
            FrameDisposition::Closed { pruned } => {
                debug!(channel = %id, end = %number, pruned, "pruned frames beyond channel end");
                #[cfg(feature = "metrics")]
                crate::metrics::inc_frames_skipped_by(super::SkipReason::Pruned, pruned);
            }
            FrameDisposition::Skipped(reason) => {
                debug!(
                    channel = %id,
                    frame_number = %number,
                    tx = %frame.transaction_hash(),
                    reason = reason.as_str(),
                    "skipping frame: {reason}"
                );
                #[cfg(feature = "metrics")]
                crate::metrics::inc_frames_skipped_by(reason, 1);
            }
        }
    }

    let ready = state.is_ready();
    if !ready {
        info!(channel = %id, closed = state.is_closed(), "channel is not ready");
    }
    #[cfg(feature = "metrics")]
    crate::metrics::inc_channels(ready);

    ChannelReport::new(id, frames, state.into_skipped(), ready)
}

/// Reassemble every bucket, in channel-identifier order.
#[must_use]
pub fn reassemble_all(channels: BTreeMap<ChannelId, Vec<FrameWithMetadata>>) -> Vec<ChannelReport> {
    channels
        .into_iter()
        .map(|(id, frames)| reassemble_channel(id, frames))
        .collect()
}

/// Group globally ordered frames by channel and reassemble each channel.
#[must_use]
pub fn reassemble_frames<I>(frames: I) -> Vec<ChannelReport>
where
    I: IntoIterator<Item = FrameWithMetadata>,
{
    reassemble_all(group_by_channel(frames))
}
