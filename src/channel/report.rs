use serde::{Deserialize, Serialize};

use super::{SkipReason, SkippedFrame};
use crate::frame::{ChannelId, FrameWithMetadata};

/// Outcome of reassembling one channel.
///
/// The report keeps every frame that was offered to the channel, in arrival
/// order, alongside the subset that was skipped. Serialised with the field
/// names `id`, `is_ready`, `invalid_frames`, `frames` and `skipped_frames`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReport {
    id: ChannelId,
    is_ready: bool,
    invalid_frames: bool,
    frames: Vec<FrameWithMetadata>,
    skipped_frames: Vec<FrameWithMetadata>,
    #[serde(skip)]
    skip_reasons: Vec<SkipReason>,
}

impl ChannelReport {
    /// Build a report from the frames offered to a channel and those skipped.
    #[must_use]
    pub fn new(
        id: ChannelId,
        frames: Vec<FrameWithMetadata>,
        skipped: Vec<SkippedFrame>,
        is_ready: bool,
    ) -> Self {
        let (skipped_frames, skip_reasons): (Vec<_>, Vec<_>) =
            skipped.into_iter().map(SkippedFrame::into_parts).unzip();
        Self {
            id,
            is_ready,
            invalid_frames: !skipped_frames.is_empty(),
            frames,
            skipped_frames,
            skip_reasons,
        }
    }

    /// Identifier of the reported channel.
    #[must_use]
    pub const fn id(&self) -> ChannelId { self.id }

    /// Whether the channel was closed and holds a gap-free run of frames.
    #[must_use]
    pub const fn is_ready(&self) -> bool { self.is_ready }

    /// Whether any frame of the channel was skipped.
    #[must_use]
    pub const fn has_invalid_frames(&self) -> bool { self.invalid_frames }

    /// Every frame offered to the channel, in arrival order.
    #[must_use]
    pub fn frames(&self) -> &[FrameWithMetadata] { &self.frames }

    /// Frames that were skipped, in the order they were skipped.
    #[must_use]
    pub fn skipped_frames(&self) -> &[FrameWithMetadata] { &self.skipped_frames }

    /// Reason for each entry of [`Self::skipped_frames`].
    ///
    /// Reasons are not persisted, so a report read back from disk carries an
    /// empty list.
    #[must_use]
    pub fn skip_reasons(&self) -> &[SkipReason] { &self.skip_reasons }

    /// File name under which the report is persisted.
    #[must_use]
    pub fn file_name(&self) -> String { format!("{}.json", self.id) }
}
