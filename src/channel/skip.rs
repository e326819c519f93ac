//! Classification of frames that did not make it into a channel.

use derive_more::Display;

use crate::frame::FrameWithMetadata;

/// Why a frame was left out of its channel.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// A second terminal frame arrived after the channel was closed.
    #[display("channel already closed")]
    DuplicateClose,
    /// A frame with the same number was already accepted.
    #[display("duplicate frame number")]
    DuplicateFrameNumber,
    /// The frame arrived after the close and lies at or beyond the end.
    #[display("frame past the end of the channel")]
    PastChannelEnd,
    /// The frame was accepted earlier but a later close placed it beyond
    /// the end of the channel.
    #[display("pruned beyond the end of the channel")]
    Pruned,
}

impl SkipReason {
    /// Stable label for metrics and structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateClose => "duplicate_close",
            Self::DuplicateFrameNumber => "duplicate_frame_number",
            Self::PastChannelEnd => "past_channel_end",
            Self::Pruned => "pruned",
        }
    }
}

/// A rejected frame and the rule that rejected it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFrame {
    frame: FrameWithMetadata,
    reason: SkipReason,
}

impl SkippedFrame {
    /// Record that `frame` was skipped for `reason`.
    #[must_use]
    pub const fn new(frame: FrameWithMetadata, reason: SkipReason) -> Self { Self { frame, reason } }

    /// Borrow the skipped frame.
    #[must_use]
    pub const fn frame(&self) -> &FrameWithMetadata { &self.frame }

    /// Why the frame was skipped.
    #[must_use]
    pub const fn reason(&self) -> SkipReason { self.reason }

    /// Split into the frame and its reason.
    #[must_use]
    pub fn into_parts(self) -> (FrameWithMetadata, SkipReason) { (self.frame, self.reason) }
}
