//! Per-channel accept/skip state machine.
//!
//! [`ChannelState`] is created fresh for each channel bucket, fed the bucket's
//! frames in arrival order and discarded once the report is built. Its fields
//! only ever move forward: a closed channel never reopens, the end never
//! changes once fixed and skipped frames are never reinstated.

use std::collections::HashMap;

use super::{SkipReason, SkippedFrame, readiness};
use crate::frame::{FrameNumber, FrameWithMetadata};

/// Outcome of feeding one frame into a [`ChannelState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameDisposition {
    /// The frame was accepted and the channel remains open.
    Accepted,
    /// The frame was accepted as the terminal frame. `pruned` counts the
    /// previously accepted frames evicted because they lie beyond the end.
    Closed { pruned: usize },
    /// The frame was rejected.
    Skipped(SkipReason),
}

/// Reconstruction state of a single channel.
#[derive(Debug, Default)]
pub struct ChannelState {
    accepted: HashMap<FrameNumber, FrameWithMetadata>,
    closed: bool,
    end: FrameNumber,
    highest_seen: FrameNumber,
    skipped: Vec<SkippedFrame>,
}

impl ChannelState {
    /// Create an empty, open channel state.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Feed the next frame of the channel.
    ///
    /// The first matching rule decides the frame's fate:
    ///
    /// 1. a terminal frame on a closed channel is skipped;
    /// 2. a frame whose number was already accepted is skipped;
    /// 3. on a closed channel, a frame numbered at or beyond the end is skipped;
    /// 4. anything else is accepted, and a terminal frame closes the channel.
    ///
    /// Closing below the highest number accepted so far evicts every other
    /// accepted frame numbered at or beyond the new end.
    ///
    /// # Examples
    ///
    /// ```
    /// use channel_reassembler::{
    ///     channel::{ChannelState, FrameDisposition, SkipReason},
    ///     frame::{ChannelId, Frame, FrameNumber, FrameWithMetadata, TxHash},
    /// };
    /// let frame = |number: u16, is_last: bool| {
    ///     let frame = Frame::new(ChannelId::default(), FrameNumber::new(number), Vec::new(), is_last);
    ///     FrameWithMetadata::new(TxHash::default(), 1, 0, frame)
    /// };
    /// let mut state = ChannelState::new();
    /// assert_eq!(state.ingest(frame(0, false)), FrameDisposition::Accepted);
    /// assert_eq!(state.ingest(frame(0, false)), FrameDisposition::Skipped(SkipReason::DuplicateFrameNumber));
    /// assert_eq!(state.ingest(frame(1, true)), FrameDisposition::Closed { pruned: 0 });
    /// assert!(state.is_ready());
    /// ```
    pub fn ingest(&mut self, frame: FrameWithMetadata) -> FrameDisposition {
        if let Some(reason) = self.rejection(&frame) {
            self.skipped.push(SkippedFrame::new(frame, reason));
            return FrameDisposition::Skipped(reason);
        }

        let number = frame.frame_number();
        let is_last = frame.is_last();
        self.accepted.insert(number, frame);

        let disposition = if is_last {
            self.closed = true;
            self.end = number;
            let pruned = if self.end < self.highest_seen {
                self.prune_beyond_end()
            } else {
                0
            };
            FrameDisposition::Closed { pruned }
        } else {
            FrameDisposition::Accepted
        };

        self.highest_seen = self.highest_seen.max(number);
        disposition
    }

    fn rejection(&self, frame: &FrameWithMetadata) -> Option<SkipReason> {
        let number = frame.frame_number();
        if frame.is_last() && self.closed {
            Some(SkipReason::DuplicateClose)
        } else if self.accepted.contains_key(&number) {
            Some(SkipReason::DuplicateFrameNumber)
        } else if self.closed && number >= self.end {
            Some(SkipReason::PastChannelEnd)
        } else {
            None
        }
    }

    /// Move every accepted frame numbered beyond the end into `skipped`.
    ///
    /// The terminal frame itself sits exactly at the end and stays accepted.
    /// Evictions are recorded in ascending frame-number order.
    fn prune_beyond_end(&mut self) -> usize {
        let end = self.end;
        let mut beyond: Vec<FrameNumber> = self
            .accepted
            .keys()
            .copied()
            .filter(|&number| number > end)
            .collect();
        beyond.sort_unstable();

        for number in &beyond {
            if let Some(frame) = self.accepted.remove(number) {
                self.skipped.push(SkippedFrame::new(frame, SkipReason::Pruned));
            }
        }
        beyond.len()
    }

    /// Whether the accepted frames form a complete, closed channel.
    #[must_use]
    pub fn is_ready(&self) -> bool { readiness::is_ready(&self.accepted, self.closed, self.end) }

    /// Whether a terminal frame has been accepted.
    #[must_use]
    pub const fn is_closed(&self) -> bool { self.closed }

    /// Number of the accepted terminal frame, once the channel is closed.
    #[must_use]
    pub const fn end(&self) -> Option<FrameNumber> {
        if self.closed { Some(self.end) } else { None }
    }

    /// Highest frame number accepted so far.
    #[must_use]
    pub const fn highest_seen(&self) -> FrameNumber { self.highest_seen }

    /// Whether a frame with `number` is currently accepted.
    #[must_use]
    pub fn is_accepted(&self, number: FrameNumber) -> bool { self.accepted.contains_key(&number) }

    /// Number of currently accepted frames.
    #[must_use]
    pub fn accepted_len(&self) -> usize { self.accepted.len() }

    /// Frames skipped so far, in the order they were skipped.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedFrame] { &self.skipped }

    /// Consume the state, returning the skipped frames.
    #[must_use]
    pub fn into_skipped(self) -> Vec<SkippedFrame> { self.skipped }
}
