use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::{ChannelId, FrameNumber};

/// A single slice of channel data.
///
/// `Frame` is agnostic of where it was carried. The payload is kept as
/// opaque [`Bytes`] so cloning a frame into a report never copies its data.
///
/// # Examples
///
/// ```
/// use channel_reassembler::frame::{ChannelId, Frame, FrameNumber};
/// let frame = Frame::new(ChannelId::new([7; 16]), FrameNumber::zero(), &b"abc"[..], true);
/// assert_eq!(frame.frame_number().get(), 0);
/// assert_eq!(frame.data(), b"abc");
/// assert!(frame.is_last());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    id: ChannelId,
    frame_number: FrameNumber,
    #[serde(with = "crate::encoding::prefixed")]
    data: Bytes,
    is_last: bool,
}

impl Frame {
    /// Create a new frame.
    #[must_use]
    pub fn new(
        id: ChannelId,
        frame_number: FrameNumber,
        data: impl Into<Bytes>,
        is_last: bool,
    ) -> Self {
        Self {
            id,
            frame_number,
            data: data.into(),
            is_last,
        }
    }

    /// Return the identifier of the channel this frame belongs to.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId { self.id }

    /// Return the frame position within its channel.
    #[must_use]
    pub const fn frame_number(&self) -> FrameNumber { self.frame_number }

    /// Borrow the opaque payload.
    #[must_use]
    pub fn data(&self) -> &[u8] { &self.data }

    /// Report whether this frame closes its channel.
    #[must_use]
    pub const fn is_last(&self) -> bool { self.is_last }
}
