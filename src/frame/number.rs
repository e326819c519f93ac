//! Zero-based frame positions within a channel.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Position of a frame within its channel.
///
/// # Examples
///
/// ```
/// use channel_reassembler::frame::FrameNumber;
/// let number = FrameNumber::new(3);
/// assert_eq!(number.get(), 3);
/// assert_eq!(number.channel_len(), 4);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct FrameNumber(u16);

impl FrameNumber {
    /// Construct a frame number from its raw value.
    #[must_use]
    pub const fn new(value: u16) -> Self { Self(value) }

    /// Return the first frame number of every channel.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u16 { self.0 }

    /// Number of frames in a channel whose last frame carries this number.
    #[must_use]
    pub fn channel_len(self) -> usize { usize::from(self.0) + 1 }
}
