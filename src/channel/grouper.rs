use std::collections::BTreeMap;

use crate::frame::{ChannelId, FrameWithMetadata};

/// Bucket frames by channel identifier.
///
/// Frames keep their relative order inside each bucket and none are dropped.
/// Buckets iterate in channel-identifier order so repeated runs over the same
/// input visit channels identically.
///
/// # Examples
///
/// ```
/// use channel_reassembler::{
///     channel::group_by_channel,
///     frame::{ChannelId, Frame, FrameNumber, FrameWithMetadata, TxHash},
/// };
/// let frame = |id: u8, number: u16| {
///     let frame = Frame::new(ChannelId::new([id; 16]), FrameNumber::new(number), Vec::new(), false);
///     FrameWithMetadata::new(TxHash::default(), 1, 0, frame)
/// };
/// let buckets = group_by_channel([frame(2, 0), frame(1, 0), frame(2, 1)]);
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[&ChannelId::new([2; 16])].len(), 2);
/// ```
pub fn group_by_channel<I>(frames: I) -> BTreeMap<ChannelId, Vec<FrameWithMetadata>>
where
    I: IntoIterator<Item = FrameWithMetadata>,
{
    let mut channels: BTreeMap<ChannelId, Vec<FrameWithMetadata>> = BTreeMap::new();
    for frame in frames {
        channels.entry(frame.channel_id()).or_default().push(frame);
    }
    channels
}
