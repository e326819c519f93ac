use std::{collections::HashMap, hash::BuildHasher};

use crate::frame::FrameNumber;

/// Decide whether the accepted frames form a complete channel.
///
/// A channel is ready when it has been closed and holds exactly the frames
/// `0..=end` with no gaps. The predicate is pure and never fails.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use channel_reassembler::{channel::is_ready, frame::FrameNumber};
/// let accepted: HashMap<_, ()> = [(FrameNumber::new(0), ()), (FrameNumber::new(1), ())].into();
/// assert!(is_ready(&accepted, true, FrameNumber::new(1)));
/// assert!(!is_ready(&accepted, false, FrameNumber::new(1)));
/// assert!(!is_ready(&accepted, true, FrameNumber::new(2)));
/// ```
#[must_use]
pub fn is_ready<V, S: BuildHasher>(
    accepted: &HashMap<FrameNumber, V, S>,
    closed: bool,
    end: FrameNumber,
) -> bool {
    if !closed {
        return false;
    }
    if accepted.len() != end.channel_len() {
        return false;
    }
    (0..=end.get()).all(|number| accepted.contains_key(&FrameNumber::new(number)))
}
