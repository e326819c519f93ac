//! Channel reconstruction from globally ordered frames.
//!
//! Frames are first bucketed per channel by [`group_by_channel`]. Each bucket
//! is then folded through a fresh [`ChannelState`], which decides for every
//! frame whether it is kept or skipped, and the outcome is captured in a
//! [`ChannelReport`]. Buckets share no state, so they may be processed in any
//! order; the order of frames *within* a bucket decides the result.

pub mod grouper;
pub mod readiness;
pub mod reassembler;
pub mod report;
pub mod skip;
pub mod state;

pub use grouper::group_by_channel;
pub use readiness::is_ready;
pub use reassembler::{reassemble_all, reassemble_channel, reassemble_frames};
pub use report::ChannelReport;
pub use skip::{SkipReason, SkippedFrame};
pub use state::{ChannelState, FrameDisposition};
