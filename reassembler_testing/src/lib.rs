//! Shared fixtures for `channel-reassembler` integration tests.
//!
//! Provides terse builders for frames and channel buckets, helpers that lay
//! out a directory of persisted transaction records, and serialised access
//! to a global [`logtest::Logger`].
//!
//! ```rust
//! use reassembler_testing::{channel, sequence};
//!
//! let bucket = sequence(channel(1), &[(0, false), (1, true)]);
//! assert_eq!(bucket.len(), 2);
//! ```

pub mod frames;
pub mod logging;
pub mod records;

pub use frames::{channel, frame, numbers, sequence};
pub use logging::{LoggerHandle, logger};
pub use records::{INBOX, RecordDir, record, record_dir};
