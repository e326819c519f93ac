//! Errors raised while moving frames in and out of transaction calldata.

use thiserror::Error;

/// Reasons a calldata buffer could not be split into frames.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FrameDecodeError {
    /// The buffer did not even hold a version byte.
    #[error("calldata is empty")]
    Empty,
    /// The leading version byte is not one this decoder understands.
    #[error("unsupported derivation version {0:#04x}")]
    UnknownVersion(u8),
    /// The version byte was not followed by any frame.
    #[error("calldata carries no frames")]
    NoFrames,
    /// Fewer bytes remained than a frame header needs.
    #[error("truncated frame header: need {required} bytes, found {available}")]
    TruncatedHeader { required: usize, available: usize },
    /// The declared payload length exceeds the protocol maximum.
    #[error("frame payload of {len} bytes exceeds maximum {max}")]
    FrameTooLarge { len: usize, max: usize },
    /// The payload or trailing terminal byte was cut short.
    #[error("truncated frame payload: declared {declared} bytes, found {available}")]
    TruncatedPayload { declared: usize, available: usize },
    /// The terminal marker byte was neither 0 nor 1.
    #[error("invalid terminal marker {0:#04x}")]
    InvalidLastFlag(u8),
}

/// Errors produced while encoding frames into calldata.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FrameEncodeError {
    /// The payload is longer than a frame may carry.
    #[error("frame payload of {len} bytes exceeds maximum {max}")]
    PayloadTooLarge { len: usize, max: usize },
}
