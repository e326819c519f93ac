//! Human-readable renderings of errors and skip reasons.

use std::{io, path::PathBuf};

use channel_reassembler::{
    IngestError,
    OutputError,
    ReassembleError,
    SkipReason,
    frame::{FrameDecodeError, FrameEncodeError},
};
use rstest::rstest;

#[rstest]
#[case(FrameDecodeError::Empty, "calldata is empty")]
#[case(FrameDecodeError::UnknownVersion(1), "unsupported derivation version 0x01")]
#[case(FrameDecodeError::NoFrames, "calldata carries no frames")]
#[case(
    FrameDecodeError::TruncatedHeader { required: 22, available: 5 },
    "truncated frame header: need 22 bytes, found 5"
)]
#[case(
    FrameDecodeError::FrameTooLarge { len: 1_000_001, max: 1_000_000 },
    "frame payload of 1000001 bytes exceeds maximum 1000000"
)]
#[case(
    FrameDecodeError::TruncatedPayload { declared: 8, available: 3 },
    "truncated frame payload: declared 8 bytes, found 3"
)]
#[case(FrameDecodeError::InvalidLastFlag(2), "invalid terminal marker 0x02")]
fn frame_decode_errors_render(#[case] error: FrameDecodeError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn frame_encode_error_renders() {
    let error = FrameEncodeError::PayloadTooLarge { len: 7, max: 4 };
    assert_eq!(error.to_string(), "frame payload of 7 bytes exceeds maximum 4");
}

#[rstest]
#[case(SkipReason::DuplicateClose, "channel already closed", "duplicate_close")]
#[case(SkipReason::DuplicateFrameNumber, "duplicate frame number", "duplicate_frame_number")]
#[case(SkipReason::PastChannelEnd, "frame past the end of the channel", "past_channel_end")]
#[case(SkipReason::Pruned, "pruned beyond the end of the channel", "pruned")]
fn skip_reasons_render(#[case] reason: SkipReason, #[case] message: &str, #[case] label: &str) {
    assert_eq!(reason.to_string(), message);
    assert_eq!(reason.as_str(), label);
}

#[test]
fn ingest_errors_name_the_file() {
    let error = IngestError::Frames {
        path: PathBuf::from("records/tx.json"),
        source: FrameDecodeError::NoFrames,
    };
    assert_eq!(
        error.to_string(),
        "failed to parse frames of records/tx.json: calldata carries no frames"
    );
}

#[test]
fn top_level_errors_are_transparent() {
    let inner = OutputError::CreateDir {
        path: PathBuf::from("/out"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    let expected = inner.to_string();
    let error = ReassembleError::from(inner);

    assert_eq!(error.to_string(), expected);
    assert_eq!(expected, "failed to create output directory /out: denied");
}
