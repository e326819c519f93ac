//! Tests for frame identifiers, serialisation and the calldata codec.

use bytes::{BufMut, BytesMut};
use rstest::rstest;

use super::*;

fn frame(number: u16, data: &'static [u8], is_last: bool) -> Frame {
    Frame::new(ChannelId::new([0x11; 16]), FrameNumber::new(number), data, is_last)
}

#[test]
fn channel_id_renders_without_prefix() {
    let mut bytes = [0_u8; 16];
    bytes[15] = 0xff;
    let id = ChannelId::new(bytes);
    assert_eq!(id.to_string(), format!("{}ff", "00".repeat(15)));
}

#[test]
fn tx_hash_renders_with_prefix_and_parses_back() {
    let hash = TxHash::new([0xcd; 32]);
    let text = hash.to_string();
    assert!(text.starts_with("0x"));
    assert_eq!(text.len(), 66);
    assert_eq!(text.parse::<TxHash>(), Ok(hash));
}

#[test]
fn channel_id_rejects_short_input() {
    assert!("0xabcd".parse::<ChannelId>().is_err());
}

#[test]
fn frame_json_uses_hex_fields() {
    let with_meta = FrameWithMetadata::new(TxHash::new([1; 32]), 7, 2, frame(3, b"\x0a\x0b", true));
    let value = serde_json::to_value(&with_meta).expect("serialise frame");

    assert_eq!(value["transaction_hash"], format!("0x{}", "01".repeat(32)));
    assert_eq!(value["inclusion_block"], 7);
    assert_eq!(value["transaction_index"], 2);
    assert_eq!(value["frame"]["id"], "11".repeat(16));
    assert_eq!(value["frame"]["frame_number"], 3);
    assert_eq!(value["frame"]["data"], "0x0a0b");
    assert_eq!(value["frame"]["is_last"], true);

    let decoded: FrameWithMetadata = serde_json::from_value(value).expect("deserialise frame");
    assert_eq!(decoded, with_meta);
}

#[test]
fn frame_json_without_transaction_index_defaults_to_zero() {
    let json = serde_json::json!({
        "transaction_hash": format!("0x{}", "00".repeat(32)),
        "inclusion_block": 1,
        "frame": { "id": "22".repeat(16), "frame_number": 0, "data": "0x", "is_last": false },
    });
    let decoded: FrameWithMetadata = serde_json::from_value(json).expect("deserialise frame");
    assert_eq!(decoded.transaction_index(), 0);
    assert!(decoded.frame().data().is_empty());
}

#[test]
fn parse_frames_reads_consecutive_frames() {
    let frames = vec![frame(0, b"abc", false), frame(1, b"", true)];
    let calldata = encode_calldata(&frames).expect("encode calldata");
    assert_eq!(
        calldata.len(),
        1 + frames.iter().map(Frame::encoded_len).sum::<usize>()
    );
    assert_eq!(parse_frames(&calldata), Ok(frames));
}

#[rstest]
#[case(&[], FrameDecodeError::Empty)]
#[case(&[1, 0, 0], FrameDecodeError::UnknownVersion(1))]
#[case(&[DERIVATION_VERSION_0], FrameDecodeError::NoFrames)]
#[case(&[DERIVATION_VERSION_0, 0xaa, 0xbb], FrameDecodeError::TruncatedHeader { required: 22, available: 2 })]
fn parse_frames_rejects_malformed_envelopes(
    #[case] calldata: &[u8],
    #[case] expected: FrameDecodeError,
) {
    assert_eq!(parse_frames(calldata), Err(expected));
}

fn header(buf: &mut BytesMut, data_len: u32) {
    buf.put_u8(DERIVATION_VERSION_0);
    buf.put_slice(&[0x33; 16]);
    buf.put_u16(4);
    buf.put_u32(data_len);
}

#[test]
fn parse_frames_rejects_truncated_payload() {
    let mut buf = BytesMut::new();
    header(&mut buf, 3);
    buf.put_slice(b"ab");
    assert_eq!(
        parse_frames(&buf),
        Err(FrameDecodeError::TruncatedPayload {
            declared: 3,
            available: 2
        })
    );
}

#[test]
fn parse_frames_rejects_missing_terminal_byte() {
    let mut buf = BytesMut::new();
    header(&mut buf, 2);
    buf.put_slice(b"ab");
    assert!(matches!(
        parse_frames(&buf),
        Err(FrameDecodeError::TruncatedPayload { declared: 2, .. })
    ));
}

#[test]
fn parse_frames_rejects_oversized_frame() {
    let mut buf = BytesMut::new();
    header(&mut buf, u32::try_from(MAX_FRAME_LEN + 1).expect("fits in u32"));
    assert_eq!(
        parse_frames(&buf),
        Err(FrameDecodeError::FrameTooLarge {
            len: MAX_FRAME_LEN + 1,
            max: MAX_FRAME_LEN
        })
    );
}

#[test]
fn parse_frames_rejects_invalid_terminal_marker() {
    let mut buf = BytesMut::new();
    header(&mut buf, 1);
    buf.put_slice(b"a");
    buf.put_u8(2);
    assert_eq!(parse_frames(&buf), Err(FrameDecodeError::InvalidLastFlag(2)));
}

#[test]
fn encode_rejects_oversized_payload() {
    let oversized = Frame::new(
        ChannelId::default(),
        FrameNumber::zero(),
        vec![0_u8; MAX_FRAME_LEN + 1],
        true,
    );
    let mut buf = BytesMut::new();
    assert_eq!(
        oversized.encode(&mut buf),
        Err(FrameEncodeError::PayloadTooLarge {
            len: MAX_FRAME_LEN + 1,
            max: MAX_FRAME_LEN
        })
    );
    assert!(buf.is_empty());
}
