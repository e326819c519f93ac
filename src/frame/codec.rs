//! Binary layout of frames inside batcher transaction calldata.
//!
//! Calldata starts with a single derivation version byte followed by one or
//! more frames laid out back to back:
//!
//! ```text
//! channel_id[16] | frame_number: u16 BE | data_len: u32 BE | data | is_last: u8
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::{ChannelId, Frame, FrameDecodeError, FrameEncodeError, FrameNumber};

/// The only calldata version this decoder accepts.
pub const DERIVATION_VERSION_0: u8 = 0;

/// Upper bound on a single frame's payload.
pub const MAX_FRAME_LEN: usize = 1_000_000;

const FRAME_HEADER_LEN: usize = ChannelId::LEN + 2 + 4;

/// Split versioned calldata into frames.
///
/// # Examples
///
/// ```
/// use channel_reassembler::frame::{ChannelId, Frame, FrameNumber, encode_calldata, parse_frames};
/// let frame = Frame::new(ChannelId::new([1; 16]), FrameNumber::zero(), &b"hi"[..], true);
/// let calldata = encode_calldata([&frame]).expect("payload within limit");
/// assert_eq!(parse_frames(&calldata), Ok(vec![frame]));
/// ```
///
/// # Errors
///
/// Returns [`FrameDecodeError`] when the buffer is empty, carries an unknown
/// version, holds no frames, or any frame is truncated or malformed. A single
/// malformed frame invalidates the whole buffer.
pub fn parse_frames(calldata: &[u8]) -> Result<Vec<Frame>, FrameDecodeError> {
    let Some((&version, mut rest)) = calldata.split_first() else {
        return Err(FrameDecodeError::Empty);
    };
    if version != DERIVATION_VERSION_0 {
        return Err(FrameDecodeError::UnknownVersion(version));
    }

    let mut frames = Vec::new();
    while rest.has_remaining() {
        frames.push(Frame::decode(&mut rest)?);
    }
    if frames.is_empty() {
        return Err(FrameDecodeError::NoFrames);
    }
    Ok(frames)
}

/// Encode frames as versioned calldata, the inverse of [`parse_frames`].
///
/// # Errors
///
/// Returns [`FrameEncodeError::PayloadTooLarge`] if any frame payload exceeds
/// [`MAX_FRAME_LEN`].
pub fn encode_calldata<'a>(
    frames: impl IntoIterator<Item = &'a Frame>,
) -> Result<Bytes, FrameEncodeError> {
    let mut buf = BytesMut::new();
    buf.put_u8(DERIVATION_VERSION_0);
    for frame in frames {
        frame.encode(&mut buf)?;
    }
    Ok(buf.freeze())
}

impl Frame {
    /// Decode one frame from the front of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameDecodeError`] if the header or payload is truncated, the
    /// payload exceeds [`MAX_FRAME_LEN`], or the terminal byte is not 0 or 1.
    pub fn decode(buf: &mut impl Buf) -> Result<Self, FrameDecodeError> {
        if buf.remaining() < FRAME_HEADER_LEN {
            return Err(FrameDecodeError::TruncatedHeader {
                required: FRAME_HEADER_LEN,
                available: buf.remaining(),
            });
        }

        let mut id = [0_u8; ChannelId::LEN];
        buf.copy_to_slice(&mut id);
        let frame_number = FrameNumber::new(buf.get_u16());
        let data_len = usize::try_from(buf.get_u32()).unwrap_or(usize::MAX);
        if data_len > MAX_FRAME_LEN {
            return Err(FrameDecodeError::FrameTooLarge {
                len: data_len,
                max: MAX_FRAME_LEN,
            });
        }
        // The terminal marker trails the payload.
        if buf.remaining() <= data_len {
            return Err(FrameDecodeError::TruncatedPayload {
                declared: data_len,
                available: buf.remaining(),
            });
        }

        let data = buf.copy_to_bytes(data_len);
        let is_last = match buf.get_u8() {
            0 => false,
            1 => true,
            other => return Err(FrameDecodeError::InvalidLastFlag(other)),
        };

        Ok(Self::new(ChannelId::new(id), frame_number, data, is_last))
    }

    /// Append the binary form of this frame to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEncodeError::PayloadTooLarge`] without writing anything
    /// if the payload exceeds [`MAX_FRAME_LEN`].
    pub fn encode(&self, buf: &mut impl BufMut) -> Result<(), FrameEncodeError> {
        let len = self.data().len();
        let data_len = u32::try_from(len)
            .ok()
            .filter(|_| len <= MAX_FRAME_LEN)
            .ok_or(FrameEncodeError::PayloadTooLarge {
                len,
                max: MAX_FRAME_LEN,
            })?;
        buf.put_slice(self.channel_id().as_bytes());
        buf.put_u16(self.frame_number().get());
        buf.put_u32(data_len);
        buf.put_slice(self.data());
        buf.put_u8(u8::from(self.is_last()));
        Ok(())
    }

    /// Size of the binary form produced by [`Frame::encode`].
    #[must_use]
    pub fn encoded_len(&self) -> usize { FRAME_HEADER_LEN + self.data().len() + 1 }
}
