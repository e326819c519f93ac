use crate::encoding::fixed_hex_type;

fixed_hex_type!(
    /// Opaque identifier shared by every frame of one channel.
    ///
    /// Renders as 32 lowercase hex digits without a prefix, which is also the
    /// stem of the report file written for the channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use channel_reassembler::frame::ChannelId;
    /// let id = ChannelId::new([0xab; 16]);
    /// assert_eq!(id.to_string(), "ab".repeat(16));
    /// assert_eq!(id.to_string().parse::<ChannelId>(), Ok(id));
    /// ```
    ChannelId,
    16,
    prefix = ""
);
