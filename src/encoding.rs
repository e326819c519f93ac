//! Hexadecimal text encoding for identifiers and opaque byte fields.
//!
//! Persisted records and channel reports render every byte field as hex so
//! they stay readable and diffable. This module provides the parsing helpers,
//! a `serde` adapter for variable-length byte fields and a macro that stamps
//! out fixed-width identifier newtypes.

use thiserror::Error;

/// Errors produced while parsing hex text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseHexError {
    /// The text contained a non-hex character or an odd number of digits.
    #[error("invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),
    /// The decoded value did not have the expected width.
    #[error("expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

fn strip_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Decode hex text, with or without a `0x` prefix, into a byte vector.
///
/// # Errors
///
/// Returns [`ParseHexError::Invalid`] when `text` is not valid hex.
pub fn decode(text: &str) -> Result<Vec<u8>, ParseHexError> {
    Ok(hex::decode(strip_prefix(text))?)
}

/// Decode hex text into an array of exactly `N` bytes.
///
/// # Errors
///
/// Returns [`ParseHexError::Invalid`] for malformed hex and
/// [`ParseHexError::InvalidLength`] when the decoded width differs from `N`.
pub fn decode_fixed<const N: usize>(text: &str) -> Result<[u8; N], ParseHexError> {
    let bytes = decode(text)?;
    let found = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseHexError::InvalidLength { expected: N, found })
}

/// Encode `bytes` as lowercase hex with a `0x` prefix.
#[must_use]
pub fn encode_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes.as_ref()))
}

/// `serde` adapter rendering byte buffers as `0x`-prefixed hex strings.
///
/// Use with `#[serde(with = "crate::encoding::prefixed")]` on any field whose type
/// is `AsRef<[u8]>` and can be built from a `Vec<u8>`.
pub mod prefixed {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Serialize `value` as a prefixed hex string.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying serializer.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&super::encode_prefixed(value))
    }

    /// Deserialize a hex string, with or without prefix, into bytes.
    ///
    /// # Errors
    ///
    /// Fails when the input is not a string or not valid hex.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::decode(&text).map(T::from).map_err(D::Error::custom)
    }

    /// The same adapter for optional fields.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

        /// Serialize `Some` as a prefixed hex string and `None` as null.
        ///
        /// # Errors
        ///
        /// Propagates errors from the underlying serializer.
        pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            T: AsRef<[u8]>,
            S: Serializer,
        {
            match value {
                Some(bytes) => serializer.serialize_some(&super::super::encode_prefixed(bytes)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize an optional hex string.
        ///
        /// # Errors
        ///
        /// Fails when a present value is not valid hex.
        pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            T: From<Vec<u8>>,
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|text| super::super::decode(&text).map(T::from))
                .transpose()
                .map_err(D::Error::custom)
        }
    }
}

/// Define a fixed-width identifier rendered as hex text.
///
/// The generated type is `Copy`, ordered, hashable, parses from hex with or
/// without a `0x` prefix, and serialises as a string using `$prefix`.
macro_rules! fixed_hex_type {
    ($(#[$meta:meta])* $name:ident, $len:literal, prefix = $prefix:literal) => {
        $(#[$meta])*
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
            ::derive_more::From,
            ::derive_more::Into,
        )]
        pub struct $name([u8; $len]);

        impl $name {
            /// Width of the identifier in bytes.
            pub const LEN: usize = $len;

            /// Wrap raw identifier bytes.
            #[must_use]
            pub const fn new(bytes: [u8; $len]) -> Self { Self(bytes) }

            /// Borrow the raw identifier bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] { &self.0 }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($prefix)?;
                f.write_str(&::hex::encode(self.0))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::encoding::ParseHexError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                $crate::encoding::decode_fixed(text).map(Self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fixed_hex_type;
