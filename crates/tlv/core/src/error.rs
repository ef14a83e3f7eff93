//! Error types for TLV framing, encoding and decoding
//!
//! Each stage of the codec has its own error family so callers can tell a
//! corrupted response ([`FrameError`], [`DecodeError`]) apart from a command
//! that was built incorrectly ([`EncodeError`]). [`Error`] folds all three
//! together for code that chains parse and decode with `?`.

use crate::tag::Tag;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error while splitting a byte stream into records or framing a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Stream ended in the middle of a record
    #[error("TLV stream truncated")]
    Truncated,

    /// Value does not fit the two-byte extended length
    #[error("Value of {tag} is {len} bytes, exceeding the 0xFFFF frame limit")]
    ValueTooLong {
        /// Tag of the oversized record
        tag: Tag,
        /// Length of the rejected value
        len: usize,
    },
}

/// Error while turning record bytes into a typed value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Required tag is absent from the record list
    #[error("Missing required tag {0}")]
    MissingTag(Tag),

    /// Bytes are present but cannot be read as the tag's value type
    #[error("Malformed value for {tag}: {reason}")]
    Malformed {
        /// Tag whose value was rejected
        tag: Tag,
        /// What was wrong with the bytes
        reason: &'static str,
    },

    /// Decoded value cannot be represented by the requested Rust type
    #[error("Value of {tag} cannot be read as the requested type")]
    TypeMismatch {
        /// Tag whose value was requested
        tag: Tag,
    },
}

impl DecodeError {
    /// Create a new malformed-value error
    pub const fn malformed(tag: Tag, reason: &'static str) -> Self {
        Self::Malformed { tag, reason }
    }
}

/// Error while turning a typed value into record bytes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Value variant does not match the tag's declared value type
    #[error("Value does not match the declared type of {tag}")]
    TypeMismatch {
        /// Tag the value was supplied for
        tag: Tag,
    },

    /// Explicit boolean values cannot be encoded, only presence
    #[error("{tag} is a flag and is encoded by presence only")]
    Unsupported {
        /// Flag tag
        tag: Tag,
    },

    /// Value has the right variant but cannot be represented on the wire
    #[error("Invalid value for {tag}: {reason}")]
    InvalidValue {
        /// Tag the value was supplied for
        tag: Tag,
        /// What was wrong with the value
        reason: &'static str,
    },

    /// Encoded value cannot be framed
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Umbrella error for callers chaining several codec stages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Framing errors
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Decoding errors
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Encoding errors
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
