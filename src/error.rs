//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
///
/// Every error is raised at the point of detection and propagates
/// synchronously to the caller; nothing in this crate retries or
/// suppresses a failure. A failed decode leaves its cursor at an
/// unspecified position.
#[derive(Error, Debug)]
pub enum Error {
    /// A value cannot be represented in the target format (encode) or
    /// the underlying bytes cannot be reinterpreted as the target
    /// type (decode).
    #[error("malformed value in {codec}: {message}")]
    MalformedValue {
        codec: &'static str,
        message: String,
    },
    /// Decode requested more bytes than the buffer still holds.
    #[error("buffer underrun in {codec}: requested {requested} bytes, {available} available")]
    BufferUnderrun {
        codec: &'static str,
        requested: usize,
        available: usize,
    },
    /// A schema was asked to encode an item whose value count differs
    /// from its field count.
    #[error("item has {actual} values but schema has {expected} fields")]
    ArityMismatch { expected: usize, actual: usize },
    /// An unsigned varint encoding would exceed 32 bits.
    #[error("unsigned varint exceeds 32 bits")]
    VarintOverflow,
}

impl Error {
    pub(crate) fn malformed(codec: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedValue {
            codec,
            message: message.into(),
        }
    }
}
