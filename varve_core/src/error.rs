//! Error types for record decoding.

use thiserror::Error;

/// Errors that can occur while decoding a record.
///
/// A decode error aborts the enclosing item chain immediately: value
/// locations decoded before the failing item keep their new contents, later
/// ones are untouched, and no rollback is attempted. Callers should treat
/// every bound value as unspecified after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ran out before an item's encoding was complete.
    #[error("unexpected end of input: need {need} bytes, have {have}")]
    UnexpectedEof {
        /// Bytes the item needed from its offset.
        need: usize,
        /// Bytes actually available from its offset.
        have: usize,
    },

    /// A base-128 varint would not fit its target integer width.
    #[error("varint overflows {target}")]
    VarintOverflow {
        /// Name of the integer type being decoded.
        target: &'static str,
    },

    /// An order-preserving varint first byte matches no length prefix.
    #[error("invalid varint: first byte {byte:#04x} matches no length prefix")]
    InvalidVarint {
        /// The offending first byte.
        byte: u8,
    },

    /// A bool byte was neither `0x00` nor `0x01`.
    #[error("invalid bool byte {byte:#04x}: must be 0x00 or 0x01")]
    InvalidBool {
        /// The offending byte.
        byte: u8,
    },

    /// A bitpacked region did not consume exactly its declared bit count.
    #[error("bitpacked region consumed {consumed} bits of {declared} declared")]
    UnconsumedBits {
        /// Bits the region's items actually consumed.
        consumed: usize,
        /// Bits the region declares in total.
        declared: usize,
    },

    /// A length-delimited string payload is not valid UTF-8.
    #[error("length-delimited payload is not valid UTF-8")]
    InvalidUtf8(#[from] core::str::Utf8Error),
}
