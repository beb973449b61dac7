//! Order-preserving variable-length encoding for unsigned 64-bit integers.
//!
//! `lexu64` encodes `u64` values into 1–9 bytes such that the encoded bytes
//! compare lexicographically in the same order as the values compare
//! numerically. Like UTF-8, the length of an encoding is announced by a run
//! of leading one bits in the first byte, so decoding needs no external
//! length tag.
//!
//! # Encoding
//!
//! Let `L` be the bit length of the value (`L = 0` for zero). Values with
//! `L <= 56` occupy `1 + (L - 1) / 7` bytes; larger values occupy 9. The
//! first byte carries a unary run of `n - 1` ones terminated by a zero
//! (for `n <= 8`), and the value's significant bits are laid out big-endian
//! in the remaining bit positions:
//!
//! ```text
//! ┌─────────────────┬───────┬──────────────────────────────────────────┐
//! │ Value range     │ Bytes │ Layout (x = value bit)                   │
//! ├─────────────────┼───────┼──────────────────────────────────────────┤
//! │ [0, 2^7)        │ 1     │ 0xxxxxxx                                 │
//! │ [2^7, 2^14)     │ 2     │ 10xxxxxx xxxxxxxx                        │
//! │ [2^14, 2^21)    │ 3     │ 110xxxxx xxxxxxxx xxxxxxxx               │
//! │ [2^21, 2^28)    │ 4     │ 1110xxxx + 3 bytes                       │
//! │ [2^28, 2^35)    │ 5     │ 11110xxx + 4 bytes                       │
//! │ [2^35, 2^42)    │ 6     │ 111110xx + 5 bytes                       │
//! │ [2^42, 2^49)    │ 7     │ 1111110x + 6 bytes                       │
//! │ [2^49, 2^56)    │ 8     │ 11111110 + 7 bytes                       │
//! │ [2^56, 2^64)    │ 9     │ 11111111 + 8 bytes (full big-endian u64) │
//! └─────────────────┴───────┴──────────────────────────────────────────┘
//! ```
//!
//! # Ordering
//!
//! A longer encoding always begins with strictly more leading ones than a
//! shorter one, so any shorter encoding (of a necessarily smaller value)
//! sorts first. Within one length class the prefix bits are equal and the
//! remaining bits are a big-endian magnitude, which sorts numerically.
//! Together: for any `a < b`, `encode(a) < encode(b)` bytewise.
//!
//! Compared to the common base-128 continuation-bit varint, this layout
//! also spends one *fewer* byte on values of 2^63 and above.
//!
//! # Examples
//!
//! ```
//! let mut buf = Vec::new();
//! lexu64::encode(128, &mut buf);
//! assert_eq!(buf, [0x80, 0x80]);
//!
//! let (value, len) = lexu64::decode(&buf).unwrap();
//! assert_eq!(value, 128);
//! assert_eq!(len, 2);
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[allow(unused_imports)] // vec! macro used in tests
use alloc::{vec, vec::Vec};

/// Maximum number of bytes a `lexu64` encoding can occupy.
pub const MAX_BYTES: usize = 9;

/// Bit lengths above this force the 9-byte form (`0xFF` + full big-endian).
const MAX_PREFIXED_BITS: u32 = 56;

/// Errors that can occur when decoding a `lexu64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input buffer is shorter than the encoding requires.
    BufferTooShort {
        /// Total bytes the encoding occupies, per its first byte.
        need: usize,
        /// Bytes actually available.
        have: usize,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooShort { need, have } => write!(
                f,
                "buffer too short for lexu64 encoding: need {need} bytes, have {have}"
            ),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Returns the encoded length of `value` in bytes (1–9).
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::encoded_len(0), 1);
/// assert_eq!(lexu64::encoded_len(127), 1);
/// assert_eq!(lexu64::encoded_len(128), 2);
/// assert_eq!(lexu64::encoded_len(1 << 56), 9);
/// assert_eq!(lexu64::encoded_len(u64::MAX), 9);
/// ```
#[must_use]
pub const fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros();
    if bits > MAX_PREFIXED_BITS {
        return MAX_BYTES;
    }
    if bits == 0 {
        return 1;
    }
    1 + (bits as usize - 1) / 7
}

/// Encodes `value`, appending bytes to `buf`.
///
/// # Examples
///
/// ```
/// let mut buf = Vec::new();
/// lexu64::encode(0, &mut buf);
/// assert_eq!(buf, [0x00]);
///
/// buf.clear();
/// lexu64::encode(1 << 63, &mut buf);
/// assert_eq!(buf[0], 0xFF);
/// assert_eq!(buf.len(), 9);
/// ```
pub fn encode(value: u64, buf: &mut Vec<u8>) {
    let (bytes, len) = encode_array(value);
    buf.extend_from_slice(&bytes[..len]);
}

/// Encodes `value` into a fixed-size array.
///
/// Returns `(bytes, len)` where `bytes` is a 9-byte array with the encoding
/// in `bytes[..len]`.
///
/// # Examples
///
/// ```
/// let (bytes, len) = lexu64::encode_array(128);
/// assert_eq!(&bytes[..len], &[0x80, 0x80]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // each shift isolates one byte
pub const fn encode_array(value: u64) -> ([u8; MAX_BYTES], usize) {
    let mut out = [0u8; MAX_BYTES];

    let n = encoded_len(value);
    if n == MAX_BYTES {
        out[0] = 0xFF;
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            out[1 + i] = be[i];
            i += 1;
        }
        return (out, MAX_BYTES);
    }

    // Unary run of n - 1 ones, then a zero, in the high bits of byte 0.
    let ones = n - 1;
    out[0] = (((1u16 << ones) - 1) << (8 - ones)) as u8;

    // Value bits, big-endian across the whole n-byte span. The prefix and
    // the value never collide: the value's bit length fits under the prefix.
    let mut i = 0;
    while i < n {
        out[i] |= (value >> ((n - 1 - i) * 8)) as u8;
        i += 1;
    }

    (out, n)
}

/// Decodes a `lexu64` from the front of `buf`.
///
/// Returns `(value, bytes_consumed)` on success. Trailing bytes beyond the
/// encoding are ignored.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if `buf` has fewer bytes than the
/// first byte's prefix announces.
///
/// # Examples
///
/// ```
/// let (v, n) = lexu64::decode(&[0x7F]).unwrap();
/// assert_eq!((v, n), (127, 1));
///
/// // Trailing data is left alone.
/// let (v, n) = lexu64::decode(&[0x80, 0x80, 0xDE, 0xAD]).unwrap();
/// assert_eq!((v, n), (128, 2));
/// ```
pub const fn decode(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::BufferTooShort { need: 1, have: 0 });
    }

    let first = buf[0];
    let ones = first.leading_ones() as usize;

    if ones == 8 {
        // 0xFF: the value is the next 8 bytes, big-endian.
        if buf.len() < MAX_BYTES {
            return Err(DecodeError::BufferTooShort {
                need: MAX_BYTES,
                have: buf.len(),
            });
        }
        let mut value = 0u64;
        let mut i = 1;
        while i < MAX_BYTES {
            value = (value << 8) | buf[i] as u64;
            i += 1;
        }
        return Ok((value, MAX_BYTES));
    }

    let n = ones + 1;
    if buf.len() < n {
        return Err(DecodeError::BufferTooShort {
            need: n,
            have: buf.len(),
        });
    }

    // Low 8 - ones - 1 bits of the first byte, then the rest big-endian.
    let mut value = (first & (0x7F >> ones)) as u64;
    let mut i = 1;
    while i < n {
        value = (value << 8) | buf[i] as u64;
        i += 1;
    }

    Ok((value, n))
}

// ============================================================
// Tests
// ============================================================
