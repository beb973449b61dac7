//! Order-preserving variable-length encoding for signed 64-bit integers.
//!
//! `lexi64` encodes `i64` values into 1–9 bytes such that the encoded bytes
//! compare lexicographically in the same order as the values compare
//! numerically, across the whole range — negatives sort before zero, zero
//! before positives.
//!
//! # Encoding
//!
//! The first bit is the complemented sign: `1` for non-negative, `0` for
//! negative, so every negative encoding sorts below every non-negative one.
//! After the sign bit the layout mirrors on both sides of zero: a unary run
//! announces the length (ones terminated by a zero for non-negatives, zeros
//! terminated by a one for negatives), and only the significant low-order
//! bits of the value are stored, big-endian. Leading zeros (positive) or
//! leading ones (negative two's complement) are implicit and restored on
//! decode:
//!
//! ```text
//! ┌──────────────────────┬───────┬────────────────────────────────────────┐
//! │ Value range          │ Bytes │ Layout (x = value bit)                 │
//! ├──────────────────────┼───────┼────────────────────────────────────────┤
//! │ [-2^63, -2^55 - 1]   │ 9     │ 00000000 0xxxxxxx + 7 bytes            │
//! │ [-2^55, -2^48 - 1]   │ 8     │ 00000000 1xxxxxxx + 6 bytes            │
//! │ [-2^48, -2^41 - 1]   │ 7     │ 00000001 + 6 bytes                     │
//! │ [-2^41, -2^34 - 1]   │ 6     │ 0000001x + 5 bytes                     │
//! │ [-2^34, -2^27 - 1]   │ 5     │ 000001xx + 4 bytes                     │
//! │ [-2^27, -2^20 - 1]   │ 4     │ 00001xxx + 3 bytes                     │
//! │ [-2^20, -2^13 - 1]   │ 3     │ 0001xxxx + 2 bytes                     │
//! │ [-2^13, -2^6 - 1]    │ 2     │ 001xxxxx + 1 byte                      │
//! │ [-2^6, -1]           │ 1     │ 01xxxxxx                               │
//! │ [0, 2^6 - 1]         │ 1     │ 10xxxxxx                               │
//! │ [2^6, 2^13 - 1]      │ 2     │ 110xxxxx + 1 byte                      │
//! │ [2^13, 2^20 - 1]     │ 3     │ 1110xxxx + 2 bytes                     │
//! │ [2^20, 2^27 - 1]     │ 4     │ 11110xxx + 3 bytes                     │
//! │ [2^27, 2^34 - 1]     │ 5     │ 111110xx + 4 bytes                     │
//! │ [2^34, 2^41 - 1]     │ 6     │ 1111110x + 5 bytes                     │
//! │ [2^41, 2^48 - 1]     │ 7     │ 11111110 + 6 bytes                     │
//! │ [2^48, 2^55 - 1]     │ 8     │ 11111111 0xxxxxxx + 6 bytes            │
//! │ [2^55, 2^63 - 1]     │ 9     │ 11111111 1xxxxxxx + 7 bytes            │
//! └──────────────────────┴───────┴────────────────────────────────────────┘
//! ```
//!
//! Every value is encoded in the shortest class that can carry its
//! significant bits, so `i64::MIN` is nine zero bytes and `i64::MAX` is
//! nine `0xFF` bytes — the extremes of the encoding space.
//!
//! # Ordering
//!
//! On the non-negative side, a longer encoding begins with strictly more
//! leading ones, so larger magnitudes sort after. On the negative side the
//! prefix is complemented: a longer encoding begins with strictly more
//! leading zeros, so larger magnitudes (more-negative values) sort before.
//! Within a class the stored bits are a big-endian two's-complement
//! fragment, which sorts numerically on both sides.
//!
//! # Examples
//!
//! ```
//! let mut neg = Vec::new();
//! let mut zero = Vec::new();
//! let mut pos = Vec::new();
//! lexi64::encode(-1, &mut neg);
//! lexi64::encode(0, &mut zero);
//! lexi64::encode(64, &mut pos);
//! assert_eq!(neg, [0x7F]);
//! assert_eq!(zero, [0x80]);
//! assert_eq!(pos, [0xC0, 0x40]);
//! assert!(neg < zero && zero < pos);
//!
//! let (value, len) = lexi64::decode(&pos).unwrap();
//! assert_eq!((value, len), (64, 2));
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[allow(unused_imports)] // vec! macro used in tests
use alloc::{vec, vec::Vec};

/// Maximum number of bytes a `lexi64` encoding can occupy.
pub const MAX_BYTES: usize = 9;

/// Computes the payload capacity, in bits, of the `n`-byte class.
///
/// Classes 1–8 gain 7 bits per byte on top of the 6 bits left in the first
/// byte by the sign and terminator; the 9-byte class carries a full 63 bits
/// (everything but the sign).
const fn payload_bits(n: usize) -> u32 {
    if n == MAX_BYTES {
        return 63;
    }
    6 + 7 * (n as u32 - 1)
}

/// Payload capacity per class, indexed by byte count (index 0 unused).
const CAPACITY: [u32; MAX_BYTES + 1] = [
    0,
    payload_bits(1),
    payload_bits(2),
    payload_bits(3),
    payload_bits(4),
    payload_bits(5),
    payload_bits(6),
    payload_bits(7),
    payload_bits(8),
    payload_bits(9),
];

/// Errors that can occur when decoding a `lexi64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input buffer is shorter than the encoding requires.
    BufferTooShort {
        /// Total bytes the encoding occupies, per its prefix.
        need: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// The first byte matches no length prefix.
    InvalidPrefix {
        /// The offending first byte.
        byte: u8,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooShort { need, have } => write!(
                f,
                "buffer too short for lexi64 encoding: need {need} bytes, have {have}"
            ),
            Self::InvalidPrefix { byte } => {
                write!(f, "first byte {byte:#04x} matches no lexi64 length prefix")
            }
        }
    }
}

impl core::error::Error for DecodeError {}

/// Returns the number of significant low-order bits of `value`: bits below
/// the sign extension that must be stored.
const fn significant_bits(value: i64) -> u32 {
    if value >= 0 {
        64 - value.leading_zeros()
    } else {
        64 - value.leading_ones()
    }
}

/// Returns the encoded length of `value` in bytes (1–9).
///
/// # Examples
///
/// ```
/// assert_eq!(lexi64::encoded_len(0), 1);
/// assert_eq!(lexi64::encoded_len(-64), 1);
/// assert_eq!(lexi64::encoded_len(64), 2);
/// assert_eq!(lexi64::encoded_len(i64::MIN), 9);
/// assert_eq!(lexi64::encoded_len(i64::MAX), 9);
/// ```
#[must_use]
pub const fn encoded_len(value: i64) -> usize {
    let bits = significant_bits(value);
    let mut n = 1;
    while n < MAX_BYTES {
        if bits <= CAPACITY[n] {
            return n;
        }
        n += 1;
    }
    MAX_BYTES
}

/// Encodes `value`, appending bytes to `buf`.
///
/// # Examples
///
/// ```
/// let mut buf = Vec::new();
/// lexi64::encode(-64, &mut buf);
/// assert_eq!(buf, [0x40]);
/// ```
pub fn encode(value: i64, buf: &mut Vec<u8>) {
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
/// let (bytes, len) = lexi64::encode_array(63);
/// assert_eq!(&bytes[..len], &[0xBF]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // each shift isolates one byte
pub const fn encode_array(value: i64) -> ([u8; MAX_BYTES], usize) {
    let mut out = [0u8; MAX_BYTES];
    let n = encoded_len(value);
    let raw = value as u64;

    if n == 8 {
        // Two-byte prefix: sign byte, then a marker bit opposite the sign.
        out[0] = if value >= 0 { 0xFF } else { 0x00 };
        out[1] = if value >= 0 {
            ((raw >> 48) & 0x7F) as u8
        } else {
            0x80 | ((raw >> 48) & 0x7F) as u8
        };
        let mut i = 0;
        while i < 6 {
            out[2 + i] = (raw >> ((5 - i) * 8)) as u8;
            i += 1;
        }
        return (out, 8);
    }

    if n == MAX_BYTES {
        out[0] = if value >= 0 { 0xFF } else { 0x00 };
        out[1] = if value >= 0 {
            0x80 | ((raw >> 56) & 0x7F) as u8
        } else {
            ((raw >> 56) & 0x7F) as u8
        };
        let mut i = 0;
        while i < 7 {
            out[2 + i] = (raw >> ((6 - i) * 8)) as u8;
            i += 1;
        }
        return (out, MAX_BYTES);
    }

    // Classes 1-7: sign bit, unary run, terminator, then value bits packed
    // big-endian across the span. The first byte keeps 7 - n value bits.
    let prefix = if value >= 0 {
        // n ones then a zero: 10, 110, ..., 11111110.
        !(0xFFu8 >> n)
    } else {
        // n zeros then a one: 01, 001, ..., 00000001.
        0x80 >> n
    };
    out[0] = prefix | ((raw >> ((n - 1) * 8)) & (0x7F >> n) as u64) as u8;
    let mut i = 1;
    while i < n {
        out[i] = (raw >> ((n - 1 - i) * 8)) as u8;
        i += 1;
    }

    (out, n)
}

/// Accumulates `count` big-endian payload bytes starting at `buf[from]`.
const fn be_payload(buf: &[u8], from: usize, count: usize) -> u64 {
    let mut value = 0u64;
    let mut i = 0;
    while i < count {
        value = (value << 8) | buf[from + i] as u64;
        i += 1;
    }
    value
}

/// Decodes a `lexi64` from the front of `buf`.
///
/// Returns `(value, bytes_consumed)` on success. Trailing bytes beyond the
/// encoding are ignored.
///
/// # Errors
///
/// - [`DecodeError::BufferTooShort`] if `buf` has fewer bytes than the
///   prefix announces.
/// - [`DecodeError::InvalidPrefix`] if the first byte matches no class.
///
/// # Examples
///
/// ```
/// let (v, n) = lexi64::decode(&[0x7F]).unwrap();
/// assert_eq!((v, n), (-1, 1));
/// ```
pub const fn decode(buf: &[u8]) -> Result<(i64, usize), DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::BufferTooShort { need: 1, have: 0 });
    }
    let first = buf[0];

    if first & 0x80 != 0 {
        decode_non_negative(buf, first)
    } else {
        decode_negative(buf, first)
    }
}

/// Decodes a class 1-7 encoding: strips the prefix from the first byte,
/// gathers the stored bits big-endian, and sign-extends when `negative`.
const fn decode_short(
    buf: &[u8],
    first: u8,
    n: usize,
    negative: bool,
) -> Result<(i64, usize), DecodeError> {
    if buf.len() < n {
        return Err(DecodeError::BufferTooShort {
            need: n,
            have: buf.len(),
        });
    }
    let head = (first & (0x7Fu8 >> n)) as u64;
    let bits = (head << ((n - 1) * 8)) | be_payload(buf, 1, n - 1);
    let value = if negative {
        (bits | (u64::MAX << CAPACITY[n])) as i64
    } else {
        bits as i64
    };
    Ok((value, n))
}

const fn decode_non_negative(buf: &[u8], first: u8) -> Result<(i64, usize), DecodeError> {
    if first & 0xC0 == 0x80 {
        decode_short(buf, first, 1, false)
    } else if first & 0xE0 == 0xC0 {
        decode_short(buf, first, 2, false)
    } else if first & 0xF0 == 0xE0 {
        decode_short(buf, first, 3, false)
    } else if first & 0xF8 == 0xF0 {
        decode_short(buf, first, 4, false)
    } else if first & 0xFC == 0xF8 {
        decode_short(buf, first, 5, false)
    } else if first & 0xFE == 0xFC {
        decode_short(buf, first, 6, false)
    } else if first == 0xFE {
        decode_short(buf, first, 7, false)
    } else if first == 0xFF {
        if buf.len() < 2 {
            return Err(DecodeError::BufferTooShort {
                need: 2,
                have: buf.len(),
            });
        }
        if buf[1] & 0x80 == 0 {
            // 8 bytes: marker 0, 55 payload bits.
            if buf.len() < 8 {
                return Err(DecodeError::BufferTooShort {
                    need: 8,
                    have: buf.len(),
                });
            }
            let bits = (((buf[1] & 0x7F) as u64) << 48) | be_payload(buf, 2, 6);
            Ok((bits as i64, 8))
        } else {
            // 9 bytes: marker 1, 63 payload bits.
            if buf.len() < 9 {
                return Err(DecodeError::BufferTooShort {
                    need: 9,
                    have: buf.len(),
                });
            }
            let bits = (((buf[1] & 0x7F) as u64) << 56) | be_payload(buf, 2, 7);
            Ok((bits as i64, 9))
        }
    } else {
        Err(DecodeError::InvalidPrefix { byte: first })
    }
}

const fn decode_negative(buf: &[u8], first: u8) -> Result<(i64, usize), DecodeError> {
    if first & 0xC0 == 0x40 {
        decode_short(buf, first, 1, true)
    } else if first & 0xE0 == 0x20 {
        decode_short(buf, first, 2, true)
    } else if first & 0xF0 == 0x10 {
        decode_short(buf, first, 3, true)
    } else if first & 0xF8 == 0x08 {
        decode_short(buf, first, 4, true)
    } else if first & 0xFC == 0x04 {
        decode_short(buf, first, 5, true)
    } else if first & 0xFE == 0x02 {
        decode_short(buf, first, 6, true)
    } else if first == 0x01 {
        decode_short(buf, first, 7, true)
    } else if first == 0x00 {
        if buf.len() < 2 {
            return Err(DecodeError::BufferTooShort {
                need: 2,
                have: buf.len(),
            });
        }
        if buf[1] & 0x80 != 0 {
            // 8 bytes: marker 1, 55 payload bits, sign-extended.
            if buf.len() < 8 {
                return Err(DecodeError::BufferTooShort {
                    need: 8,
                    have: buf.len(),
                });
            }
            let bits = (((buf[1] & 0x7F) as u64) << 48) | be_payload(buf, 2, 6);
            Ok(((bits | (u64::MAX << 55)) as i64, 8))
        } else {
            // 9 bytes: marker 0, 63 payload bits, sign-extended.
            if buf.len() < 9 {
                return Err(DecodeError::BufferTooShort {
                    need: 9,
                    have: buf.len(),
                });
            }
            let bits = (((buf[1] & 0x7F) as u64) << 56) | be_payload(buf, 2, 7);
            Ok(((bits | (1u64 << 63)) as i64, 9))
        }
    } else {
        Err(DecodeError::InvalidPrefix { byte: first })
    }
}

// ============================================================
// Tests
// ============================================================
