//! Base-128 continuation-bit varints (the protocol buffers layout).
//!
//! Seven value bits per byte, least-significant group first; a set high bit
//! means another byte follows:
//!
//! ```text
//! ┌──────────────┬───────┬─────────────────────────────────────┐
//! │ Value range  │ Bytes │ Layout                              │
//! ├──────────────┼───────┼─────────────────────────────────────┤
//! │ [0, 2^7)     │ 1     │ 0xxxxxxx                            │
//! │ [2^7, 2^14)  │ 2     │ 1xxxxxxx 0yyyyyyy                   │
//! │ [2^14, 2^21) │ 3     │ 1xxxxxxx 1yyyyyyy 0zzzzzzz          │
//! │ ...          │       │                                     │
//! │ [2^63, 2^64) │ 10    │ nine continuation bytes + 000000dd  │
//! └──────────────┴───────┴─────────────────────────────────────┘
//! ```
//!
//! Compact for small values, but *not* order-preserving — the low groups
//! come first. Use the ordered varint items for key material.

use crate::{
    error::DecodeError,
    item::Item,
};

/// Maximum encoded length of a `u64` varint.
pub const MAX_LEN: usize = 10;

/// Returns the encoded length of `value` in bytes (1–10).
#[must_use]
pub const fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros();
    if bits == 0 {
        1
    } else {
        (bits as usize).div_ceil(7)
    }
}

/// Writes the base-128 encoding of `value` into the front of `buf`,
/// returning the number of bytes written.
///
/// # Panics
///
/// Panics if `buf` is shorter than [`encoded_len`]`(value)`.
pub fn encode_into(mut value: u64, buf: &mut [u8]) -> usize {
    let mut at = 0;
    loop {
        #[allow(clippy::cast_possible_truncation)] // masked to 7 bits
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf[at] = byte;
            return at + 1;
        }
        buf[at] = byte | 0x80;
        at += 1;
    }
}

/// Decodes a varint from the front of `buf`, returning
/// `(value, bytes_consumed)`.
///
/// # Errors
///
/// - [`DecodeError::UnexpectedEof`] if the continuation chain runs past the
///   end of `buf`.
/// - [`DecodeError::VarintOverflow`] if the chain would exceed 64 bits
///   (more than ten bytes, or high bits set in the tenth).
pub fn decode(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().enumerate().take(MAX_LEN) {
        if i == MAX_LEN - 1 && byte > 0x01 {
            // The tenth byte may carry only the two remaining high bits.
            return Err(DecodeError::VarintOverflow { target: "u64" });
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::UnexpectedEof {
        need: buf.len() + 1,
        have: buf.len(),
    })
}

/// A `u64` bound to a plain varint field.
pub struct VarU64<'a>(&'a mut u64);

impl<'a> VarU64<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u64) -> Self {
        Self(v)
    }
}

impl Item for VarU64<'_> {
    fn size(&self) -> usize {
        encoded_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        encode_into(*self.0, buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let (value, _) = decode(buf)?;
        *self.0 = value;
        Ok(())
    }
}

/// A `u32` bound to a plain varint field. Decode rejects values above
/// `u32::MAX`.
pub struct VarU32<'a>(&'a mut u32);

impl<'a> VarU32<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u32) -> Self {
        Self(v)
    }
}

impl Item for VarU32<'_> {
    fn size(&self) -> usize {
        encoded_len(u64::from(*self.0))
    }

    fn encode(&self, buf: &mut [u8]) {
        encode_into(u64::from(*self.0), buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let (value, _) = decode(buf)?;
        *self.0 = u32::try_from(value).map_err(|_| DecodeError::VarintOverflow { target: "u32" })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn encode_vec(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_LEN];
        let n = encode_into(value, &mut buf);
        buf[..n].to_vec()
    }

    #[test]
    fn known_layouts() {
        // 300 = 0b10_0101100: low group 0101100, high group 10.
        assert_eq!(encode_vec(300), [0xAC, 0x02]);
        assert_eq!(encode_vec(0), [0x00]);
        assert_eq!(encode_vec(1), [0x01]);
        assert_eq!(encode_vec(127), [0x7F]);
        assert_eq!(encode_vec(128), [0x80, 0x01]);
        assert_eq!(
            encode_vec(u64::MAX),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );
    }

    #[test]
    fn round_trip_boundaries() {
        let mut values = alloc::vec![0u64, u64::MAX];
        for shift in 1..64 {
            values.push((1 << shift) - 1);
            values.push(1 << shift);
        }
        for value in values {
            let bytes = encode_vec(value);
            assert_eq!(bytes.len(), encoded_len(value), "length for {value}");
            let (decoded, consumed) = decode(&bytes).expect("decode failed");
            assert_eq!(decoded, value);
            assert_eq!(consumed, bytes.len());
        }
    }

    #[test]
    fn eof_on_dangling_continuation() {
        assert_eq!(
            decode(&[0x80]),
            Err(DecodeError::UnexpectedEof { need: 2, have: 1 })
        );
        assert_eq!(
            decode(&[]),
            Err(DecodeError::UnexpectedEof { need: 1, have: 0 })
        );
    }

    #[test]
    fn overflow_past_ten_bytes() {
        // Ten full continuation bytes followed by a terminator: too wide.
        let buf = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02,
        ];
        assert_eq!(
            decode(&buf),
            Err(DecodeError::VarintOverflow { target: "u64" })
        );
    }

    #[test]
    fn overflow_in_tenth_byte() {
        // Terminating tenth byte with more than the two spare bits set.
        let buf = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02,
        ];
        assert_eq!(
            decode(&buf),
            Err(DecodeError::VarintOverflow { target: "u64" })
        );
    }

    #[test]
    fn u32_item_rejects_wide_values() {
        let mut out = 0u32;
        let bytes = encode_vec(u64::from(u32::MAX) + 1);
        assert_eq!(
            VarU32::new(&mut out).decode(&bytes),
            Err(DecodeError::VarintOverflow { target: "u32" })
        );

        let bytes = encode_vec(u64::from(u32::MAX));
        VarU32::new(&mut out).decode(&bytes).expect("decode failed");
        assert_eq!(out, u32::MAX);
    }

    #[test]
    fn item_size_tracks_value() {
        let mut v = 0u64;
        assert_eq!(VarU64::new(&mut v).size(), 1);
        let mut v = 300u64;
        assert_eq!(VarU64::new(&mut v).size(), 2);
        let mut v = u64::MAX;
        assert_eq!(VarU64::new(&mut v).size(), 10);
    }

    #[cfg(feature = "bolero")]
    mod property {
        use super::*;

        #[test]
        #[cfg_attr(miri, ignore)]
        fn round_trip() {
            bolero::check!().with_arbitrary::<u64>().for_each(|&value| {
                let bytes = encode_vec(value);
                assert_eq!(bytes.len(), encoded_len(value));
                let (decoded, consumed) = decode(&bytes).expect("decode failed");
                assert_eq!(decoded, value);
                assert_eq!(consumed, bytes.len());
            });
        }

        #[test]
        #[cfg_attr(miri, ignore)]
        fn decode_never_panics() {
            bolero::check!()
                .with_arbitrary::<Vec<u8>>()
                .for_each(|buf| {
                    let _ = decode(buf);
                });
        }
    }
}
