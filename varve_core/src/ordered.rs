//! Order-preserving varint items, backed by the `lexu64` and `lexi64`
//! codecs.
//!
//! Both are self-delimiting, 1–9 bytes, and sort bytewise in numeric
//! order, which is what makes them usable inside a
//! [`Tuple`](crate::tuple::Tuple). See the codec crates for the exact
//! layouts.

use crate::{
    error::DecodeError,
    item::{Item, OrderedItem},
};

/// A `u64` bound to an order-preserving varint field.
pub struct OrdU64<'a>(&'a mut u64);

impl<'a> OrdU64<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u64) -> Self {
        Self(v)
    }
}

impl Item for OrdU64<'_> {
    fn size(&self) -> usize {
        lexu64::encoded_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        let (bytes, len) = lexu64::encode_array(*self.0);
        buf[..len].copy_from_slice(&bytes[..len]);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        match lexu64::decode(buf) {
            Ok((value, _)) => {
                *self.0 = value;
                Ok(())
            }
            Err(lexu64::DecodeError::BufferTooShort { need, have }) => {
                Err(DecodeError::UnexpectedEof { need, have })
            }
        }
    }
}

impl OrderedItem for OrdU64<'_> {}

/// An `i64` bound to an order-preserving varint field. Negative values
/// sort before zero and positives.
pub struct OrdI64<'a>(&'a mut i64);

impl<'a> OrdI64<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut i64) -> Self {
        Self(v)
    }
}

impl Item for OrdI64<'_> {
    fn size(&self) -> usize {
        lexi64::encoded_len(*self.0)
    }

    fn encode(&self, buf: &mut [u8]) {
        let (bytes, len) = lexi64::encode_array(*self.0);
        buf[..len].copy_from_slice(&bytes[..len]);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        match lexi64::decode(buf) {
            Ok((value, _)) => {
                *self.0 = value;
                Ok(())
            }
            Err(lexi64::DecodeError::BufferTooShort { need, have }) => {
                Err(DecodeError::UnexpectedEof { need, have })
            }
            Err(lexi64::DecodeError::InvalidPrefix { byte }) => {
                Err(DecodeError::InvalidVarint { byte })
            }
        }
    }
}

impl OrderedItem for OrdI64<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn ord_u64_round_trip() {
        for value in [0u64, 127, 128, 1 << 20, 1 << 56, u64::MAX] {
            let mut v = value;
            let item = OrdU64::new(&mut v);
            let mut buf = vec![0u8; item.size()];
            item.encode(&mut buf);

            let mut out = 0u64;
            OrdU64::new(&mut out).decode(&buf).expect("decode failed");
            assert_eq!(out, value);
        }
    }

    #[test]
    fn ord_i64_round_trip() {
        for value in [i64::MIN, -(1 << 40), -64, -1, 0, 63, 1 << 40, i64::MAX] {
            let mut v = value;
            let item = OrdI64::new(&mut v);
            let mut buf = vec![0u8; item.size()];
            item.encode(&mut buf);

            let mut out = 0i64;
            OrdI64::new(&mut out).decode(&buf).expect("decode failed");
            assert_eq!(out, value);
        }
    }

    #[test]
    fn known_bytes() {
        let encode_u = |mut v: u64| {
            let item = OrdU64::new(&mut v);
            let mut buf = vec![0u8; item.size()];
            item.encode(&mut buf);
            buf
        };
        let encode_i = |mut v: i64| {
            let item = OrdI64::new(&mut v);
            let mut buf = vec![0u8; item.size()];
            item.encode(&mut buf);
            buf
        };

        assert_eq!(encode_u(0), [0x00]);
        assert_eq!(encode_u(127), [0x7F]);
        assert_eq!(encode_u(128), [0x80, 0x80]);
        assert_eq!(
            encode_u(1 << 63),
            [0xFF, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(encode_u(u64::MAX), [0xFF; 9]);

        assert_eq!(encode_i(0), [0x80]);
        assert_eq!(encode_i(-1), [0x7F]);
        assert_eq!(encode_i(63), [0xBF]);
        assert_eq!(encode_i(-64), [0x40]);
        assert_eq!(encode_i(64), [0xC0, 0x40]);
    }

    #[test]
    fn eof_maps_through() {
        let mut out = 0u64;
        assert_eq!(
            OrdU64::new(&mut out).decode(&[0x80]),
            Err(DecodeError::UnexpectedEof { need: 2, have: 1 })
        );

        let mut out = 0i64;
        assert_eq!(
            OrdI64::new(&mut out).decode(&[]),
            Err(DecodeError::UnexpectedEof { need: 1, have: 0 })
        );
    }

    #[test]
    fn size_never_exceeds_nine() {
        let mut widths: Vec<u64> = (0..64).map(|s| 1u64 << s).collect();
        widths.push(u64::MAX);
        for value in widths {
            let mut v = value;
            assert!(OrdU64::new(&mut v).size() <= 9);
        }
    }
}
