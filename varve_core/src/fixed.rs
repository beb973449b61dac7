//! Fixed-width primitives: padding, raw bytes, bools, big-endian integers,
//! and fixed-length byte arrays.
//!
//! The big-endian integers and the verbatim byte copies are
//! order-preserving, so they double as tuple items. [`Padding`] is not: it
//! contributes no discriminating bytes.

use crate::{
    error::DecodeError,
    item::{Item, OrderedItem},
};

/// Skips `n` bytes. Encode writes nothing (the record buffer is pre-zeroed);
/// decode only checks that enough bytes remain.
pub struct Padding(usize);

impl Padding {
    /// A padding of `n` bytes.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self(n)
    }
}

impl Item for Padding {
    fn size(&self) -> usize {
        self.0
    }

    fn encode(&self, _buf: &mut [u8]) {}

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        if buf.len() < self.0 {
            return Err(DecodeError::UnexpectedEof {
                need: self.0,
                have: buf.len(),
            });
        }
        Ok(())
    }
}

/// A single raw byte.
pub struct U8<'a>(&'a mut u8);

impl<'a> U8<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u8) -> Self {
        Self(v)
    }
}

impl Item for U8<'_> {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = *self.0;
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let byte = buf
            .first()
            .ok_or(DecodeError::UnexpectedEof { need: 1, have: 0 })?;
        *self.0 = *byte;
        Ok(())
    }
}

impl OrderedItem for U8<'_> {}

/// One byte holding `0x01` (true) or `0x00` (false). Decode rejects every
/// other byte.
pub struct BoolByte<'a>(&'a mut bool);

impl<'a> BoolByte<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut bool) -> Self {
        Self(v)
    }
}

impl Item for BoolByte<'_> {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = u8::from(*self.0);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let byte = *buf
            .first()
            .ok_or(DecodeError::UnexpectedEof { need: 1, have: 0 })?;
        *self.0 = match byte {
            0 => false,
            1 => true,
            _ => return Err(DecodeError::InvalidBool { byte }),
        };
        Ok(())
    }
}

impl OrderedItem for BoolByte<'_> {}

/// A `u16` in big-endian order, 2 bytes.
pub struct BeU16<'a>(&'a mut u16);

impl<'a> BeU16<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u16) -> Self {
        Self(v)
    }
}

impl Item for BeU16<'_> {
    fn size(&self) -> usize {
        2
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[..2].copy_from_slice(&self.0.to_be_bytes());
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let bytes: [u8; 2] = buf
            .get(..2)
            .and_then(|s| s.try_into().ok())
            .ok_or(DecodeError::UnexpectedEof {
                need: 2,
                have: buf.len(),
            })?;
        *self.0 = u16::from_be_bytes(bytes);
        Ok(())
    }
}

impl OrderedItem for BeU16<'_> {}

/// A `u32` in big-endian order, 4 bytes.
pub struct BeU32<'a>(&'a mut u32);

impl<'a> BeU32<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u32) -> Self {
        Self(v)
    }
}

impl Item for BeU32<'_> {
    fn size(&self) -> usize {
        4
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[..4].copy_from_slice(&self.0.to_be_bytes());
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let bytes: [u8; 4] = buf
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or(DecodeError::UnexpectedEof {
                need: 4,
                have: buf.len(),
            })?;
        *self.0 = u32::from_be_bytes(bytes);
        Ok(())
    }
}

impl OrderedItem for BeU32<'_> {}

/// A `u64` in big-endian order, 8 bytes.
pub struct BeU64<'a>(&'a mut u64);

impl<'a> BeU64<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut u64) -> Self {
        Self(v)
    }
}

impl Item for BeU64<'_> {
    fn size(&self) -> usize {
        8
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[..8].copy_from_slice(&self.0.to_be_bytes());
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let bytes: [u8; 8] = buf
            .get(..8)
            .and_then(|s| s.try_into().ok())
            .ok_or(DecodeError::UnexpectedEof {
                need: 8,
                have: buf.len(),
            })?;
        *self.0 = u64::from_be_bytes(bytes);
        Ok(())
    }
}

impl OrderedItem for BeU64<'_> {}

/// A fixed-length byte array copied verbatim.
pub struct FixedBytes<'a, const N: usize>(&'a mut [u8; N]);

/// A 16-byte array item.
pub type Bytes16<'a> = FixedBytes<'a, 16>;

/// A 32-byte array item.
pub type Bytes32<'a> = FixedBytes<'a, 32>;

impl<'a, const N: usize> FixedBytes<'a, N> {
    /// Bind to `v`.
    pub fn new(v: &'a mut [u8; N]) -> Self {
        Self(v)
    }
}

impl<const N: usize> Item for FixedBytes<'_, N> {
    fn size(&self) -> usize {
        N
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[..N].copy_from_slice(self.0);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let bytes = buf.get(..N).ok_or(DecodeError::UnexpectedEof {
            need: N,
            have: buf.len(),
        })?;
        self.0.copy_from_slice(bytes);
        Ok(())
    }
}

impl<const N: usize> OrderedItem for FixedBytes<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_u16_layout() {
        let mut v = 0x1234u16;
        let mut buf = [0u8; 2];
        BeU16::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0x12, 0x34]);

        let mut out = 0u16;
        BeU16::new(&mut out).decode(&buf).expect("decode failed");
        assert_eq!(out, 0x1234);
    }

    #[test]
    fn be_u32_round_trip() {
        let mut v = 0xDEAD_BEEFu32;
        let mut buf = [0u8; 4];
        BeU32::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);

        let mut out = 0u32;
        BeU32::new(&mut out).decode(&buf).expect("decode failed");
        assert_eq!(out, v);
    }

    #[test]
    fn be_u64_round_trip() {
        let mut v = 0x0102_0304_0506_0708u64;
        let mut buf = [0u8; 8];
        BeU64::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);

        let mut out = 0u64;
        BeU64::new(&mut out).decode(&buf).expect("decode failed");
        assert_eq!(out, v);
    }

    #[test]
    fn be_ints_preserve_order() {
        let encode16 = |mut v: u16| {
            let mut buf = [0u8; 2];
            BeU16::new(&mut v).encode(&mut buf);
            buf
        };
        assert!(encode16(1) < encode16(2));
        assert!(encode16(0x00FF) < encode16(0x0100));
        assert!(encode16(0x0100) < encode16(u16::MAX));
    }

    #[test]
    fn bool_bytes() {
        let mut v = true;
        let mut buf = [0u8; 1];
        BoolByte::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0x01]);

        v = false;
        buf = [0xFF];
        BoolByte::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0x00]);
    }

    #[test]
    fn bool_rejects_other_bytes() {
        let mut v = false;
        for byte in 2..=u8::MAX {
            assert_eq!(
                BoolByte::new(&mut v).decode(&[byte]),
                Err(DecodeError::InvalidBool { byte })
            );
        }
    }

    #[test]
    fn padding_checks_length_only() {
        let mut padding = Padding::new(4);
        assert_eq!(padding.size(), 4);
        padding.decode(&[0u8; 4]).expect("decode failed");
        assert_eq!(
            padding.decode(&[0u8; 3]),
            Err(DecodeError::UnexpectedEof { need: 4, have: 3 })
        );
    }

    #[test]
    fn fixed_bytes_round_trip() {
        let mut v = [0xA5u8; 16];
        let mut buf = [0u8; 16];
        Bytes16::new(&mut v).encode(&mut buf);
        assert_eq!(buf, [0xA5; 16]);

        let mut out = [0u8; 16];
        Bytes16::new(&mut out).decode(&buf).expect("decode failed");
        assert_eq!(out, [0xA5; 16]);
    }

    #[test]
    fn fixed_bytes_eof() {
        let mut out = [0u8; 32];
        assert_eq!(
            Bytes32::new(&mut out).decode(&[0u8; 31]),
            Err(DecodeError::UnexpectedEof { need: 32, have: 31 })
        );
    }
}
