//! Length-delimited payloads: a base-128 varint length, then the raw bytes.
//!
//! Not order-preserving — a shorter payload's length prefix can sort a
//! larger buffer first.

use alloc::{string::String, vec::Vec};

use crate::{error::DecodeError, item::Item, leb128};

/// Checks the announced payload length against the remaining buffer and
/// returns the payload slice.
fn payload<'b>(buf: &'b [u8], len: u64, prefix: usize) -> Result<&'b [u8], DecodeError> {
    let remaining = buf.len() - prefix;
    if len > remaining as u64 {
        return Err(DecodeError::UnexpectedEof {
            need: prefix.saturating_add(usize::try_from(len).unwrap_or(usize::MAX)),
            have: buf.len(),
        });
    }
    #[allow(clippy::cast_possible_truncation)] // len <= remaining <= usize::MAX
    let len = len as usize;
    Ok(&buf[prefix..prefix + len])
}

/// A byte sequence prefixed with its varint length.
///
/// Decode allocates a fresh backing buffer of the announced length.
pub struct DelimBytes<'a>(&'a mut Vec<u8>);

impl<'a> DelimBytes<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut Vec<u8>) -> Self {
        Self(v)
    }
}

impl Item for DelimBytes<'_> {
    fn size(&self) -> usize {
        leb128::encoded_len(self.0.len() as u64) + self.0.len()
    }

    fn encode(&self, buf: &mut [u8]) {
        let prefix = leb128::encode_into(self.0.len() as u64, buf);
        buf[prefix..prefix + self.0.len()].copy_from_slice(self.0);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let (len, prefix) = leb128::decode(buf)?;
        *self.0 = payload(buf, len, prefix)?.to_vec();
        Ok(())
    }
}

/// A UTF-8 string prefixed with its varint length.
///
/// Decode allocates a fresh string and rejects invalid UTF-8.
pub struct DelimString<'a>(&'a mut String);

impl<'a> DelimString<'a> {
    /// Bind to `v`.
    pub fn new(v: &'a mut String) -> Self {
        Self(v)
    }
}

impl Item for DelimString<'_> {
    fn size(&self) -> usize {
        leb128::encoded_len(self.0.len() as u64) + self.0.len()
    }

    fn encode(&self, buf: &mut [u8]) {
        let prefix = leb128::encode_into(self.0.len() as u64, buf);
        buf[prefix..prefix + self.0.len()].copy_from_slice(self.0.as_bytes());
    }

    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let (len, prefix) = leb128::decode(buf)?;
        let text = core::str::from_utf8(payload(buf, len, prefix)?)?;
        *self.0 = String::from(text);
        Ok(())
    }
}
