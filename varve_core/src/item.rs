//! Item descriptor capabilities.
//!
//! An item binds a mutable value location owned by the caller to one field
//! of a byte layout. [`Item`] is the base capability — report a size,
//! write, read. [`OrderedItem`] is the narrower capability required inside
//! a [`Tuple`](crate::tuple::Tuple): implementing it asserts that the
//! item's encoding is order-preserving, and it adds the `last`-flag method
//! variants a tuple threads through its operations.

use crate::error::DecodeError;

/// A typed field descriptor bound to a caller-owned value location.
///
/// `size` is a pure function of the bound value at the time of the call;
/// the value must not change between sizing and encoding. The buffer handed
/// to `encode` is exactly `size()` bytes and zero-initialized. The buffer
/// handed to `decode` is the remaining suffix of the record and may extend
/// past the item's own encoding.
pub trait Item {
    /// The number of bytes `encode` will write for the current value.
    fn size(&self) -> usize;

    /// Write the bound value into `buf`.
    fn encode(&self, buf: &mut [u8]);

    /// Read the front of `buf` into the bound value.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `buf` is too short or holds bytes the
    /// item rejects.
    fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError>;
}

/// An [`Item`] whose encoding is order-preserving: whenever two values
/// satisfy `a < b`, the encoding of `a` compares lexicographically below
/// the encoding of `b`.
///
/// Only `OrderedItem`s may enter a [`Tuple`](crate::tuple::Tuple), which
/// is what keeps concatenated tuple encodings order-preserving as a whole.
///
/// The `last` flag says whether the item is the final one of the current
/// (possibly prefix) tuple operation, so a variable-width item could drop a
/// trailing terminator. The provided defaults ignore the flag and forward
/// to the plain [`Item`] methods, which is correct for every self-delimiting
/// item.
pub trait OrderedItem: Item {
    /// Like [`Item::size`], aware of the trailing-item flag.
    fn key_size(&self, last: bool) -> usize {
        let _ = last;
        self.size()
    }

    /// Like [`Item::encode`], aware of the trailing-item flag.
    fn encode_key(&self, buf: &mut [u8], last: bool) {
        let _ = last;
        self.encode(buf);
    }

    /// Like [`Item::decode`], aware of the trailing-item flag.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] under the same conditions as
    /// [`Item::decode`].
    fn decode_key(&mut self, buf: &[u8], last: bool) -> Result<(), DecodeError> {
        let _ = last;
        self.decode(buf)
    }
}
