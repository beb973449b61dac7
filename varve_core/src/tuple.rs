//! Order-preserving record schemas.

use alloc::{boxed::Box, vec, vec::Vec};

use crate::{error::DecodeError, item::OrderedItem};

/// An ordered sequence of order-preserving items.
///
/// Because every member is an [`OrderedItem`], concatenating their
/// encodings preserves ordering: two tuples of the same shape compare
/// bytewise in the same order as their values compare component-wise. This
/// is the building block for range-scannable keys.
///
/// Beyond [`Encoding`](crate::encoding::Encoding)'s behavior, a tuple can
/// encode or decode just a prefix of its items, and it tells each item
/// whether it is the final one of the operation.
///
/// # Examples
///
/// ```
/// use varve_core::{OrdU64, Tuple};
///
/// let mut small = 5u64;
/// let mut large = 1_000_000u64;
/// let lo = Tuple::new().push(OrdU64::new(&mut small)).encode();
/// let hi = Tuple::new().push(OrdU64::new(&mut large)).encode();
/// assert!(lo < hi);
/// ```
#[derive(Default)]
pub struct Tuple<'a> {
    items: Vec<Box<dyn OrderedItem + 'a>>,
}

impl<'a> Tuple<'a> {
    /// Create an empty tuple.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an order-preserving item (builder pattern).
    #[must_use]
    pub fn push(mut self, item: impl OrderedItem + 'a) -> Self {
        self.items.push(Box::new(item));
        self
    }

    /// The number of items in the tuple.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tuple holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode every item.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.encode_prefix(self.items.len())
    }

    /// Encode only the first `n` items. The item at index `n - 1` is told
    /// it is last.
    ///
    /// Prefix encodings of equal item count compare in the same order as
    /// full encodings do.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of items.
    #[must_use]
    pub fn encode_prefix(&self, n: usize) -> Vec<u8> {
        let items = &self.items[..n];
        let total: usize = items
            .iter()
            .enumerate()
            .map(|(i, item)| item.key_size(i + 1 == n))
            .sum();
        let mut buf = vec![0u8; total];
        let mut at = 0;
        for (i, item) in items.iter().enumerate() {
            let last = i + 1 == n;
            let size = item.key_size(last);
            item.encode_key(&mut buf[at..at + size], last);
            at += size;
        }
        buf
    }

    /// Decode `buf` into every item's value location.
    ///
    /// # Errors
    ///
    /// Propagates the first item's [`DecodeError`].
    pub fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        self.decode_prefix(buf, self.items.len())
    }

    /// Decode only the first `n` items. Trailing bytes are permitted and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Propagates the first item's [`DecodeError`].
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of items.
    pub fn decode_prefix(&mut self, buf: &[u8], n: usize) -> Result<(), DecodeError> {
        let mut at = 0;
        for (i, item) in self.items[..n].iter_mut().enumerate() {
            let last = i + 1 == n;
            item.decode_key(&buf[at..], last)?;
            at += item.key_size(last);
        }
        Ok(())
    }
}
