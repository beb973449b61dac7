//! Byte-aligned record schemas.

use alloc::{boxed::Box, vec, vec::Vec};

use crate::{error::DecodeError, item::Item};

/// An ordered sequence of items encoded back to back.
///
/// The schema walks its items in declaration order. Encoding sums the item
/// sizes, allocates one zeroed buffer, and hands each item an exact-size
/// window. Decoding hands each item the remaining suffix and advances by
/// the item's post-decode size.
///
/// # Examples
///
/// ```
/// use varve_core::{BeU16, BoolByte, Encoding};
///
/// let mut port = 0x1234u16;
/// let mut active = true;
/// let bytes = Encoding::new()
///     .push(BeU16::new(&mut port))
///     .push(BoolByte::new(&mut active))
///     .encode();
/// assert_eq!(bytes, [0x12, 0x34, 0x01]);
/// ```
#[derive(Default)]
pub struct Encoding<'a> {
    items: Vec<Box<dyn Item + 'a>>,
}

impl<'a> Encoding<'a> {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item (builder pattern).
    #[must_use]
    pub fn push(mut self, item: impl Item + 'a) -> Self {
        self.items.push(Box::new(item));
        self
    }

    /// The number of items in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the schema holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode every item into a fresh buffer sized to the sum of the item
    /// sizes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let total: usize = self.items.iter().map(|item| item.size()).sum();
        let mut buf = vec![0u8; total];
        let mut at = 0;
        for item in &self.items {
            let size = item.size();
            item.encode(&mut buf[at..at + size]);
            at += size;
        }
        buf
    }

    /// Decode `buf` into the items' value locations, in declaration order.
    ///
    /// Trailing bytes after the final item are permitted and ignored.
    ///
    /// # Errors
    ///
    /// Propagates the first item's [`DecodeError`]; later items are not
    /// visited and earlier items are not rolled back.
    pub fn decode(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        let mut at = 0;
        for item in &mut self.items {
            item.decode(&buf[at..])?;
            at += item.size();
        }
        Ok(())
    }
}
