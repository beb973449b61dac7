//! Declarative byte-level codecs for fixed-structure records.
//!
//! A schema is an ordered list of typed item descriptors, each bound to a
//! mutable value location owned by the caller. The same schema both encodes
//! the bound values into one contiguous buffer and decodes a buffer back
//! into them. Items are self-sizing, so a record needs no framing beyond
//! its own fields.
//!
//! The usual shape is a `layout` method on the record type:
//!
//! ```
//! use varve_core::{BeU16, BoolByte, DecodeError, DelimString, Encoding};
//!
//! struct Peer {
//!     port: u16,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Peer {
//!     fn layout(&mut self) -> Encoding<'_> {
//!         Encoding::new()
//!             .push(BeU16::new(&mut self.port))
//!             .push(DelimString::new(&mut self.name))
//!             .push(BoolByte::new(&mut self.active))
//!     }
//! }
//!
//! let mut peer = Peer { port: 0x1234, name: "relay".into(), active: true };
//! let bytes = peer.layout().encode();
//! assert_eq!(bytes[..2], [0x12, 0x34]);
//!
//! let mut restored = Peer { port: 0, name: String::new(), active: false };
//! restored.layout().decode(&bytes)?;
//! assert_eq!(restored.port, 0x1234);
//! assert_eq!(restored.name, "relay");
//! assert!(restored.active);
//! # Ok::<(), DecodeError>(())
//! ```
//!
//! # Key material
//!
//! [`Tuple`] is the order-preserving sibling of [`Encoding`]: it only
//! accepts items whose encodings sort bytewise in value order (big-endian
//! integers, the `lexu64`/`lexi64` varints behind [`OrdU64`] and
//! [`OrdI64`], verbatim byte arrays, bitpacked regions), so concatenated
//! tuples make range-scannable keys. Tuples can also encode or decode just
//! a prefix of their items.
//!
//! # Sub-byte fields
//!
//! [`Bitpacked`] aggregates bit-granularity items ([`Bit`], [`BitFlags`],
//! [`Bits8`]–[`Bits64`], [`BitPadding`]) MSB-first into a byte-aligned
//! item, padding the tail with zero bits.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod bitpacked;
pub mod bits;
pub mod delim;
pub mod encoding;
pub mod error;
pub mod fixed;
pub mod item;
pub mod leb128;
pub mod ordered;
pub mod tuple;

pub use bitpacked::{Bit, BitFlags, BitItem, BitPadding, Bitpacked, Bits16, Bits32, Bits64, Bits8};
pub use bits::{BitReader, BitWriter};
pub use delim::{DelimBytes, DelimString};
pub use encoding::Encoding;
pub use error::DecodeError;
pub use fixed::{BeU16, BeU32, BeU64, BoolByte, Bytes16, Bytes32, FixedBytes, Padding, U8};
pub use item::{Item, OrderedItem};
pub use leb128::{VarU32, VarU64};
pub use ordered::{OrdI64, OrdU64};
pub use tuple::Tuple;
