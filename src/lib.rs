//! Sequential, endianness-aware reading of values from an in-memory byte buffer.
//!
//! [`Scanner`] walks a borrowed byte slice with a read cursor, decoding integers, floats,
//! strings and arrays of them. Every read is bounds-checked and, for multi-byte values, can
//! normalize the source byte order to the host's. [`ChunkScanner`] adds chunk-header reads for
//! IFF-style container formats (a 4-byte identifier followed by a 4-byte size).
//!
//! The [`codec`] module converts any fixed-layout value to and from its raw, host-endian byte
//! representation, without a cursor.
//!
//! Record types derive their layout with the `zerocopy` derives re-exported here. Crates that do
//! not depend on `zerocopy` directly must point the derives at this crate's re-export with
//! `#[zerocopy(crate = "byte_scanner::zerocopy")]`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

pub mod codec;
mod chunk;
mod error;
pub mod hexfmt;
mod order;
mod scanner;
#[cfg(feature = "std")]
pub mod stream;
mod text;


pub use chunk::{ChunkHeader, ChunkScanner, CHUNK_ID_LEN};
pub use error::{Result, ScanError};
pub use order::{ByteOrder, Endianed};
pub use scanner::Scanner;
pub use text::Encoding;

pub use zerocopy;
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
