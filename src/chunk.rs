use alloc::string::String;
use core::ops::{Deref, DerefMut};

use tracing::trace;

use crate::{ByteOrder, Encoding, Result, ScanError, Scanner};

/// Width of a chunk identifier, in bytes.
pub const CHUNK_ID_LEN: usize = 4;

/// Header of a chunk in an IFF-style container: a 4-byte identifier and a 32-bit size.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ChunkHeader {
    /// The raw identifier bytes, e.g. `*b"FORM"`.
    pub id: [u8; CHUNK_ID_LEN],
    /// Size of the chunk's content, excluding the header.
    pub size: isize,
}

impl ChunkHeader {
    /// The identifier as a string, or `None` if it is not ASCII.
    pub fn id_str(&self) -> Option<&str> {
        if self.id.is_ascii() {
            core::str::from_utf8(&self.id).ok()
        } else {
            None
        }
    }
}

/// A [`Scanner`] with extra reads for chunk-based container formats.
///
/// Chunk formats are usually big-endian, so unlike `Scanner` this defaults to
/// `ByteOrder::Big`. All of `Scanner`'s methods are available through `Deref`.
#[derive(Clone, Debug)]
pub struct ChunkScanner<'a> {
    scanner: Scanner<'a>,
}

impl<'a> ChunkScanner<'a> {
    /// Creates a chunk scanner over `data` that reads big-endian values, starting at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self::starting_at(data, ByteOrder::Big, 0)
    }

    /// Creates a chunk scanner over `data` that reads values in `byte_order`.
    pub fn with_byte_order(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self::starting_at(data, byte_order, 0)
    }

    /// Creates a chunk scanner over `data` that reads values in `byte_order`, starting at
    /// `position`.
    pub fn starting_at(data: &'a [u8], byte_order: ByteOrder, position: usize) -> Self {
        Self {
            scanner: Scanner::starting_at(data, byte_order, position),
        }
    }

    /// Unwraps the underlying `Scanner`, keeping its position.
    pub fn into_inner(self) -> Scanner<'a> {
        self.scanner
    }

    /// Reads a 4-byte ASCII chunk identifier.
    pub fn scan_chunk_id(&mut self) -> Result<String> {
        self.scanner.scan_string(CHUNK_ID_LEN, Encoding::Ascii, false)
    }

    /// Reads a chunk identifier and checks that it equals `expected`.
    ///
    /// `expected` must be exactly 4 ASCII bytes. If it is not, this fails with
    /// `ScanError::RequiredValueMismatch` without reading anything. A mismatching identifier is
    /// still consumed.
    pub fn expect_chunk_id(&mut self, expected: &str) -> Result<()> {
        if expected.len() != CHUNK_ID_LEN || !expected.is_ascii() {
            trace!(expected, "chunk id must be 4 ASCII bytes");
            return Err(ScanError::RequiredValueMismatch);
        }
        self.scanner.expect_string(expected, Encoding::Ascii, false)
    }

    /// Reads a chunk size: a signed 32-bit integer in the scanner's byte order.
    pub fn scan_chunk_size(&mut self) -> Result<isize> {
        Ok(self.scanner.scan_i32()? as isize)
    }

    /// Reads a chunk size and checks that it equals `expected`.
    ///
    /// The decoded value is widened before comparing, so an `expected` outside the range of
    /// `i32` never matches. A mismatching size is still consumed.
    pub fn expect_chunk_size(&mut self, expected: isize) -> Result<()> {
        let start = self.scanner.position;
        let size = self.scan_chunk_size()?;
        if size == expected {
            Ok(())
        } else {
            trace!(position = start, size, expected, "chunk size does not match");
            Err(ScanError::RequiredValueMismatch)
        }
    }

    /// Reads a whole chunk header: identifier followed by size.
    ///
    /// The identifier is returned as raw bytes and is not validated. If the size cannot be read,
    /// `position` is restored to the start of the header.
    pub fn scan_chunk_header(&mut self) -> Result<ChunkHeader> {
        let start = self.scanner.position;
        let id = self.scanner.scan_value::<[u8; CHUNK_ID_LEN]>()?;
        match self.scan_chunk_size() {
            Ok(size) => Ok(ChunkHeader { id, size }),
            Err(e) => {
                self.scanner.position = start;
                Err(e)
            }
        }
    }
}

impl<'a> Deref for ChunkScanner<'a> {
    type Target = Scanner<'a>;

    fn deref(&self) -> &Scanner<'a> {
        &self.scanner
    }
}

impl<'a> DerefMut for ChunkScanner<'a> {
    fn deref_mut(&mut self) -> &mut Scanner<'a> {
        &mut self.scanner
    }
}
