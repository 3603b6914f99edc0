use alloc::string::String;
use alloc::vec::Vec;
use core::mem::size_of;

use tracing::trace;
use zerocopy::FromBytes;

use crate::{codec, ByteOrder, Encoding, Endianed, Result, ScanError};

/// Reads values sequentially from a slice of bytes.
///
/// A `Scanner` borrows its buffer and keeps a read cursor, `position`, into it. Each `scan_*`
/// method checks that enough bytes remain, decodes the next value and advances `position` past
/// it. A read that would run off the end of the buffer fails with `ScanError::OutOfRange` and
/// does not move the cursor.
///
/// Multi-byte numeric values can be read in two ways:
///
/// * `scan_value` and `scan_values` interpret the bytes in the host's native layout. These work
///   for any `FromBytes` type, including `#[repr(C)]` records.
/// * `scan_endianed`, `scan_endianed_values` and the `scan_u16`, `scan_f32`, ... helpers
///   interpret the bytes in the scanner's configured [`ByteOrder`], reversing them first when it
///   differs from the host's.
///
/// The buffer is never modified, so any number of scanners may read the same slice at
/// independent positions. A single scanner is not meant to be shared between threads; each
/// reader should own its own.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    data: &'a [u8],

    /// Offset of the next byte to read. Callers may set this to seek or rewind. A position at
    /// or beyond the end of the buffer is allowed, but then every read fails.
    pub position: usize,

    byte_order: ByteOrder,
    needs_swap: bool,
}

macro_rules! scan_endianed_methods {
    ($($name:ident => $t:ty,)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($t), "` in the scanner's byte order.")]
            #[inline(always)]
            pub fn $name(&mut self) -> Result<$t> {
                self.scan_endianed::<$t>()
            }
        )*
    };
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `data` that reads little-endian values, starting at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self::starting_at(data, ByteOrder::Little, 0)
    }

    /// Creates a scanner over `data` that reads values in `byte_order`, starting at offset 0.
    pub fn with_byte_order(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self::starting_at(data, byte_order, 0)
    }

    /// Creates a scanner over `data` that reads values in `byte_order`, starting at `position`.
    pub fn starting_at(data: &'a [u8], byte_order: ByteOrder, position: usize) -> Self {
        Self {
            data,
            position,
            byte_order,
            needs_swap: byte_order.needs_swap(),
        }
    }

    /// The whole underlying buffer, regardless of `position`.
    pub fn buffer(&self) -> &'a [u8] {
        self.data
    }

    /// The byte order used by the endianness-aware reads.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between `position` and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns `true` if no bytes remain to be read.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the `len` bytes at `position` without consuming them.
    ///
    /// Fails with `ScanError::OutOfRange` if `len` is zero or fewer than `len` bytes remain.
    pub fn peek_data(&self, len: usize) -> Result<&'a [u8]> {
        let end = match self.position.checked_add(len) {
            Some(end) if len != 0 && end <= self.data.len() => end,
            _ => {
                trace!(
                    position = self.position,
                    len,
                    buffer_len = self.data.len(),
                    "read out of range"
                );
                return Err(ScanError::OutOfRange);
            }
        };
        Ok(&self.data[self.position..end])
    }

    /// Reads the next `len` bytes. This does not copy them; the returned slice borrows from the
    /// buffer.
    ///
    /// Fails with `ScanError::OutOfRange` if `len` is zero or fewer than `len` bytes remain. On
    /// failure `position` is unchanged.
    ///
    /// This is the only read that moves `position`; every other `scan_*` method goes through it.
    #[inline]
    pub fn scan_data(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_data(len)?;
        self.position += len;
        Ok(bytes)
    }

    /// Advances `position` by `len` bytes, with the same checks as `scan_data`.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.scan_data(len).map(|_| ())
    }

    /// Reads a `T` from the next `size_of::<T>()` bytes, in host layout.
    pub fn scan_value<T: FromBytes>(&mut self) -> Result<T> {
        codec::unpack(self.scan_data(size_of::<T>())?)
    }

    /// Reads a `T` from the next `len` bytes, in host layout.
    ///
    /// `len` must equal `size_of::<T>()`; otherwise this fails with `ScanError::WrongLength`
    /// before anything is consumed.
    pub fn scan_value_sized<T: FromBytes>(&mut self, len: usize) -> Result<T> {
        if len != size_of::<T>() {
            trace!(expected = size_of::<T>(), actual = len, "scan_value_sized: wrong length");
            return Err(ScanError::WrongLength {
                expected: size_of::<T>(),
                actual: len,
            });
        }
        self.scan_value()
    }

    /// Reads a `T` in host layout and checks that it equals `expected`.
    ///
    /// On `ScanError::RequiredValueMismatch` the value has already been consumed, so `position`
    /// has advanced by `size_of::<T>()`.
    pub fn expect_value<T: FromBytes + PartialEq>(&mut self, expected: T) -> Result<()> {
        let start = self.position;
        let value = self.scan_value::<T>()?;
        if value == expected {
            Ok(())
        } else {
            trace!(position = start, "scanned value does not match required value");
            Err(ScanError::RequiredValueMismatch)
        }
    }

    /// Reads `count` consecutive `T` values in host layout.
    ///
    /// The whole array is bounds-checked before anything is decoded: either all `count` values
    /// are returned, or the call fails with `ScanError::OutOfRange` and `position` is unchanged.
    /// Reading zero values always succeeds. A zero-sized `T` occupies no bytes, so as with
    /// `scan_value`, any `count > 0` of them fails with `ScanError::OutOfRange`.
    pub fn scan_values<T: FromBytes>(&mut self, count: usize) -> Result<Vec<T>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let bytes = self.scan_array_bytes(size_of::<T>(), count)?;
        bytes.chunks_exact(size_of::<T>()).map(codec::unpack).collect()
    }

    /// Reads a `T` in the scanner's byte order.
    pub fn scan_endianed<T: Endianed>(&mut self) -> Result<T> {
        let value = self.scan_value::<T>()?;
        Ok(self.normalize(value))
    }

    /// Reads a `T` in the scanner's byte order and checks that it equals `expected`.
    ///
    /// As with `expect_value`, the value is consumed even when it does not match.
    pub fn expect_endianed<T: Endianed + PartialEq>(&mut self, expected: T) -> Result<()> {
        let start = self.position;
        let value = self.scan_endianed::<T>()?;
        if value == expected {
            Ok(())
        } else {
            trace!(position = start, "scanned value does not match required value");
            Err(ScanError::RequiredValueMismatch)
        }
    }

    /// Reads `count` consecutive `T` values in the scanner's byte order.
    ///
    /// This is all-or-nothing in the same way as `scan_values`.
    pub fn scan_endianed_values<T: Endianed>(&mut self, count: usize) -> Result<Vec<T>> {
        let values = self.scan_values::<T>(count)?;
        Ok(values.into_iter().map(|v| self.normalize(v)).collect())
    }

    scan_endianed_methods! {
        scan_u8 => u8,
        scan_u16 => u16,
        scan_u32 => u32,
        scan_u64 => u64,
        scan_i8 => i8,
        scan_i16 => i16,
        scan_i32 => i32,
        scan_i64 => i64,
        scan_f32 => f32,
        scan_f64 => f64,
    }

    /// Reads a pointer-width unsigned integer in the scanner's byte order.
    ///
    /// The number of bytes consumed depends on the target, so this should only be used for data
    /// produced on a machine of the same width.
    pub fn scan_usize(&mut self) -> Result<usize> {
        self.scan_endianed::<usize>()
    }

    /// Reads a pointer-width signed integer in the scanner's byte order. See `scan_usize`.
    pub fn scan_isize(&mut self) -> Result<isize> {
        self.scan_endianed::<isize>()
    }

    /// Reads exactly `len` bytes and decodes them as a string in `encoding`.
    ///
    /// If `null_terminated` is set, the string ends at the first null character within those
    /// `len` bytes: a zero byte, or for UTF-16 an aligned `0x0000` code unit. The cursor still
    /// advances by the full `len`.
    ///
    /// Fails with `ScanError::OutOfRange` if fewer than `len` bytes remain (nothing consumed), or
    /// `ScanError::InvalidString` if the bytes cannot be decoded (`len` bytes consumed).
    pub fn scan_string(
        &mut self,
        len: usize,
        encoding: Encoding,
        null_terminated: bool,
    ) -> Result<String> {
        let start = self.position;
        let bytes = self.scan_data(len)?;
        let bytes = if null_terminated {
            encoding.truncate_at_nul(bytes)
        } else {
            bytes
        };

        encoding.decode(bytes).ok_or_else(|| {
            trace!(position = start, len, ?encoding, "string could not be decoded");
            ScanError::InvalidString
        })
    }

    /// Reads a string and checks that it equals `expected`.
    ///
    /// The number of bytes read is the number of characters in `expected`, plus one if
    /// `null_terminated` is set. That equals the encoded length only for single-byte encodings;
    /// for UTF-16, or UTF-8 text outside ASCII, use `scan_string` with an explicit length and
    /// compare the result instead.
    pub fn expect_string(
        &mut self,
        expected: &str,
        encoding: Encoding,
        null_terminated: bool,
    ) -> Result<()> {
        let start = self.position;
        let len = expected.chars().count() + usize::from(null_terminated);
        let value = self.scan_string(len, encoding, null_terminated)?;
        if value == expected {
            Ok(())
        } else {
            trace!(position = start, expected, found = %value, "string does not match");
            Err(ScanError::RequiredValueMismatch)
        }
    }

    /// Reads exactly `len` bytes as a byte string, without copying or validating them.
    ///
    /// If `null_terminated` is set, the string ends at the first zero byte, but the cursor still
    /// advances by the full `len`.
    #[cfg(feature = "bstr")]
    pub fn scan_bstr(&mut self, len: usize, null_terminated: bool) -> Result<&'a bstr::BStr> {
        let bytes = self.scan_data(len)?;
        let bytes = if null_terminated {
            crate::text::truncate_at_nul_byte(bytes)
        } else {
            bytes
        };
        Ok(bstr::BStr::new(bytes))
    }

    fn scan_array_bytes(&mut self, elem_size: usize, count: usize) -> Result<&'a [u8]> {
        let Some(len) = elem_size.checked_mul(count) else {
            trace!(elem_size, count, "array length overflows");
            return Err(ScanError::OutOfRange);
        };
        self.scan_data(len)
    }

    #[inline(always)]
    fn normalize<T: Endianed>(&self, value: T) -> T {
        if self.needs_swap {
            value.swap_bytes()
        } else {
            value
        }
    }
}
