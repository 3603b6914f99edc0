//! Reads and writes raw values through `std::io` streams.
//!
//! These are thin wrappers over [`codec`](crate::codec): a value is written as exactly the bytes
//! `codec::pack` produces, and read back from the next `size_of::<T>()` bytes of the stream.

use std::io::{self, Read, Write};

use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes};

use crate::{ByteOrder, Endianed, CHUNK_ID_LEN};

/// Extension methods for writing raw values to any `Write` implementation.
pub trait WriteRawExt: Write {
    /// Writes the in-memory representation of `value`.
    fn write_packed<T: IntoBytes + Immutable + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        self.write_all(value.as_bytes())
    }

    /// Writes each value in `values`, in order.
    fn write_packed_all<T: IntoBytes + Immutable>(&mut self, values: &[T]) -> io::Result<()> {
        for value in values {
            self.write_packed(value)?;
        }
        Ok(())
    }

    /// Writes `value` in the given byte order.
    fn write_endianed<T: Endianed>(&mut self, value: T, order: ByteOrder) -> io::Result<()> {
        self.write_packed(&value.convert(order))
    }

    /// Writes a 4-byte ASCII chunk identifier.
    ///
    /// Fails with `io::ErrorKind::InvalidInput` if `id` is not exactly 4 ASCII bytes.
    fn write_chunk_id(&mut self, id: &str) -> io::Result<()> {
        if id.len() != CHUNK_ID_LEN || !id.is_ascii() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "chunk id must be 4 ASCII bytes",
            ));
        }
        self.write_all(id.as_bytes())
    }

    /// Writes a chunk size as a signed 32-bit integer in the given byte order.
    ///
    /// Fails with `io::ErrorKind::InvalidInput` if `size` does not fit in an `i32`.
    fn write_chunk_size(&mut self, size: isize, order: ByteOrder) -> io::Result<()> {
        let size = i32::try_from(size).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "chunk size does not fit in i32")
        })?;
        self.write_endianed(size, order)
    }
}

impl<W: Write + ?Sized> WriteRawExt for W {}

/// Extension methods for reading raw values from any `Read` implementation.
pub trait ReadRawExt: Read {
    /// Reads the next `size_of::<T>()` bytes and reinterprets them as a `T` in host layout.
    ///
    /// The bytes are read directly into the value; nothing is allocated.
    ///
    /// A stream that ends early fails with `io::ErrorKind::UnexpectedEof`.
    fn read_unpacked<T: FromBytes + IntoBytes>(&mut self) -> io::Result<T> {
        let mut value = T::new_zeroed();
        self.read_exact(value.as_mut_bytes())?;
        Ok(value)
    }

    /// Reads `count` consecutive values.
    fn read_unpacked_vec<T: FromBytes + IntoBytes>(
        &mut self,
        count: usize,
    ) -> io::Result<Vec<T>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_unpacked()?);
        }
        Ok(values)
    }
}

impl<R: Read + ?Sized> ReadRawExt for R {}
