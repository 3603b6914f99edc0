//! Converts fixed-layout values to and from their raw, host-endian byte representation.
//!
//! There is no cursor and no byte-order adjustment here. A value packs to exactly
//! `size_of::<T>()` bytes, and unpacking requires exactly that many bytes back. Any type that
//! implements the `zerocopy` traits works, including `#[repr(C)]` records that derive them.
//! The `zerocopy(crate)` attribute lets the derives resolve through this crate's re-export, so
//! callers need no direct `zerocopy` dependency:
//!
//! ```
//! use byte_scanner::{codec, FromBytes, Immutable, IntoBytes, KnownLayout};
//!
//! #[derive(FromBytes, IntoBytes, Immutable, KnownLayout, PartialEq, Debug)]
//! #[zerocopy(crate = "byte_scanner::zerocopy")]
//! #[repr(C)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let bytes = codec::pack(&Point { x: 1, y: -2 });
//! assert_eq!(bytes.len(), 8);
//! assert_eq!(codec::unpack::<Point>(&bytes), Ok(Point { x: 1, y: -2 }));
//! ```

use alloc::vec::Vec;
use core::mem::size_of;

use tracing::trace;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Result, ScanError};

/// Returns the in-memory representation of `value` as a new byte vector.
pub fn pack<T: IntoBytes + Immutable + ?Sized>(value: &T) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Writes the in-memory representation of `value` into `dst`.
///
/// `dst` must be exactly `size_of_val(value)` bytes long, otherwise `ScanError::WrongLength` is
/// returned and `dst` is left untouched.
pub fn pack_into<T: IntoBytes + Immutable + ?Sized>(value: &T, dst: &mut [u8]) -> Result<()> {
    let src = value.as_bytes();
    if src.len() != dst.len() {
        trace!(expected = src.len(), actual = dst.len(), "pack_into: wrong length");
        return Err(ScanError::WrongLength {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    dst.copy_from_slice(src);
    Ok(())
}

/// Reconstructs a `T` from exactly `size_of::<T>()` bytes in host layout.
///
/// Returns `ScanError::WrongLength` if `bytes` has any other length.
pub fn unpack<T: FromBytes>(bytes: &[u8]) -> Result<T> {
    T::read_from_bytes(bytes).map_err(|_| {
        trace!(expected = size_of::<T>(), actual = bytes.len(), "unpack: wrong length");
        ScanError::WrongLength {
            expected: size_of::<T>(),
            actual: bytes.len(),
        }
    })
}
