use zerocopy::{FromBytes, Immutable, IntoBytes};

/// Byte order of multi-byte values in a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    const HOST: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Whether values in this byte order must be reversed to match the host's layout.
    #[inline(always)]
    pub(crate) fn needs_swap(self) -> bool {
        self != Self::HOST
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type whose byte order can be reversed.
///
/// This is implemented for the fixed-width integers, `usize`, `isize`, `f32` and `f64`. It is
/// sealed; compound records are read with [`Scanner::scan_value`](crate::Scanner::scan_value)
/// in host layout instead.
pub trait Endianed: FromBytes + IntoBytes + Immutable + Copy + sealed::Sealed {
    /// Returns the value with its byte representation reversed.
    fn swap_bytes(self) -> Self;

    /// Converts a value stored in `order` to the host's layout, or the reverse.
    #[inline(always)]
    fn convert(self, order: ByteOrder) -> Self {
        if order.needs_swap() {
            self.swap_bytes()
        } else {
            self
        }
    }
}

macro_rules! endianed_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Endianed for $t {
                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$t>::swap_bytes(self)
                }
            }
        )*
    };
}

endianed_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! endianed_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Endianed for $t {
                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$t>::from_bits(self.to_bits().swap_bytes())
                }
            }
        )*
    };
}

endianed_float!(f32, f64);
