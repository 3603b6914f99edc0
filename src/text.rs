use alloc::string::String;
use alloc::vec::Vec;

use zerocopy::byteorder::{BE, LE, U16};
use zerocopy::FromBytes;

/// Text encodings understood by [`Scanner::scan_string`](crate::Scanner::scan_string).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Encoding {
    /// 7-bit ASCII. Bytes above `0x7f` are rejected.
    Ascii,
    /// ISO 8859-1. Every byte maps to the code point of the same value.
    Latin1,
    /// UTF-8.
    #[default]
    Utf8,
    /// UTF-16, little-endian code units.
    Utf16Le,
    /// UTF-16, big-endian code units.
    Utf16Be,
}

impl Encoding {
    /// Cuts `bytes` at the first null character.
    ///
    /// For UTF-16 the terminator is the first 2-byte-aligned `0x0000` code unit; for every other
    /// encoding it is the first zero byte. Without a terminator, `bytes` is returned whole.
    pub(crate) fn truncate_at_nul(self, bytes: &[u8]) -> &[u8] {
        match self {
            Self::Utf16Le | Self::Utf16Be => match bytes.chunks_exact(2).position(|u| u == [0, 0]) {
                Some(n) => &bytes[..n * 2],
                None => bytes,
            },
            Self::Ascii | Self::Latin1 | Self::Utf8 => truncate_at_nul_byte(bytes),
        }
    }

    /// Decodes `bytes`, returning `None` if they are not well-formed in this encoding.
    ///
    /// UTF-16 input must have an even length.
    pub(crate) fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| b as char).collect())
                } else {
                    None
                }
            }
            Self::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            Self::Utf8 => core::str::from_utf8(bytes).ok().map(String::from),
            Self::Utf16Le => {
                let wchars = <[U16<LE>]>::ref_from_bytes(bytes).ok()?;
                let units: Vec<u16> = wchars.iter().map(|c| c.get()).collect();
                String::from_utf16(&units).ok()
            }
            Self::Utf16Be => {
                let wchars = <[U16<BE>]>::ref_from_bytes(bytes).ok()?;
                let units: Vec<u16> = wchars.iter().map(|c| c.get()).collect();
                String::from_utf16(&units).ok()
            }
        }
    }
}

/// Cuts `bytes` at the first zero byte.
pub(crate) fn truncate_at_nul_byte(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(n) => &bytes[..n],
        None => bytes,
    }
}
