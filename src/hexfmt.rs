//! Hex formatting of byte sequences, for diagnostics.

use alloc::string::String;

/// Formats `bytes` as lowercase hex, two digits per byte with no separators.
///
/// Returns `None` for an empty slice.
///
/// ```
/// assert_eq!(byte_scanner::hexfmt::hex_string(&[0x00, 0xff]).as_deref(), Some("00ff"));
/// assert_eq!(byte_scanner::hexfmt::hex_string(&[]), None);
/// ```
pub fn hex_string(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        None
    } else {
        Some(hex::encode(bytes))
    }
}
