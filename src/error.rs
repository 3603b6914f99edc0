use thiserror::Error;

/// Result type for every scanning and unpacking operation.
pub type Result<T> = core::result::Result<T, ScanError>;

/// Error type for `Scanner`, `ChunkScanner` and the raw codec.
///
/// Callers parsing a file format should treat `OutOfRange` as corrupt or truncated input, and
/// `InvalidString` or `RequiredValueMismatch` as input that does not match the expected format.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ScanError {
    /// A read would consume bytes past the end of the buffer, or a zero-length read was
    /// requested.
    #[error("read is out of range of the buffer")]
    OutOfRange,

    /// The bytes read for a string could not be decoded under the requested encoding.
    #[error("bytes could not be decoded as a string")]
    InvalidString,

    /// A scan-and-validate read decoded a value that differs from the expected one.
    #[error("scanned value does not match the required value")]
    RequiredValueMismatch,

    /// A byte sequence given to the codec does not have the size of the target type.
    #[error("wrong length: expected {expected} bytes, got {actual}")]
    WrongLength {
        /// Size of the target type, in bytes.
        expected: usize,
        /// Length of the byte sequence that was supplied.
        actual: usize,
    },
}
