//! Library-wide error and result types.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// The cipher core performs no I/O and does not allocate, so the error
/// surface is exactly the two validation failures below. Batch
/// encryption and decryption themselves cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key passed to key setup was not 16, 24 or 32 bytes long.
    InvalidKeyLength(usize),
    /// The host CPU offers none of the SIMD paths this library requires.
    UnsupportedCpu,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength(n) => write!(
                f,
                "invalid key length: expected 16, 24 or 32 bytes, got {n} bytes"
            ),
            Error::UnsupportedCpu => {
                write!(f, "no supported SIMD path on this CPU")
            }
        }
    }
}

impl std::error::Error for Error {}
