//! Library-wide error type.

use std::fmt;

/// The only structural failure this crate can report: an out-of-range key
/// length passed to [`UserKey::new`](crate::UserKey::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `key_len_bits` exceeded 256, the widest key Serpent accepts.
    InvalidKeyLength {
        /// The rejected bit length.
        bits: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { bits } => {
                write!(f, "key length {bits} bits exceeds the 256-bit maximum")
            }
        }
    }
}

impl std::error::Error for Error {}
