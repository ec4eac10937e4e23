//! Common Encoding/Decoding Utilities
//!
//! Byte extraction and accumulation shared by the codec entry points.
//! Both directions work on raw little-endian bytes with no tags or length
//! prefix.

use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;
use std::fmt;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The minimal encoding needs more bytes than the requested target length
    Overflow {
        /// Length of the minimal encoding
        required: usize,
        /// Requested target length
        target: usize,
    },
    /// Value outside the non-negative domain
    InvalidInput(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Overflow { required, target } => write!(
                f,
                "value needs {} bytes but target length is {}",
                required, target
            ),
            EncodeError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Extract the minimal little-endian bytes of a Natural
///
/// Byte `i` is `(value >> 8*i) & 0xff`, for every `i` up to the highest
/// non-zero byte. Zero yields an empty vector.
pub fn natural_to_le_bytes(value: &Natural) -> Vec<u8> {
    PowerOf2Digits::<u8>::to_power_of_2_digits_asc(value, 8)
}

/// Accumulate little-endian bytes into a Natural
///
/// The result is the sum of `byte[i] << 8*i`. Every byte sequence is valid:
/// empty and all-zero input give zero, and trailing zero bytes contribute
/// nothing.
pub fn le_bytes_to_natural(bytes: &[u8]) -> Natural {
    // None only for digits >= 2^8, which a u8 cannot hold
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(8, bytes.iter().copied())
        .unwrap_or(Natural::ZERO)
}
