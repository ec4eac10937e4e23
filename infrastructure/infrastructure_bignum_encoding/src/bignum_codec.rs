//! Bignum Codec Module
//!
//! Provides little-endian encoding/decoding of non-negative big integers.

use crate::common::{le_bytes_to_natural, natural_to_le_bytes, EncodeError};
use entities_utilities::BigNumber;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};
use tracing::trace;

/// Bignum codec
///
/// Stateless; every call allocates its own output.
pub struct BignumCodec;

impl BignumCodec {
    /// Encode a Natural as little-endian bytes
    ///
    /// # Arguments
    /// * `value` - The value to encode
    /// * `target_length` - Exact output length, or `None` for the minimal encoding
    ///
    /// # Returns
    /// * `Ok(bytes)` - Minimal encoding, zero-padded at the high end up to `target_length`
    /// * `Err(EncodeError::Overflow)` - The minimal encoding is longer than `target_length`
    ///
    /// # Examples
    /// ```
    /// use infrastructure_bignum_encoding::BignumCodec;
    /// use malachite::Natural;
    ///
    /// let bytes = BignumCodec::encode(&Natural::from(256u32), Some(4))?;
    /// assert_eq!(bytes, vec![0, 1, 0, 0]);
    /// # Ok::<(), infrastructure_bignum_encoding::EncodeError>(())
    /// ```
    pub fn encode(value: &Natural, target_length: Option<usize>) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = natural_to_le_bytes(value);
        trace!(minimal = bytes.len(), target_length = ?target_length, "bignum encode");

        match target_length {
            None => Ok(bytes),
            Some(target) if bytes.len() > target => Err(EncodeError::Overflow {
                required: bytes.len(),
                target,
            }),
            Some(target) => {
                bytes.resize(target, 0);
                Ok(bytes)
            }
        }
    }

    /// Encode into an array whose width is known at compile time
    ///
    /// Same rules as `encode(value, Some(N))`.
    pub fn encode_fixed<const N: usize>(value: &Natural) -> Result<[u8; N], EncodeError> {
        let bytes = Self::encode(value, Some(N))?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    /// Encode a signed Integer
    ///
    /// Negative values are outside the codec's domain and are rejected with
    /// `EncodeError::InvalidInput`; everything else behaves like [`Self::encode`].
    pub fn encode_integer(
        value: &Integer,
        target_length: Option<usize>,
    ) -> Result<Vec<u8>, EncodeError> {
        Self::encode_big_number(&BigNumber::from_integer(value.clone()), target_length)
    }

    /// Encode a `BigNumber`, rejecting negative values
    pub fn encode_big_number(
        value: &BigNumber,
        target_length: Option<usize>,
    ) -> Result<Vec<u8>, EncodeError> {
        let natural = value.to_natural().ok_or_else(|| {
            EncodeError::InvalidInput("bignum must be non-negative".to_string())
        })?;
        Self::encode(&natural, target_length)
    }

    /// Decode little-endian bytes
    ///
    /// Total: the empty sequence is zero and trailing zero bytes are ignored.
    pub fn decode(data: &[u8]) -> Natural {
        trace!(len = data.len(), "bignum decode");
        le_bytes_to_natural(data)
    }

    /// Length of the minimal encoding of `value`
    ///
    /// Saturates at `usize::MAX` where the byte count does not fit the
    /// target's pointer width.
    pub fn encoded_len(value: &Natural) -> usize {
        usize::try_from(value.significant_bits().div_ceil(8)).unwrap_or(usize::MAX)
    }
}
