//! Bigint Facades
//!
//! `bigint_to_bytes` / `bigint_of_bytes` wrap the little-endian codec and
//! produce or consume native buffers. `bytes_of_native` / `bytes_to_native`
//! wrap the buffer adapter.

use adapters_nifs::{BufferNif, NativeBuffer};
use entities_data_handling::Binary;
use infrastructure_bignum_encoding::{BignumCodec, EncodeError};
use malachite::Natural;

/// Encode a bignum into a native buffer
///
/// With `length`, the buffer is exactly that many bytes, zero-padded at the
/// high end; `EncodeError::Overflow` if the value does not fit.
pub fn bigint_to_bytes(value: &Natural, length: Option<usize>) -> Result<NativeBuffer, EncodeError> {
    BignumCodec::encode(value, length).map(NativeBuffer::from)
}

/// Decode a native buffer as a little-endian bignum
pub fn bigint_of_bytes(bytes: &NativeBuffer) -> Natural {
    BignumCodec::decode(bytes.as_slice())
}

/// Copy a native buffer into a managed binary
pub fn bytes_of_native(native: &NativeBuffer) -> Binary {
    BufferNif::binary_from_native(native)
}

/// Copy a managed binary into a native buffer
pub fn bytes_to_native(binary: &Binary) -> NativeBuffer {
    BufferNif::native_from_binary(binary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigint_to_bytes() {
        let native = bigint_to_bytes(&Natural::from(256u32), None).unwrap();
        assert_eq!(native.as_slice(), &[0, 1]);

        let native = bigint_to_bytes(&Natural::from(256u32), Some(4)).unwrap();
        assert_eq!(native.as_slice(), &[0, 1, 0, 0]);
    }

    #[test]
    fn test_bigint_to_bytes_overflow() {
        let result = bigint_to_bytes(&Natural::from(256u32), Some(1));
        assert_eq!(result, Err(EncodeError::Overflow { required: 2, target: 1 }));
    }

    #[test]
    fn test_bigint_of_bytes() {
        assert_eq!(bigint_of_bytes(&NativeBuffer::zeroed(0)), Natural::from(0u32));
        assert_eq!(bigint_of_bytes(&NativeBuffer::from([1u8, 0, 0])), Natural::from(1u32));
    }

    #[test]
    fn test_bytes_native_copies() {
        let binary = Binary::new(vec![4, 5, 6]);
        let native = bytes_to_native(&binary);
        assert_eq!(native.as_slice(), &[4, 5, 6]);
        assert_eq!(bytes_of_native(&native), binary);
    }
}
