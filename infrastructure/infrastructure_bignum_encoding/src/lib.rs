//! Infrastructure Layer: Bignum Encoding
//!
//! Converts between arbitrary-precision non-negative integers and their
//! little-endian byte representation, for callers that move large integers
//! across the native/managed boundary.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer in
//! the CLEAN architecture. It is domain-agnostic about what the integer means (field
//! element, scalar, nonce); it only fixes the byte order, the padding rule and the
//! overflow rule.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: `BignumCodec`, encode with an optional
//!   fixed target length and total decode.
//!
//! ## Format
//!
//! Byte `i` holds bits `8*i .. 8*i + 8` of the value. The minimal encoding has no
//! most-significant zero bytes, so zero encodes to the empty sequence. A target length
//! pads with zero bytes at the high end and fails with [`EncodeError::Overflow`] when the
//! minimal encoding does not fit.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): `BigNumber`, the
//!   signed value accepted by [`BignumCodec::encode_big_number`]

mod common;

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;

// Re-export error type for convenience
pub use common::EncodeError;

// Re-export byte conversion helpers
pub use common::{le_bytes_to_natural, natural_to_le_bytes};
