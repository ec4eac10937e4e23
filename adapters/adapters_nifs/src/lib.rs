//! Adapters Layer: NIFs (Native Implemented Functions)
//!
//! Moves raw bytes between the managed runtime's byte type and native
//! fixed-width byte arrays.
//!
//! ## Overview
//!
//! The `adapters_nifs` crate is part of the adapters layer in the CLEAN
//! architecture. Copies here are 1:1 and index-preserving: byte `i` on one
//! side is byte `i` on the other, and no value is transformed. Interpreting
//! the bytes (for example as a little-endian bignum) is the job of the
//! caller.
//!
//! ## Modules
//!
//! - **[`buffer`](buffer/index.html)**: `NativeBuffer` and the `BufferNif` copy
//!   routines
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): `Binary`,
//!   the managed side of every copy
//! - [`infrastructure_bignum_encoding`](../../infrastructure/infrastructure_bignum_encoding/index.html):
//!   Codec for the bytes carried through these buffers

pub mod buffer;

pub use buffer::{BufferNif, BufferNifError, NativeBuffer};
