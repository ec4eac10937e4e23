//! API Facades Layer
//!
//! Provides the entry points an external serialization layer calls when it
//! moves a bignum across the native/managed boundary.
//!
//! All facades delegate to inner layers and add no semantics of their own.

pub mod bigint_facades;

pub use bigint_facades::*;
