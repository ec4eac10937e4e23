//! Entities Layer: Utilities
//!
//! Provides the signed big number entity held by callers before a value is
//! narrowed to the non-negative domain of the bignum codec.

pub mod big;

pub use big::BigNumber;
