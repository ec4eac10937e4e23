//! Entities Layer: Data Handling
//!
//! Provides the managed byte type used on the runtime side of the native
//! boundary.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer in the CLEAN architecture.
//! As the innermost layer, it has no dependencies on other crates in the workspace.
//!
//! ## Modules
//!
//! - **[`binary`](binary/index.html)**: Owned, growable byte string held by the managed
//!   runtime. Bignums travel across the boundary as the little-endian contents of a `Binary`.
//!
//! ## See Also
//!
//! - [`adapters_nifs`](../../adapters/adapters_nifs/index.html): Copies between `Binary` and
//!   native fixed-width buffers

pub mod binary;

pub use binary::Binary;
