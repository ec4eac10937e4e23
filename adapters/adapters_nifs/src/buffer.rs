//! Buffer NIF Module
//!
//! Provides byte copies between managed binaries and native buffers.

use entities_data_handling::Binary;
use std::fmt;
use tracing::trace;

/// Native fixed-width byte array
///
/// The length is set at construction and never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NativeBuffer {
    data: Box<[u8]>,
}

impl NativeBuffer {
    /// Create a buffer of `len` zero bytes
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0; len].into_boxed_slice(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for NativeBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for NativeBuffer {
    fn from(data: &[u8]) -> Self {
        Self { data: data.into() }
    }
}

impl<const N: usize> From<[u8; N]> for NativeBuffer {
    fn from(data: [u8; N]) -> Self {
        Self {
            data: Box::new(data),
        }
    }
}

/// Buffer NIF operations
pub struct BufferNif;

impl BufferNif {
    /// Copy a native buffer into a new managed binary
    ///
    /// Never fails; the binary has the same length and the same byte at
    /// every index.
    ///
    /// # Examples
    /// ```
    /// use adapters_nifs::{BufferNif, NativeBuffer};
    ///
    /// let native = NativeBuffer::from([0u8, 1, 0, 0]);
    /// let binary = BufferNif::binary_from_native(&native);
    /// assert_eq!(binary.data(), &[0, 1, 0, 0]);
    /// ```
    pub fn binary_from_native(native: &NativeBuffer) -> Binary {
        trace!(len = native.len(), "copy native -> binary");
        Binary::new(native.as_slice().to_vec())
    }

    /// Copy a managed binary into a new native buffer
    ///
    /// Never fails; inverse of [`Self::binary_from_native`].
    pub fn native_from_binary(binary: &Binary) -> NativeBuffer {
        trace!(len = binary.len(), "copy binary -> native");
        NativeBuffer::from(binary.data())
    }

    /// Copy a managed binary into an array of statically known width
    ///
    /// # Returns
    /// * `Ok([u8; N])` - The binary's bytes, index for index
    /// * `Err(BufferNifError::LengthMismatch)` - The binary is not exactly `N` bytes
    pub fn copy_to_array<const N: usize>(binary: &Binary) -> Result<[u8; N], BufferNifError> {
        trace!(len = binary.len(), width = N, "copy binary -> array");
        <[u8; N]>::try_from(binary.data()).map_err(|_| BufferNifError::LengthMismatch {
            expected: N,
            actual: binary.len(),
        })
    }
}

/// Buffer NIF operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferNifError {
    /// Source length differs from the fixed destination width
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BufferNifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferNifError::LengthMismatch { expected, actual } => write!(
                f,
                "buffer length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for BufferNifError {}
