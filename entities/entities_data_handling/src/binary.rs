//! Binary Operations Module
//!
//! Provides the managed-runtime byte string.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

/// Managed byte string
///
/// Index `i` of a `Binary` is byte `i` of whatever the runtime stored; no
/// interpretation (endianness, sign) is attached at this layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Binary {
    data: Vec<u8>,
}

impl Binary {
    /// Create a binary that takes ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a binary of `len` zero bytes
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0; len] }
    }

    /// Get binary data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Binary {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Binary {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_creation() {
        let data = vec![1, 2, 3, 4];
        let binary = Binary::new(data.clone());
        assert_eq!(binary.data(), &data);
        assert_eq!(binary.len(), 4);
        assert!(!binary.is_empty());
    }

    #[test]
    fn test_binary_zeroed() {
        let binary = Binary::zeroed(5);
        assert_eq!(binary.data(), &[0, 0, 0, 0, 0]);

        let empty = Binary::zeroed(0);
        assert!(empty.is_empty());
        assert_eq!(empty, Binary::default());
    }

    #[test]
    fn test_binary_from_slice() {
        let bytes: &[u8] = &[9, 8, 7];
        let binary = Binary::from(bytes);
        assert_eq!(binary.data(), bytes);
        assert_eq!(Binary::from(vec![9, 8, 7]), binary);
    }
}
