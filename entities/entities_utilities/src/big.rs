//! Big Number Entity
//!
//! Provides a signed arbitrary-precision integer.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. A `BigNumber` may be negative; the little-endian codec only
//! accepts values that survive [`BigNumber::to_natural`].

use malachite::{Integer, Natural};
use std::fmt;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from Integer
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Create from a non-negative Natural
    pub fn from_natural(value: Natural) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Narrow to the non-negative domain
    ///
    /// Returns None if the value is negative.
    pub fn to_natural(&self) -> Option<Natural> {
        Natural::try_from(&self.value).ok()
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Natural> for BigNumber {
    fn from(value: Natural) -> Self {
        Self::from_natural(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_natural_rejects_negative() {
        assert_eq!(BigNumber::from_i64(-1).to_natural(), None);
        assert_eq!(BigNumber::from_i64(i64::MIN).to_natural(), None);
        assert_eq!(BigNumber::from_i64(0).to_natural(), Some(Natural::from(0u32)));
        assert_eq!(
            BigNumber::from_u64(u64::MAX).to_natural(),
            Some(Natural::from(u64::MAX))
        );
    }

    #[test]
    fn test_to_natural_wide_value() {
        let natural = Natural::from(1u32) << 300u64;
        let big = BigNumber::from_natural(natural.clone());
        assert_eq!(big.to_natural(), Some(natural));

        let negative = BigNumber::from_integer(-(Integer::from(1) << 300u64));
        assert_eq!(negative.to_natural(), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(BigNumber::from(7i64), BigNumber::from_i64(7));
        assert_eq!(BigNumber::from(7u64), BigNumber::from_u64(7));
        assert_eq!(BigNumber::from(Natural::from(7u32)), BigNumber::from_i64(7));
        assert_eq!(BigNumber::from(Integer::from(-7)), BigNumber::from_i64(-7));
        assert_eq!(BigNumber::from_i64(-42).to_string(), "-42");
    }
}
