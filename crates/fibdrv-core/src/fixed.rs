//! Fixed-width evaluator backed by the precomputed `u64` table.

use fibdrv_bignum::BigInt;

use crate::calculator::{Calculator, FibError};
use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Table lookup for `n <= 93`; larger indices overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidth;

impl FixedWidth {
    /// Create the 64-bit fixed-width calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// F(n) as a machine word, or `None` past [`MAX_FIB_U64`].
    #[must_use]
    pub fn lookup(n: u64) -> Option<u64> {
        usize::try_from(n).ok().and_then(|i| FIB_TABLE.get(i)).copied()
    }
}

impl Calculator for FixedWidth {
    fn calculate(&self, n: u64) -> Result<BigInt, FibError> {
        Self::lookup(n)
            .map(BigInt::from)
            .ok_or(FibError::Overflow { n, bits: u64::BITS })
    }

    fn name(&self) -> &'static str {
        "FixedWidth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_bounds() {
        assert_eq!(FixedWidth::lookup(0), Some(0));
        assert_eq!(FixedWidth::lookup(MAX_FIB_U64), Some(12_200_160_415_121_876_738));
        assert_eq!(FixedWidth::lookup(MAX_FIB_U64 + 1), None);
        assert_eq!(FixedWidth::lookup(u64::MAX), None);
    }

    #[test]
    fn overflow_past_93() {
        let err = FixedWidth.calculate(94).unwrap_err();
        assert!(matches!(err, FibError::Overflow { n: 94, bits: 64 }));
    }

    #[test]
    fn calculate_small() {
        assert_eq!(FixedWidth.calculate(20).unwrap(), BigInt::from(6765u32));
    }
}
