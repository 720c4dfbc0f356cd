//! Multiplication strategies.
//!
//! `Multiplier` is the narrow interface the Fibonacci evaluators depend on.
//! `Schoolbook` is the reference algorithm; `Karatsuba` must produce
//! bit-identical products.

use crate::arith::{mul_add, zeroed_words, Word};
use crate::bignum::BigInt;
use crate::error::BnError;
use crate::karatsuba;

/// Default operand size (in words) below which Karatsuba falls back to
/// schoolbook multiplication.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 32;

/// Smallest threshold that still guarantees the Karatsuba recursion shrinks.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

/// Magnitude multiplication over word slices.
pub trait Multiplier: Send + Sync {
    /// Write `x * y` into `out`.
    ///
    /// `out` is zeroed and exactly `x.len() + y.len()` words long.
    fn multiply_words(&self, x: &[Word], y: &[Word], out: &mut [Word]) -> Result<(), BnError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Schoolbook O(n·m) multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct Schoolbook;

impl Multiplier for Schoolbook {
    fn multiply_words(&self, x: &[Word], y: &[Word], out: &mut [Word]) -> Result<(), BnError> {
        schoolbook(x, y, out);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Karatsuba multiplication with a schoolbook base case.
#[derive(Debug, Clone, Copy)]
pub struct Karatsuba {
    threshold: usize,
}

impl Karatsuba {
    /// Create a Karatsuba strategy switching to schoolbook below
    /// `threshold` words. Values below [`MIN_KARATSUBA_THRESHOLD`] are raised
    /// to it.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(MIN_KARATSUBA_THRESHOLD),
        }
    }

    /// The effective word threshold.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for Karatsuba {
    fn default() -> Self {
        Self::new(DEFAULT_KARATSUBA_THRESHOLD)
    }
}

impl Multiplier for Karatsuba {
    fn multiply_words(&self, x: &[Word], y: &[Word], out: &mut [Word]) -> Result<(), BnError> {
        karatsuba::multiply(x, y, out, self.threshold)
    }

    fn name(&self) -> &'static str {
        "Karatsuba"
    }
}

/// Accumulate `x * y` into `out` with one `u64` intermediate per word pair.
///
/// `out` must be zeroed and `x.len() + y.len()` words long.
pub(crate) fn schoolbook(x: &[Word], y: &[Word], out: &mut [Word]) {
    debug_assert_eq!(out.len(), x.len() + y.len());
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &yj) in y.iter().enumerate() {
            let (lo, hi) = mul_add(xi, yj, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        // Slot i + |y| has not been written by any earlier row.
        out[i + y.len()] = carry;
    }
}

/// `c = a * b` using schoolbook multiplication.
///
/// # Example
/// ```
/// use fibdrv_bignum::{multiply, BigInt};
///
/// let a = BigInt::from(u32::MAX);
/// let mut c = BigInt::zero();
/// multiply(&a, &a, &mut c).unwrap();
/// assert_eq!(c, BigInt::from(u64::from(u32::MAX) * u64::from(u32::MAX)));
/// ```
pub fn multiply(a: &BigInt, b: &BigInt, c: &mut BigInt) -> Result<(), BnError> {
    multiply_with(&Schoolbook, a, b, c)
}

/// `c = a * b` using the given strategy.
pub fn multiply_with(
    strategy: &dyn Multiplier,
    a: &BigInt,
    b: &BigInt,
    c: &mut BigInt,
) -> Result<(), BnError> {
    let x = a.magnitude();
    let y = b.magnitude();
    // Strategies may allocate scratch, so `c` is only replaced once the
    // whole product exists.
    let mut out = zeroed_words(x.len() + y.len())?;
    strategy.multiply_words(x, y, &mut out)?;
    c.replace(out, a.is_negative() ^ b.is_negative());
    Ok(())
}
