//! Fast doubling evaluator.
//!
//! Walks the bits of `n` from the most significant end, keeping the pair
//! `(F(k), F(k+1))` and applying
//!
//! ```text
//! F(2k)   = F(k) · (2·F(k+1) − F(k))
//! F(2k+1) = F(k)² + F(k+1)²
//! ```
//!
//! at every bit, then one additive step when the bit is set.

use fibdrv_bignum::{
    add, multiply_with, shift_left, subtract, BigInt, BnError, Karatsuba, Multiplier, Schoolbook,
};
use tracing::trace;

use crate::calculator::{Calculator, FibError};

/// Working set for one evaluation. Every slot is an independent value.
struct DoublingState {
    fk: BigInt,
    fk1: BigInt,
    t1: BigInt,
    t2: BigInt,
    f2k: BigInt,
    f2k1: BigInt,
}

impl DoublingState {
    fn new() -> Self {
        Self {
            fk: BigInt::zero(),
            fk1: BigInt::one(),
            t1: BigInt::zero(),
            t2: BigInt::zero(),
            f2k: BigInt::zero(),
            f2k1: BigInt::zero(),
        }
    }

    /// `(F(k), F(k+1))` → `(F(2k), F(2k+1))`, or `(F(2k+1), F(2k+2))` when
    /// `bit` is set.
    fn step(&mut self, multiplier: &dyn Multiplier, bit: bool) -> Result<(), BnError> {
        // t2 = 2·F(k+1) − F(k), never negative.
        self.t1.copy_from(&self.fk1)?;
        shift_left(&mut self.t1, 1)?;
        subtract(&self.t1, &self.fk, &mut self.t2)?;

        multiply_with(multiplier, &self.fk, &self.t2, &mut self.f2k)?;

        multiply_with(multiplier, &self.fk, &self.fk, &mut self.t1)?;
        multiply_with(multiplier, &self.fk1, &self.fk1, &mut self.t2)?;
        add(&self.t1, &self.t2, &mut self.f2k1)?;

        if bit {
            add(&self.f2k, &self.f2k1, &mut self.fk1)?;
            self.fk.swap(&mut self.f2k1);
        } else {
            self.fk.swap(&mut self.f2k);
            self.fk1.swap(&mut self.f2k1);
        }
        Ok(())
    }
}

/// `dest = F(n)` by fast doubling with schoolbook multiplication.
///
/// # Example
/// ```
/// use fibdrv_bignum::{render, BigInt};
/// use fibdrv_core::fastdoubling::fibonacci_doubling;
///
/// let mut dest = BigInt::zero();
/// fibonacci_doubling(&mut dest, 100).unwrap();
/// assert_eq!(render(&dest), "354224848179261915075");
/// ```
pub fn fibonacci_doubling(dest: &mut BigInt, n: u64) -> Result<(), BnError> {
    fibonacci_doubling_with(&Schoolbook, dest, n)
}

/// `dest = F(n)` by fast doubling with the given multiplication strategy.
pub fn fibonacci_doubling_with(
    multiplier: &dyn Multiplier,
    dest: &mut BigInt,
    n: u64,
) -> Result<(), BnError> {
    if n < 2 {
        return dest.copy_from(&BigInt::from(n));
    }

    let mut state = DoublingState::new();
    let num_bits = u64::BITS - n.leading_zeros();
    for i in (0..num_bits).rev() {
        state.step(multiplier, (n >> i) & 1 == 1)?;
    }

    dest.swap(&mut state.fk);
    Ok(())
}

/// Fast doubling calculator, parameterized by its multiplication strategy.
pub struct FastDoubling {
    multiplier: Box<dyn Multiplier>,
    name: &'static str,
}

impl FastDoubling {
    /// Fast doubling over schoolbook multiplication.
    #[must_use]
    pub fn new() -> Self {
        Self {
            multiplier: Box::new(Schoolbook),
            name: "FastDoubling",
        }
    }

    /// Fast doubling over Karatsuba multiplication.
    #[must_use]
    pub fn with_karatsuba(threshold: usize) -> Self {
        Self {
            multiplier: Box::new(Karatsuba::new(threshold)),
            name: "FastDoublingKaratsuba",
        }
    }

    /// Name of the multiplication strategy in use.
    #[must_use]
    pub fn multiplier_name(&self) -> &str {
        self.multiplier.name()
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn calculate(&self, n: u64) -> Result<BigInt, FibError> {
        let mut dest = BigInt::zero();
        fibonacci_doubling_with(self.multiplier.as_ref(), &mut dest, n)?;
        trace!(n, algorithm = self.name, bits = dest.bits(), "fast doubling done");
        Ok(dest)
    }

    fn name(&self) -> &str {
        self.name
    }
}
