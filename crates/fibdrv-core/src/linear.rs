//! Linear evaluator, the O(n) correctness baseline.

use fibdrv_bignum::{add, BigInt, BnError};
use tracing::trace;

use crate::calculator::{Calculator, FibError};

/// `dest = F(n)` using `n - 1` big integer additions.
pub fn fibonacci_linear(dest: &mut BigInt, n: u64) -> Result<(), BnError> {
    if n < 2 {
        return dest.copy_from(&BigInt::from(n));
    }

    let mut a = BigInt::zero();
    let mut b = BigInt::one();
    let mut next = BigInt::zero();
    for _ in 1..n {
        add(&a, &b, &mut next)?;
        a.swap(&mut b);
        b.swap(&mut next);
    }

    dest.swap(&mut b);
    Ok(())
}

/// Calculator wrapping [`fibonacci_linear`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearIteration;

impl LinearIteration {
    /// Create the linear iteration calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for LinearIteration {
    fn calculate(&self, n: u64) -> Result<BigInt, FibError> {
        let mut dest = BigInt::zero();
        fibonacci_linear(&mut dest, n)?;
        trace!(n, bits = dest.bits(), "linear iteration done");
        Ok(dest)
    }

    fn name(&self) -> &'static str {
        "LinearIteration"
    }
}
