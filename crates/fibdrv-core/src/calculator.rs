//! The `Calculator` trait and its error type.
//!
//! Every evaluator in this crate is exposed through `Calculator` so the
//! registry, the sequence generators and the device can treat them uniformly.

use fibdrv_bignum::{BigInt, BnError};

/// Error type for Fibonacci calculations.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The big integer engine failed (allocation, invalid argument).
    #[error(transparent)]
    Bignum(#[from] BnError),

    /// The requested index does not fit the calculator's fixed-width result.
    #[error("F({n}) overflows a {bits}-bit result")]
    Overflow {
        /// Requested index.
        n: u64,
        /// Width of the calculator's native result.
        bits: u32,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms at n={n}: {left} != {right}")]
    Mismatch {
        /// Index at which the results diverged.
        n: u64,
        /// Name of the first calculator.
        left: String,
        /// Name of the disagreeing calculator.
        right: String,
    },
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<BigInt, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}
