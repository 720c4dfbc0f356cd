//! # fibdrv-core
//!
//! Fibonacci evaluators over the `fibdrv-bignum` engine: fast doubling (with
//! schoolbook or Karatsuba multiplication), a linear baseline, a fixed-width
//! table and a decimal-string adder. All of them implement [`Calculator`] and
//! are reachable by name through [`DefaultFactory`].

pub mod calculator;
pub mod constants;
pub mod decimal;
pub mod fastdoubling;
pub mod fixed;
pub mod generator;
pub mod linear;
pub mod registry;

// Re-exports
pub use calculator::{Calculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, KARATSUBA_THRESHOLD, MAX_FIB_U64};
pub use decimal::{fib_decimal, DecimalString};
pub use fastdoubling::{fibonacci_doubling, fibonacci_doubling_with, FastDoubling};
pub use fixed::FixedWidth;
pub use generator::{cross_check, generate, generate_parallel};
pub use linear::{fibonacci_linear, LinearIteration};
pub use registry::{select, CalculatorFactory, DefaultFactory};

use fibdrv_bignum::BigInt;

/// Compute F(n) using the fast doubling algorithm.
///
/// This is a convenience function for simple use cases. Use the
/// [`Calculator`] implementations directly to pick another algorithm.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fibdrv_core::fibonacci(0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<BigInt, FibError> {
    FastDoubling::new().calculate(n)
}
