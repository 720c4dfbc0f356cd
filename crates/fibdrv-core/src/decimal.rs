//! Decimal-string evaluator.
//!
//! Adds Fibonacci numbers directly as ASCII digit strings, least significant
//! digit first, without any binary arithmetic.

use fibdrv_bignum::BigInt;

use crate::calculator::{Calculator, FibError};

/// `a + b` for least-significant-first decimal digit buffers.
fn add_decimal(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u8;
    for (i, &d) in long.iter().enumerate() {
        let mut sum = d + short.get(i).copied().unwrap_or(0) + carry;
        carry = u8::from(sum >= 10);
        if carry == 1 {
            sum -= 10;
        }
        out.push(sum);
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// F(n) as a decimal string.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::decimal::fib_decimal(10), "55");
/// ```
#[must_use]
pub fn fib_decimal(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut a: Vec<u8> = vec![0];
    let mut b: Vec<u8> = vec![1];
    for _ in 1..n {
        let next = add_decimal(&a, &b);
        a = std::mem::replace(&mut b, next);
    }
    b.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

/// Calculator wrapping [`fib_decimal`]; the digits are parsed back into a
/// [`BigInt`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalString;

impl DecimalString {
    /// Create the decimal string calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for DecimalString {
    fn calculate(&self, n: u64) -> Result<BigInt, FibError> {
        fib_decimal(n)
            .parse::<BigInt>()
            .map_err(FibError::from)
    }

    fn name(&self) -> &'static str {
        "DecimalString"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn add_decimal_carries() {
        assert_eq!(add_decimal(&[9, 9], &[1]), vec![0, 0, 1]);
        assert_eq!(add_decimal(&[5], &[5]), vec![0, 1]);
        assert_eq!(add_decimal(&[1], &[2, 3]), vec![3, 3]);
    }

    #[test]
    fn matches_table() {
        for (n, expected) in (0u64..).zip(FIB_TABLE.iter()) {
            assert_eq!(fib_decimal(n), expected.to_string(), "F({n})");
        }
    }

    #[test]
    fn long_values() {
        let s = fib_decimal(1500);
        assert_eq!(s.len(), 314);
        assert!(s.starts_with("1355112566856310195163"));
    }

    #[test]
    fn calculator_parses_digits() {
        assert_eq!(
            DecimalString.calculate(100).unwrap().to_string(),
            "354224848179261915075"
        );
    }
}
