//! Decimal rendering and parsing.

use std::str::FromStr;

use crate::arith::{div_rem_word, mul_add_word, reserve_words, significant_len, Word};
use crate::bignum::BigInt;
use crate::error::BnError;

/// Largest power of ten that fits in a word.
const DECIMAL_CHUNK: Word = 1_000_000_000;

/// Decimal digits per chunk.
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Render `src` in base 10, with a leading `-` when negative.
///
/// # Example
/// ```
/// use fibdrv_bignum::{render, BigInt};
///
/// assert_eq!(render(&BigInt::allocate(1).unwrap()), "0");
/// assert_eq!(render(&BigInt::from(-1234567890123i64)), "-1234567890123");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn render(src: &BigInt) -> String {
    let mut mag = src.magnitude().to_vec();
    let mut len = significant_len(&mag);
    if len == 0 {
        return "0".to_string();
    }

    // Least significant digit first.
    let mut digits: Vec<u8> = Vec::with_capacity(len * 10 + 1);
    while len > 0 {
        let mut rem = div_rem_word(&mut mag[..len], DECIMAL_CHUNK);
        len = significant_len(&mag[..len]);
        let last = len == 0;
        for _ in 0..DECIMAL_CHUNK_DIGITS {
            digits.push(b'0' + (rem % 10) as u8);
            rem /= 10;
            if last && rem == 0 {
                break;
            }
        }
    }
    if src.is_negative() {
        digits.push(b'-');
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

impl FromStr for BigInt {
    type Err = BnError;

    /// Parse a decimal numeral with an optional leading `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BnError::Parse(s.to_string()));
        }

        let mut words: Vec<Word> = vec![0];
        for chunk in body.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let mut scale: Word = 1;
            let mut value: Word = 0;
            for &b in chunk {
                scale *= 10;
                value = value * 10 + Word::from(b - b'0');
            }
            let carry = mul_add_word(&mut words, scale, value);
            if carry != 0 {
                let grown = words.len() + 1;
                reserve_words(&mut words, 1, grown)?;
                words.push(carry);
            }
        }
        Ok(BigInt::from_words(words, negative))
    }
}
