//! The `BigInt` value type and its lifecycle.
//!
//! A `BigInt` is a sign flag plus a little-endian sequence of 32-bit words.
//! Results of arithmetic are kept minimally sized: the only value allowed a
//! most significant zero word is zero itself, held as a single `0` word.
//! A value returned by [`BigInt::allocate`] with more than one word is
//! zero-valued scratch until the first operation writes to it.

use std::cmp::Ordering;
use std::fmt;

use crate::arith::{reserve_words, significant_len, zeroed_words, Word};
use crate::compare::compare_value;
use crate::error::BnError;

/// Signed arbitrary-precision integer.
#[derive(Clone, Debug)]
pub struct BigInt {
    digits: Vec<Word>,
    sign: bool,
}

impl BigInt {
    /// Allocate a zero value holding `size` words.
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let b = BigInt::allocate(4).unwrap();
    /// assert_eq!(b.size(), 4);
    /// assert!(b.is_zero());
    /// assert!(BigInt::allocate(0).is_err());
    /// ```
    pub fn allocate(size: usize) -> Result<Self, BnError> {
        if size == 0 {
            return Err(BnError::InvalidArgument("size must be at least one word"));
        }
        let digits = zeroed_words(size)?;
        Ok(Self {
            digits,
            sign: false,
        })
    }

    /// Release the value held by `slot`.
    ///
    /// Releasing an empty slot is reported as [`BnError::Released`] rather
    /// than ignored.
    pub fn release(slot: &mut Option<BigInt>) -> Result<(), BnError> {
        match slot.take() {
            Some(value) => {
                drop(value);
                Ok(())
            }
            None => Err(BnError::Released),
        }
    }

    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            digits: vec![0],
            sign: false,
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            digits: vec![1],
            sign: false,
        }
    }

    /// Build a value from little-endian words and a sign, trimming leading
    /// zero words.
    #[must_use]
    pub fn from_words(mut digits: Vec<Word>, negative: bool) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        let mut value = Self {
            digits,
            sign: negative,
        };
        value.trim();
        value
    }

    /// Number of words currently held.
    #[must_use]
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// The words, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[Word] {
        &self.digits
    }

    /// Whether the sign flag is set. Always `false` for zero results.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// Whether every word is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&w| w == 0)
    }

    /// Flip the sign. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
    }

    /// Number of significant bits in the magnitude.
    #[must_use]
    pub fn bits(&self) -> u64 {
        let len = significant_len(&self.digits);
        if len == 0 {
            return 0;
        }
        let top = self.digits[len - 1];
        (len as u64) * u64::from(Word::BITS) - u64::from(top.leading_zeros())
    }

    /// Make `self` an independent copy of `src`.
    pub fn copy_from(&mut self, src: &BigInt) -> Result<(), BnError> {
        let out = self.reset(src.size())?;
        out.copy_from_slice(&src.digits);
        self.sign = src.sign;
        Ok(())
    }

    /// Exchange buffers, sizes and signs with `other` without copying words.
    pub fn swap(&mut self, other: &mut BigInt) {
        std::mem::swap(self, other);
    }

    /// Grow or shrink the word buffer to `new_size` words.
    ///
    /// Low-order words are preserved and new high-order words are zero. A
    /// shrink truncates and then drops any leading zero words it exposed.
    pub fn resize(&mut self, new_size: usize) -> Result<(), BnError> {
        if new_size == 0 {
            return Err(BnError::InvalidArgument("size must be at least one word"));
        }
        match new_size.cmp(&self.digits.len()) {
            Ordering::Greater => {
                let additional = new_size - self.digits.len();
                reserve_words(&mut self.digits, additional, new_size)?;
                self.digits.resize(new_size, 0);
            }
            Ordering::Less => {
                self.digits.truncate(new_size);
                self.trim();
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Drop leading zero words, keeping at least one, and clear the sign of
    /// a zero value.
    pub fn trim(&mut self) {
        let len = significant_len(&self.digits).max(1);
        self.digits.truncate(len);
        if len == 1 && self.digits[0] == 0 {
            self.sign = false;
        }
    }

    /// The significant words of the magnitude, at least one word long.
    pub(crate) fn magnitude(&self) -> &[Word] {
        &self.digits[..significant_len(&self.digits).max(1)]
    }

    /// Discard the current value and return exactly `len` zeroed words to
    /// write a result into.
    ///
    /// Capacity is reserved before anything is cleared, so on failure `self`
    /// still holds its previous value.
    pub(crate) fn reset(&mut self, len: usize) -> Result<&mut [Word], BnError> {
        debug_assert!(len > 0);
        let additional = len.saturating_sub(self.digits.len());
        reserve_words(&mut self.digits, additional, len)?;
        self.digits.clear();
        self.digits.resize(len, 0);
        Ok(&mut self.digits)
    }

    /// Replace the magnitude with `words` and the sign with `negative`.
    pub(crate) fn replace(&mut self, words: Vec<Word>, negative: bool) {
        self.digits = words;
        self.sign = negative;
        self.trim();
    }

    pub(crate) fn digits_mut(&mut self) -> &mut [Word] {
        &mut self.digits
    }

    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.sign = negative;
    }
}

/// Make `dest` an independent copy of `src`.
pub fn copy(dest: &mut BigInt, src: &BigInt) -> Result<(), BnError> {
    dest.copy_from(src)
}

/// Exchange two values in constant time.
pub fn swap(a: &mut BigInt, b: &mut BigInt) {
    a.swap(b);
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self {
            digits: vec![value],
            sign: false,
        }
    }
}

impl From<u64> for BigInt {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u64) -> Self {
        Self::from_words(vec![value as Word, (value >> Word::BITS) as Word], false)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let mut b = Self::from(value.unsigned_abs());
        if value < 0 {
            b.negate();
        }
        b
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let neg_a = self.sign && !self.is_zero();
        let neg_b = other.sign && !other.is_zero();
        match (neg_a, neg_b) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_value(self, other),
            (true, true) => compare_value(other, self),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}
