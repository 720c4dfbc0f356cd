//! Word-level arithmetic primitives.
//!
//! All helpers work on little-endian `u32` word slices and use `u64` as the
//! double-width intermediate.

use crate::error::BnError;

/// A single digit word.
pub type Word = u32;

/// Bits per word.
pub const WORD_BITS: u32 = Word::BITS;

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let sum = u64::from(a) + u64::from(b) + u64::from(carry);
    (sum as Word, (sum >> WORD_BITS) as Word)
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
#[inline]
#[must_use]
pub fn sub_with_borrow(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let (d1, o1) = a.overflowing_sub(b);
    let (d2, o2) = d1.overflowing_sub(borrow);
    (d2, Word::from(o1 | o2))
}

/// Multiply-accumulate: a * b + acc + carry -> (low, high)
///
/// Never overflows: (2^32-1)^2 + 2*(2^32-1) == 2^64-1.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add(a: Word, b: Word, acc: Word, carry: Word) -> (Word, Word) {
    let t = u64::from(a) * u64::from(b) + u64::from(acc) + u64::from(carry);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Number of words up to and including the most significant non-zero word.
#[must_use]
pub fn significant_len(words: &[Word]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Add `src` into `dst` in place, propagating carry through the rest of
/// `dst`. Returns the carry out of `dst`.
pub fn add_assign_words(dst: &mut [Word], src: &[Word]) -> Word {
    debug_assert!(src.len() <= dst.len());
    let mut carry = 0;
    for (d, &s) in dst.iter_mut().zip(src) {
        let (sum, c) = add_with_carry(*d, s, carry);
        *d = sum;
        carry = c;
    }
    for d in dst.iter_mut().skip(src.len()) {
        if carry == 0 {
            break;
        }
        let (sum, c) = add_with_carry(*d, 0, carry);
        *d = sum;
        carry = c;
    }
    carry
}

/// Subtract `src` from `dst` in place, propagating borrow through the rest
/// of `dst`. Returns the borrow out of `dst`.
pub fn sub_assign_words(dst: &mut [Word], src: &[Word]) -> Word {
    debug_assert!(src.len() <= dst.len());
    let mut borrow = 0;
    for (d, &s) in dst.iter_mut().zip(src) {
        let (diff, b) = sub_with_borrow(*d, s, borrow);
        *d = diff;
        borrow = b;
    }
    for d in dst.iter_mut().skip(src.len()) {
        if borrow == 0 {
            break;
        }
        let (diff, b) = sub_with_borrow(*d, 0, borrow);
        *d = diff;
        borrow = b;
    }
    borrow
}

/// Divide `words` in place by a single-word divisor, returning the remainder.
#[allow(clippy::cast_possible_truncation)]
pub fn div_rem_word(words: &mut [Word], divisor: Word) -> Word {
    debug_assert!(divisor != 0);
    let d = u64::from(divisor);
    let mut rem = 0u64;
    for w in words.iter_mut().rev() {
        let num = (rem << WORD_BITS) | u64::from(*w);
        *w = (num / d) as Word;
        rem = num % d;
    }
    rem as Word
}

/// Multiply `words` in place by `factor` and add `addend`, returning the
/// word carried out of the top.
pub fn mul_add_word(words: &mut [Word], factor: Word, addend: Word) -> Word {
    let mut carry = addend;
    for w in words.iter_mut() {
        let (lo, hi) = mul_add(*w, factor, 0, carry);
        *w = lo;
        carry = hi;
    }
    carry
}

/// Allocate `len` zeroed words, reporting reservation failure.
pub fn zeroed_words(len: usize) -> Result<Vec<Word>, BnError> {
    let mut words = Vec::new();
    reserve_words(&mut words, len, len)?;
    words.resize(len, 0);
    Ok(words)
}

/// Reserve room for `additional` more words in `buf`.
///
/// Failure is reported as `Alloc { words }`, where `words` is the size the
/// caller was growing to. `buf` is untouched on failure.
pub(crate) fn reserve_words(
    buf: &mut Vec<Word>,
    additional: usize,
    words: usize,
) -> Result<(), BnError> {
    #[cfg(test)]
    if failing_alloc::armed() {
        return Err(BnError::Alloc { words });
    }
    buf.try_reserve_exact(additional)
        .map_err(|_| BnError::Alloc { words })
}
