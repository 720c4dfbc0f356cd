//! Magnitude comparison.
//!
//! Two comparators live here and they are not interchangeable:
//! [`compare_magnitude_length`] looks at word counts only, while
//! [`compare_value`] orders the actual magnitudes.

use std::cmp::Ordering;

use crate::arith::{significant_len, Word};
use crate::bignum::BigInt;

/// Compare two values by word count only.
///
/// Equal word counts report `Equal` whatever the digits are.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use fibdrv_bignum::{compare_magnitude_length, BigInt};
///
/// let a = BigInt::from(1u32);
/// let b = BigInt::from(9u32);
/// assert_eq!(compare_magnitude_length(&a, &b), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_magnitude_length(a: &BigInt, b: &BigInt) -> Ordering {
    a.size().cmp(&b.size())
}

/// Compare the magnitudes `|a|` and `|b|`, ignoring signs.
#[must_use]
pub fn compare_value(a: &BigInt, b: &BigInt) -> Ordering {
    compare_words(a.digits(), b.digits())
}

/// Compare two little-endian word slices numerically. Leading zero words
/// are ignored.
#[must_use]
pub fn compare_words(a: &[Word], b: &[Word]) -> Ordering {
    let a_len = significant_len(a);
    let b_len = significant_len(b);
    if a_len != b_len {
        return a_len.cmp(&b_len);
    }
    for i in (0..a_len).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
