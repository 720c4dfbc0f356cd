//! Sign-aware addition and subtraction.

use std::cmp::Ordering;

use crate::arith::{add_with_carry, sub_with_borrow, Word};
use crate::bignum::BigInt;
use crate::compare::compare_words;
use crate::error::BnError;

/// `c = a + b`.
///
/// # Example
/// ```
/// use fibdrv_bignum::{add, BigInt};
///
/// let a = BigInt::from(u32::MAX);
/// let b = BigInt::from(1u32);
/// let mut c = BigInt::zero();
/// add(&a, &b, &mut c).unwrap();
/// assert_eq!(c.digits(), &[0, 1]);
/// ```
pub fn add(a: &BigInt, b: &BigInt, c: &mut BigInt) -> Result<(), BnError> {
    signed_add(a, b.magnitude(), b.is_negative(), c)
}

/// `c = a - b`, computed as `a + (-b)` without materializing `-b`.
pub fn subtract(a: &BigInt, b: &BigInt, c: &mut BigInt) -> Result<(), BnError> {
    signed_add(a, b.magnitude(), !b.is_negative(), c)
}

fn signed_add(a: &BigInt, y: &[Word], y_negative: bool, c: &mut BigInt) -> Result<(), BnError> {
    let x = a.magnitude();
    let x_negative = a.is_negative();

    if x_negative == y_negative {
        add_magnitudes(x, y, c)?;
        c.set_negative(x_negative);
    } else if compare_words(x, y) == Ordering::Less {
        sub_magnitudes(y, x, c)?;
        c.set_negative(y_negative);
    } else {
        sub_magnitudes(x, y, c)?;
        c.set_negative(x_negative);
    }
    c.trim();
    Ok(())
}

/// `c = |x| + |y|`, sized `max(|x|, |y|) + 1` before trimming.
fn add_magnitudes(x: &[Word], y: &[Word], c: &mut BigInt) -> Result<(), BnError> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let out = c.reset(long.len() + 1)?;

    let mut carry = 0;
    for (i, &l) in long.iter().enumerate() {
        let s = short.get(i).copied().unwrap_or(0);
        let (sum, k) = add_with_carry(l, s, carry);
        out[i] = sum;
        carry = k;
    }
    out[long.len()] = carry;
    Ok(())
}

/// `c = |x| - |y|` for `|x| >= |y|`.
fn sub_magnitudes(x: &[Word], y: &[Word], c: &mut BigInt) -> Result<(), BnError> {
    debug_assert!(compare_words(x, y) != Ordering::Less);
    let out = c.reset(x.len())?;

    let mut borrow = 0;
    for (i, &xi) in x.iter().enumerate() {
        let yi = y.get(i).copied().unwrap_or(0);
        let (diff, k) = sub_with_borrow(xi, yi, borrow);
        out[i] = diff;
        borrow = k;
    }
    debug_assert_eq!(borrow, 0);
    Ok(())
}
