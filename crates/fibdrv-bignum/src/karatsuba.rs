//! Karatsuba multiplication over word slices.

use crate::arith::{add_assign_words, significant_len, sub_assign_words, zeroed_words, Word};
use crate::error::BnError;
use crate::multiply::schoolbook;

/// Write `x * y` into the zeroed `out` of length `x.len() + y.len()`.
///
/// Splits both operands at `half = max(|x|, |y|) / 2` words:
///   x * y = z2·B^(2·half) + z1·B^half + z0
///   z1    = (x0 + x1)(y0 + y1) - z0 - z2
pub(crate) fn multiply(
    x: &[Word],
    y: &[Word],
    out: &mut [Word],
    threshold: usize,
) -> Result<(), BnError> {
    debug_assert_eq!(out.len(), x.len() + y.len());
    let short = x.len().min(y.len());
    let half = x.len().max(y.len()) / 2;
    if short < threshold || short <= half {
        schoolbook(x, y, out);
        return Ok(());
    }

    let (x0, x1) = x.split_at(half);
    let (y0, y1) = y.split_at(half);

    // z0 and z2 occupy disjoint ranges of `out`.
    {
        let (lo, hi) = out.split_at_mut(2 * half);
        multiply(x0, y0, lo, threshold)?;
        multiply(x1, y1, hi, threshold)?;
    }

    let sx = sum_words(x0, x1)?;
    let sy = sum_words(y0, y1)?;
    let mut z1 = zeroed_words(sx.len() + sy.len())?;
    multiply(&sx, &sy, &mut z1, threshold)?;

    let (z0, z2) = out.split_at(2 * half);
    let borrow = sub_assign_words(&mut z1, z0) + sub_assign_words(&mut z1, z2);
    debug_assert_eq!(borrow, 0);

    let len = significant_len(&z1);
    let carry = add_assign_words(&mut out[half..], &z1[..len]);
    debug_assert_eq!(carry, 0);
    Ok(())
}

/// `a + b` into a fresh buffer one word longer than the longer operand.
fn sum_words(a: &[Word], b: &[Word]) -> Result<Vec<Word>, BnError> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = zeroed_words(long.len() + 1)?;
    out[..long.len()].copy_from_slice(long);
    let carry = add_assign_words(&mut out, short);
    debug_assert_eq!(carry, 0);
    Ok(out)
}
