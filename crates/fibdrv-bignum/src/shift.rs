//! Sub-word bit shifts on the magnitude.

use crate::arith::WORD_BITS;
use crate::bignum::BigInt;
use crate::error::BnError;

fn check_shift(shift: u32) -> Result<(), BnError> {
    if shift >= WORD_BITS {
        return Err(BnError::InvalidArgument("shift must be below the word width"));
    }
    Ok(())
}

/// Shift the magnitude of `b` left by `shift` bits, `0 <= shift < 32`.
///
/// Grows `b` by one word when bits spill out of the top word.
pub fn shift_left(b: &mut BigInt, shift: u32) -> Result<(), BnError> {
    check_shift(shift)?;
    if shift == 0 {
        return Ok(());
    }
    b.trim();
    let top = b.digits()[b.size() - 1];
    if top >> (WORD_BITS - shift) != 0 {
        b.resize(b.size() + 1)?;
    }

    let digits = b.digits_mut();
    for i in (1..digits.len()).rev() {
        digits[i] = (digits[i] << shift) | (digits[i - 1] >> (WORD_BITS - shift));
    }
    digits[0] <<= shift;
    Ok(())
}

/// Shift the magnitude of `b` right by `shift` bits, `0 <= shift < 32`.
///
/// Drops high words that become zero, keeping at least one word.
pub fn shift_right(b: &mut BigInt, shift: u32) -> Result<(), BnError> {
    check_shift(shift)?;
    if shift == 0 {
        return Ok(());
    }

    let digits = b.digits_mut();
    let last = digits.len() - 1;
    for i in 0..last {
        digits[i] = (digits[i] >> shift) | (digits[i + 1] << (WORD_BITS - shift));
    }
    digits[last] >>= shift;
    b.trim();
    Ok(())
}
