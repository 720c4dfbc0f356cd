#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt as Oracle, BigUint, Sign};

use fibdrv_bignum::{add, multiply, multiply_with, shift_left, subtract, BigInt, Karatsuba};

fn oracle(b: &BigInt) -> Oracle {
    let sign = if b.is_negative() { Sign::Minus } else { Sign::Plus };
    Oracle::from_biguint(sign, BigUint::new(b.digits().to_vec()))
}

fn operand(bytes: &[u8], negative: bool) -> BigInt {
    let words = bytes
        .chunks(4)
        .map(|c| c.iter().rev().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
        .collect::<Vec<_>>();
    if words.is_empty() {
        return BigInt::zero();
    }
    BigInt::from_words(words, negative)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let flags = data[0];
    let split = 1 + usize::from(data[1]).min(data.len() - 2);
    let (left, right) = data[2..].split_at(split - 1);
    let a = operand(left, flags & 1 == 1);
    let b = operand(right, flags & 2 == 2);

    let mut c = BigInt::zero();
    add(&a, &b, &mut c).unwrap();
    assert_eq!(oracle(&c), oracle(&a) + oracle(&b));

    subtract(&a, &b, &mut c).unwrap();
    assert_eq!(oracle(&c), oracle(&a) - oracle(&b));

    multiply(&a, &b, &mut c).unwrap();
    assert_eq!(oracle(&c), oracle(&a) * oracle(&b));

    let mut k = BigInt::zero();
    multiply_with(&Karatsuba::new(4), &a, &b, &mut k).unwrap();
    assert_eq!(c, k);

    let shift = u32::from(flags >> 3);
    let mut s = a.clone();
    shift_left(&mut s, shift).unwrap();
    assert_eq!(oracle(&s), oracle(&a) << shift);
});
