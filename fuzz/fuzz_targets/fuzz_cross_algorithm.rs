#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::{fib_decimal, Calculator, FastDoubling, LinearIteration};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes pick n, capped at 5000 for the linear baseline.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 5_000;
    let threshold = usize::from(data.get(4).copied().unwrap_or(32));

    let fast = FastDoubling::new().calculate(n).unwrap();
    let kara = FastDoubling::with_karatsuba(threshold).calculate(n).unwrap();
    let linear = LinearIteration.calculate(n).unwrap();

    assert_eq!(fast, kara, "schoolbook != karatsuba at n={n}");
    assert_eq!(fast, linear, "doubling != linear at n={n}");
    assert_eq!(fast.to_string(), fib_decimal(n), "render != decimal at n={n}");
});
