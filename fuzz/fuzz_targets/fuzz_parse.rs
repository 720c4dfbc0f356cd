#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_bignum::{render, BigInt};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Must not panic; accepted numerals must survive a render round trip.
    if let Ok(value) = text.parse::<BigInt>() {
        let rendered = render(&value);
        assert_eq!(rendered.parse::<BigInt>().unwrap(), value);
        let expected = num_bigint::BigInt::parse_bytes(text.as_bytes(), 10).unwrap();
        assert_eq!(rendered, expected.to_string());
    }
});
