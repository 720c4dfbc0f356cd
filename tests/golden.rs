//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks every evaluator,
//! the decimal renderer and the device against the known values.

use std::io::SeekFrom;
use std::sync::Arc;

use num_bigint::BigUint;

use fibdrv_bignum::{render, BigInt};
use fibdrv_core::{
    fib_decimal, fibonacci_doubling, fibonacci_linear, Calculator, CalculatorFactory,
    DefaultFactory, FibError,
};
use fibdrv_device::{FibDevice, MAX_LENGTH};
use fibdrv_tests::{load_golden_data, GoldenData};

fn golden() -> GoldenData {
    load_golden_data().expect("failed to load golden file")
}

fn doubling(n: u64) -> String {
    let mut dest = BigInt::zero();
    fibonacci_doubling(&mut dest, n).unwrap();
    render(&dest)
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_well_formed() {
    let data = golden();
    assert!(!data.description.is_empty());
    for entry in &data.values {
        assert!(
            entry.fib.is_some() || (entry.fib_prefix.is_some() && entry.fib_digits.is_some()),
            "entry n={} has neither a value nor a prefix",
            entry.n
        );
    }
}

#[test]
fn golden_exact_fast_doubling() {
    for entry in &golden().values {
        if let Some(expected) = &entry.fib {
            assert_eq!(doubling(entry.n), *expected, "FastDoubling mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_linear() {
    let mut dest = BigInt::zero();
    for entry in &golden().values {
        if let Some(expected) = &entry.fib {
            fibonacci_linear(&mut dest, entry.n).unwrap();
            assert_eq!(render(&dest), *expected, "linear mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_decimal_string() {
    for entry in &golden().values {
        if let Some(expected) = &entry.fib {
            assert_eq!(fib_decimal(entry.n), *expected, "decimal mismatch at n={}", entry.n);
        }
    }
}

/// Every registered calculator either matches the golden value or reports
/// that the index is out of its range.
#[test]
fn golden_exact_registry() {
    let factory = DefaultFactory::new();
    let data = golden();
    for name in factory.available() {
        let calc: Arc<dyn Calculator> = factory.get(name).unwrap();
        for entry in &data.values {
            let Some(expected) = &entry.fib else {
                continue;
            };
            match calc.calculate(entry.n) {
                Ok(value) => assert_eq!(value.to_string(), *expected, "{name} at n={}", entry.n),
                Err(FibError::Overflow { n, .. }) => assert!(n > 93, "{name} overflowed at {n}"),
                Err(err) => panic!("{name} failed at n={}: {err}", entry.n),
            }
        }
    }
}

/// Rendering agrees with an independent decimal conversion.
#[test]
fn golden_render_matches_oracle() {
    for entry in &golden().values {
        if let Some(expected) = &entry.fib {
            let mut dest = BigInt::zero();
            fibonacci_doubling(&mut dest, entry.n).unwrap();
            let oracle = BigUint::new(dest.digits().to_vec());
            assert_eq!(oracle.to_string(), *expected);
            assert_eq!(expected.parse::<BigInt>().unwrap(), dest);
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: prefix & digit count
// ---------------------------------------------------------------------------

#[test]
fn golden_prefix_and_digits() {
    let factory = DefaultFactory::new();
    let algos = ["doubling", "doubling-karatsuba"];

    for entry in &golden().values {
        // n=50000 is covered by the ignored test below.
        if entry.n > 10_000 {
            continue;
        }
        let (Some(prefix), Some(expected_digits)) = (&entry.fib_prefix, entry.fib_digits) else {
            continue;
        };
        for name in algos {
            let s = factory.get(name).unwrap().calculate(entry.n).unwrap().to_string();
            assert!(
                s.starts_with(prefix.as_str()),
                "{name} prefix mismatch at n={}: expected starts_with '{}', got '{}'",
                entry.n,
                prefix,
                &s[..prefix.len().min(s.len())],
            );
            assert_eq!(s.len(), expected_digits, "{name} digit count mismatch at n={}", entry.n);
        }
    }
}

#[test]
#[ignore]
fn golden_large_n_50000() {
    for entry in &golden().values {
        if entry.n != 50_000 {
            continue;
        }
        let s = doubling(entry.n);
        if let Some(prefix) = &entry.fib_prefix {
            assert!(s.starts_with(prefix.as_str()), "prefix mismatch for n=50000");
        }
        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(s.len(), expected_digits, "digit count mismatch for n=50000");
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: device reads
// ---------------------------------------------------------------------------

#[test]
fn golden_device_reads() {
    let device = FibDevice::new();
    let mut session = device.open().unwrap();
    let mut buf = [0u8; 256];
    for entry in &golden().values {
        if entry.n > MAX_LENGTH {
            continue;
        }
        let Some(expected) = &entry.fib else {
            continue;
        };
        assert_eq!(session.seek(SeekFrom::Start(entry.n)), entry.n);
        let len = session.read(&mut buf).unwrap();
        assert_eq!(&buf[..len], expected.as_bytes(), "device mismatch at n={}", entry.n);
    }
}
