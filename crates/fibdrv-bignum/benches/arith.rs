//! Criterion benchmarks for the multiplication strategies and renderer.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibdrv_bignum::{multiply_with, render, BigInt, Karatsuba, Multiplier, Schoolbook};

#[allow(clippy::cast_possible_truncation)]
fn operand(words: usize, seed: u32) -> BigInt {
    let digits = (0..words)
        .map(|i| (i as u32).wrapping_mul(0x9E37_79B9) ^ seed)
        .collect();
    BigInt::from_words(digits, false)
}

fn bench_multiply(c: &mut Criterion) {
    let karatsuba = Karatsuba::default();
    let strategies: [(&str, &dyn Multiplier); 2] =
        [("Schoolbook", &Schoolbook), ("Karatsuba", &karatsuba)];
    let sizes = [16usize, 64, 256, 1024];

    for (name, strategy) in strategies {
        let mut group = c.benchmark_group(name);
        for &words in &sizes {
            let a = operand(words, 0xA5A5_A5A5);
            let b = operand(words, 0x5A5A_5A5A);
            group.bench_with_input(BenchmarkId::from_parameter(words), &words, |bench, _| {
                let mut out = BigInt::zero();
                bench.iter(|| multiply_with(strategy, &a, &b, &mut out).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Render");
    for &words in &[4usize, 64, 512] {
        let value = operand(words, 0x1234_5678);
        group.bench_with_input(BenchmarkId::from_parameter(words), &words, |bench, _| {
            bench.iter(|| render(&value));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_render);
criterion_main!(benches);
