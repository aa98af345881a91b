//! Number-theory benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Sieve scalability (10K to 10M)
//! - Trial-division primality on primes and composites
//! - Factorization and totient on random inputs
//! - Fibonacci sequencing across integer widths
//! - Distinct counting on both the table and sorting paths

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numtheory::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed integers in `[lo, hi)`.
fn generate_uniform(size: usize, lo: u64, hi: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(lo..hi)).collect()
}

/// Generate repeated small factors, as produced by factorizing smooth numbers.
fn generate_factor_lists(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let primes = primes_below(1_000);
    (0..size)
        .map(|_| primes[rng.random_range(0..primes.len())])
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    group.sample_size(20);

    for size in [10_000, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("eratosthenes", size), &size, |b, &n| {
            b.iter(|| sieve(black_box(n)))
        });
    }
    group.finish();
}

fn bench_primality(c: &mut Criterion) {
    let mut group = c.benchmark_group("primality");

    // Primes are the worst case: every candidate up to the root is tried.
    for p in [7_919_u64, 6_700_417, 2_147_483_647, 999_999_000_001] {
        group.bench_with_input(BenchmarkId::new("prime", p), &p, |b, &p| {
            b.iter(|| is_prime(black_box(p)))
        });
    }

    let composites = generate_uniform(1_000, 1 << 32, 1 << 40, 42);
    group.bench_function("random_composites", |b| {
        b.iter(|| {
            composites
                .iter()
                .filter(|&&n| is_prime(black_box(n)))
                .count()
        })
    });
    group.finish();
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");
    group.sample_size(50);

    for (name, n) in [
        ("smooth", 1_u64 << 40),
        ("mixed", 987_654_321),
        ("semiprime", 65_521 * 2_147_483_647),
    ] {
        group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
            b.iter(|| prime_factors(black_box(n)))
        });
    }

    let inputs = generate_uniform(200, 1, 1 << 24, 7);
    group.bench_function("random_24bit", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|&n| prime_factors(black_box(n)).len())
                .sum::<usize>()
        })
    });
    group.finish();
}

fn bench_totient(c: &mut Criterion) {
    let mut group = c.benchmark_group("totient");
    group.sample_size(50);

    let inputs = generate_uniform(200, 1, 1 << 24, 11);
    let nearest = NumTheory::new().phi_rounding(Nearest).build().unwrap();
    let truncate = NumTheory::new().phi_rounding(Truncate).build().unwrap();

    for (name, engine) in [("nearest", nearest), ("truncate", truncate)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                inputs
                    .iter()
                    .map(|&n| engine.phi(black_box(n)))
                    .fold(0_u64, u64::wrapping_add)
            })
        });
    }
    group.finish();
}

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    group.bench_function("u64_full", |b| b.iter(|| fib_sequence(black_box(93))));
    group.bench_function("u64_truncated", |b| {
        b.iter(|| fib_sequence(black_box(usize::MAX)))
    });
    group.bench_function("u128_full", |b| {
        b.iter(|| fib_sequence_in::<u128>(black_box(186)))
    });
    group.bench_function("binet_70", |b| b.iter(|| fib_binet(black_box(70))));
    group.finish();
}

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let small = generate_factor_lists(size, 3);
        let wide = generate_uniform(size, 0, u64::MAX, 5);

        group.bench_with_input(BenchmarkId::new("table", size), &small, |b, values| {
            b.iter(|| distinct(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("sorting", size), &wide, |b, values| {
            b.iter(|| distinct(black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sieve,
    bench_primality,
    bench_factorize,
    bench_totient,
    bench_fibonacci,
    bench_distinct,
);

criterion_main!(benches);
