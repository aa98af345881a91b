#![cfg(feature = "dev")]
//! Tests for prime factorization and distinct-value extraction.
//!
//! ## Test Organization
//!
//! 1. **Factorization** - Known factorizations and edge inputs
//! 2. **Factorization Properties** - Product, order and primality
//! 3. **Distinct** - Table path, fallback path and their agreement

use numtheory::internals::algorithms::distinct::{DEFAULT_TABLE_LIMIT, distinct, distinct_bounded};
use numtheory::internals::algorithms::factorize::prime_factors;
use numtheory::internals::algorithms::primality::is_prime;

// ============================================================================
// Factorization Tests
// ============================================================================

/// Test known factorizations.
#[test]
fn test_prime_factors_known_values() {
    assert_eq!(prime_factors(7), vec![7]);
    assert_eq!(prime_factors(10), vec![2, 5]);
    assert_eq!(prime_factors(13), vec![13]);
    assert_eq!(prime_factors(25), vec![5, 5]);
    assert_eq!(prime_factors(123_456), vec![2, 2, 2, 2, 2, 2, 3, 643]);
    assert_eq!(prime_factors(98_765_431), vec![98_765_431]);
    assert_eq!(prime_factors(987_654_321), vec![3, 3, 17, 17, 379_721]);
}

/// Test that zero and one have no prime factors.
#[test]
fn test_prime_factors_trivial() {
    assert!(prime_factors(0).is_empty());
    assert!(prime_factors(1).is_empty());
    assert_eq!(prime_factors(2), vec![2]);
}

/// Test powers of two and semiprimes with large factors.
#[test]
fn test_prime_factors_large() {
    assert_eq!(prime_factors(1 << 63), vec![2; 63]);
    assert_eq!(
        prime_factors(65_521 * 2_147_483_647),
        vec![65_521, 2_147_483_647]
    );
}

// ============================================================================
// Factorization Property Tests
// ============================================================================

/// Test that factors are prime, ascending and multiply back to the input.
#[test]
fn test_prime_factors_properties() {
    for n in 2..5_000_u64 {
        let factors = prime_factors(n);
        assert!(factors.iter().all(|&p| is_prime(p)), "n = {}", n);
        assert!(factors.windows(2).all(|w| w[0] <= w[1]), "n = {}", n);
        assert_eq!(factors.iter().product::<u64>(), n);
    }
}

// ============================================================================
// Distinct Tests
// ============================================================================

/// Test distinct values through the presence table.
#[test]
fn test_distinct_table() {
    assert_eq!(distinct(&[5, 1, 3, 1, 5, 0]), vec![0, 1, 3, 5]);
    assert_eq!(distinct(&[2, 2, 2]), vec![2]);
    assert!(distinct(&[]).is_empty());
}

/// Test that values past the table limit fall back to sorting.
#[test]
fn test_distinct_fallback() {
    assert_eq!(
        distinct(&[u64::MAX, 7, u64::MAX, 3]),
        vec![3, 7, u64::MAX]
    );

    let big = DEFAULT_TABLE_LIMIT as u64;
    assert_eq!(distinct(&[big, 1, big]), vec![1, big]);
}

/// Test that both paths produce identical output.
#[test]
fn test_distinct_paths_agree() {
    let values: Vec<u64> = (0..2_000_u64).map(|i| (i * 7919) % 613).collect();

    let table = distinct_bounded(&values, 1_000);
    let sorted = distinct_bounded(&values, 1);
    assert_eq!(table, sorted);
    assert_eq!(table.len(), 613);
}

/// Test distinct applied to a factorization.
#[test]
fn test_distinct_prime_factors() {
    assert_eq!(distinct(&prime_factors(360)), vec![2, 3, 5]);
    assert_eq!(distinct(&prime_factors(987_654_321)), vec![3, 17, 379_721]);
}
