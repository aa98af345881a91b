#![cfg(feature = "dev")]
//! Tests for the high-level builder and engine.
//!
//! These tests verify the configured entry point:
//! - Builder defaults and overrides
//! - Parameter validation at `build()`
//! - Limit enforcement on the engine's bounded operations
//! - Error messages
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, overrides, duplicates, invalid limits
//! 2. **Engine Operations** - Sieve, distinct and totient through the engine
//! 3. **Error Display** - Human-readable error messages

use numtheory::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that an unconfigured builder yields the default engine.
#[test]
fn test_builder_defaults() {
    let engine = NumTheory::new().build().unwrap();

    assert_eq!(engine, Engine::default());
    assert_eq!(engine.config(), &EngineConfig::default());
}

/// Test that each override reaches the configuration.
#[test]
fn test_builder_overrides() {
    let engine = NumTheory::new()
        .sieve_limit(500)
        .distinct_table_limit(64)
        .phi_rounding(Truncate)
        .build()
        .unwrap();

    let config = engine.config();
    assert_eq!(config.sieve_limit, 500);
    assert_eq!(config.distinct_table_limit, 64);
    assert_eq!(config.phi_rounding, PhiRounding::Truncate);
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_builder_duplicate_parameter() {
    let result = NumTheory::new()
        .sieve_limit(100)
        .phi_rounding(Nearest)
        .sieve_limit(200)
        .build();

    assert_eq!(
        result,
        Err(NumTheoryError::DuplicateParameter {
            parameter: "sieve_limit"
        })
    );

    let result = NumTheory::new()
        .phi_rounding(Nearest)
        .phi_rounding(Truncate)
        .build();
    assert!(matches!(
        result,
        Err(NumTheoryError::DuplicateParameter {
            parameter: "phi_rounding"
        })
    ));
}

/// Test that limits below their minimum are rejected.
#[test]
fn test_builder_invalid_limits() {
    let result = NumTheory::new().sieve_limit(0).build();
    assert!(matches!(
        result,
        Err(NumTheoryError::InvalidLimit {
            parameter: "sieve_limit",
            got: 0,
            ..
        })
    ));

    let result = NumTheory::new().distinct_table_limit(0).build();
    assert!(matches!(
        result,
        Err(NumTheoryError::InvalidLimit {
            parameter: "distinct_table_limit",
            ..
        })
    ));
}

// ============================================================================
// Engine Operation Tests
// ============================================================================

/// Test that the engine enforces its sieve limit.
///
/// Verifies:
/// - Requests at the limit succeed
/// - Requests above it fail without allocating
#[test]
fn test_engine_sieve_limit() {
    let engine = NumTheory::new().sieve_limit(1_000).build().unwrap();

    let index = engine.sieve(1_000).unwrap();
    assert_eq!(index.count(), 168);
    assert_eq!(engine.primes_below(30).unwrap(), primes_below(30));

    assert_eq!(
        engine.sieve(1_001).unwrap_err(),
        NumTheoryError::SieveLimitExceeded {
            got: 1_001,
            max: 1_000
        }
    );
    assert!(engine.primes_below(usize::MAX).is_err());
}

/// Test distinct counting with a small table limit.
#[test]
fn test_engine_distinct() {
    let engine = NumTheory::new().distinct_table_limit(4).build().unwrap();
    let values = [9, 3, 9, 1, 3];

    assert_eq!(engine.distinct(&values), vec![1, 3, 9]);
    assert_eq!(engine.distinct(&values), distinct(&values));
}

/// Test the totient through both rounding rules.
#[test]
fn test_engine_phi() {
    let nearest = NumTheory::new().phi_rounding(Nearest).build().unwrap();
    let truncate = NumTheory::new().phi_rounding(Truncate).build().unwrap();

    assert_eq!(nearest.phi(9_876_543_210), 2_478_812_160);
    assert_eq!(nearest.phi(1_000), phi(1_000));
    assert_eq!(truncate.phi(1 << 20), 1 << 19);
    assert_eq!(truncate.phi(7919), 7918);
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test the messages of every error variant.
#[test]
fn test_error_display() {
    let cases = [
        (
            NumTheoryError::NegativeInput {
                operation: "lcm",
                value: -3,
            },
            "Invalid domain: lcm requires non-negative operands, got -3",
        ),
        (
            NumTheoryError::Overflow {
                operation: "rotate",
            },
            "Overflow: result of rotate does not fit in 64 bits",
        ),
        (
            NumTheoryError::SieveLimitExceeded { got: 20, max: 10 },
            "Sieve size 20 exceeds the configured limit 10",
        ),
        (
            NumTheoryError::BinetOutOfRange { index: 71, max: 70 },
            "Binet evaluation at index 71 is inexact (must be at most 70)",
        ),
        (
            NumTheoryError::InvalidLimit {
                parameter: "sieve_limit",
                got: 1,
                min: 2,
            },
            "Invalid sieve_limit: 1 (must be at least 2)",
        ),
        (
            NumTheoryError::DuplicateParameter {
                parameter: "phi_rounding",
            },
            "Parameter 'phi_rounding' was set multiple times. Each parameter can only be configured once.",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

/// Test that errors convert into boxed standard errors.
#[test]
fn test_error_is_std_error() {
    fn fails() -> Result<i64, Box<dyn std::error::Error>> {
        Ok(lcm(-1, 2)?)
    }
    assert!(fails().is_err());
}
