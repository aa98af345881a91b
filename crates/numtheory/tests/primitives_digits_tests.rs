#![cfg(feature = "dev")]
//! Tests for decimal and binary digit operations.
//!
//! These tests verify the digit-level building blocks used by the
//! predicates:
//! - Digit counting and bit length
//! - Sign-preserving reversal
//! - Last-digit rotation with overflow detection
//! - Concatenation
//!
//! ## Test Organization
//!
//! 1. **Counting** - Decimal digit counts and bit lengths
//! 2. **Reversal** - Positive, negative and trailing-zero inputs
//! 3. **Rotation** - Known values, domain and overflow errors
//! 4. **Histograms** - Digit counts, sums and masks
//! 5. **Concatenation** - Known values and overflow

use numtheory::internals::primitives::digits::{
    bit_length, concat, count_digits, digit_count, digit_histogram, digit_mask, digit_sum,
    reverse, rotate,
};
use numtheory::internals::primitives::errors::NumTheoryError;

// ============================================================================
// Counting Tests
// ============================================================================

/// Test decimal digit counts, including zero and the signed extremes.
#[test]
fn test_digit_count() {
    assert_eq!(count_digits(0), 1);
    assert_eq!(count_digits(9), 1);
    assert_eq!(count_digits(10), 2);
    assert_eq!(count_digits(u64::MAX), 20);

    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(-7), 1);
    assert_eq!(digit_count(-1234), 4);
    assert_eq!(digit_count(i64::MAX), 19);
    assert_eq!(digit_count(i64::MIN), 19);
}

/// Test bit lengths against known values.
///
/// Zero occupies no bits; powers of two start a new bit.
#[test]
fn test_bit_length() {
    let cases: [(u64, u32); 11] = [
        (0, 0),
        (1, 1),
        (3, 2),
        (7, 3),
        (8, 4),
        (15, 4),
        (16, 5),
        (255, 8),
        (256, 9),
        (123_456_789, 27),
        (987_654_321, 30),
    ];
    for (n, expected) in cases {
        assert_eq!(bit_length(n), expected, "bit_length({})", n);
    }
    assert_eq!(bit_length(u64::MAX), 64);
}

// ============================================================================
// Reversal Tests
// ============================================================================

/// Test reversal of positive and negative values.
///
/// Verifies:
/// - Trailing zeros disappear
/// - The sign of the input is kept
/// - Reversals that leave 32 bits are exact
#[test]
fn test_reverse_known_values() {
    let cases: [(i64, i128); 10] = [
        (1, 1),
        (10, 1),
        (11, 11),
        (120, 21),
        (123, 321),
        (1400, 41),
        (19001, 10091),
        (19_416_396, 69_361_491),
        (2_147_483_647, 7_463_847_412),
        (4_294_967_296, 6_927_694_924),
    ];
    for (n, expected) in cases {
        assert_eq!(reverse(n), expected, "reverse({})", n);
        assert_eq!(reverse(-n), -expected, "reverse({})", -n);
    }
    assert_eq!(reverse(0), 0);
}

/// Test that reversing the widest values does not wrap.
#[test]
fn test_reverse_wide_values() {
    // 9223372036854775807 reversed is 7085774586302733229.
    assert_eq!(reverse(i64::MAX), 7_085_774_586_302_733_229);
    assert_eq!(reverse(i64::MIN), -8_085_774_586_302_733_229);

    // 9999999999999999991 does not fit in an i64.
    let reversed = reverse(1_999_999_999_999_999_999);
    assert_eq!(reversed, 9_999_999_999_999_999_991);
    assert!(reversed > i128::from(i64::MAX));
}

// ============================================================================
// Rotation Tests
// ============================================================================

/// Test rotation of the last digit to the front.
#[test]
fn test_rotate_known_values() {
    let cases: [(i64, i64); 10] = [
        (0, 0),
        (1, 1),
        (11, 11),
        (120, 12),
        (123, 312),
        (1400, 140),
        (19001, 11900),
        (19_416_396, 61_941_639),
        (2_147_483_647, 7_214_748_364),
        (4_294_967_296, 6_429_496_729),
    ];
    for (n, expected) in cases {
        assert_eq!(rotate(n).unwrap(), expected, "rotate({})", n);
    }
}

/// Test that rotation rejects negative inputs.
#[test]
fn test_rotate_negative() {
    let err = rotate(-123).unwrap_err();
    assert_eq!(
        err,
        NumTheoryError::NegativeInput {
            operation: "rotate",
            value: -123
        }
    );
}

/// Test that rotation reports overflow instead of wrapping.
#[test]
fn test_rotate_overflow() {
    // 9 * 10^18 + 299999999999999999 exceeds i64::MAX.
    let n = 2_999_999_999_999_999_999;
    assert_eq!(
        rotate(n),
        Err(NumTheoryError::Overflow {
            operation: "rotate"
        })
    );

    // Last digit 1 keeps the rotation in range.
    let n = 9_223_372_036_854_775_801;
    assert_eq!(rotate(n).unwrap(), 1_922_337_203_685_477_580);
}

// ============================================================================
// Histogram Tests
// ============================================================================

/// Test digit histograms, sums and masks.
#[test]
fn test_digit_histogram_and_mask() {
    let counts = digit_histogram(1_223_330);
    assert_eq!(counts, [1, 1, 2, 3, 0, 0, 0, 0, 0, 0]);
    assert_eq!(digit_sum(1_223_330), 14);
    assert_eq!(digit_mask(1_223_330), 0b1111);

    // Zero has no digits.
    assert_eq!(digit_histogram(0), [0; 10]);
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_mask(0), 0);
}

// ============================================================================
// Concatenation Tests
// ============================================================================

/// Test concatenation of decimal representations.
#[test]
fn test_concat_known_values() {
    let cases: [(u64, u64, u64); 6] = [
        (1, 10, 110),
        (200, 500, 200_500),
        (123, 123, 123_123),
        (123, 987, 123_987),
        (123_456, 987_654, 123_456_987_654),
        (1, 0, 10),
    ];
    for (x, y, expected) in cases {
        assert_eq!(concat(x, y).unwrap(), expected, "concat({}, {})", x, y);
    }
    assert_eq!(concat(0, 42).unwrap(), 42);
}

/// Test that concatenation reports overflow.
#[test]
fn test_concat_overflow() {
    assert_eq!(
        concat(u64::MAX, 1),
        Err(NumTheoryError::Overflow {
            operation: "concat"
        })
    );
    assert!(concat(1, u64::MAX).is_err());
    assert_eq!(concat(1_844_674_407, 3_709_551_615).unwrap(), u64::MAX);
}
