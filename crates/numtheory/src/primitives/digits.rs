//! Decimal and binary digit operations.
//!
//! ## Purpose
//!
//! This module provides the digit-level building blocks used by the
//! predicates: digit counting, reversal, rotation, histograms and
//! concatenation.
//!
//! ## Design notes
//!
//! * **Magnitudes**: Signed inputs are reduced to `unsigned_abs`, so `i64::MIN` is handled.
//! * **Total reversal**: `reverse` widens to `i128`; a reversed 19-digit `i64` may not fit in 64 bits.
//! * **Checked**: `rotate` and `concat` refuse to wrap and report `Overflow` instead.
//!
//! ## Invariants
//!
//! * `digit_count(0) == 1`.
//! * Trailing zeros vanish on reversal: `reverse(120) == 21`.
//! * Zero has no digits in a histogram (all counts zero).

// Internal dependencies
use crate::primitives::errors::NumTheoryError;

// ============================================================================
// Counting
// ============================================================================

/// Number of decimal digits in `n`, where zero has one digit.
#[inline]
pub fn count_digits(n: u64) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}

/// Number of decimal digits in `|n|`; `0` maps to `1`.
#[inline]
pub fn digit_count(n: i64) -> u32 {
    count_digits(n.unsigned_abs())
}

/// Number of significant bits in `n` (`0` occupies no bits).
#[inline]
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

// ============================================================================
// Reversal and Rotation
// ============================================================================

/// Reverse the decimal digits of an unsigned magnitude.
pub fn reverse_magnitude(mut n: u64) -> u128 {
    let mut reversed: u128 = 0;
    while n > 0 {
        reversed = reversed * 10 + u128::from(n % 10);
        n /= 10;
    }
    reversed
}

/// Reverse the decimal digits of `|n|`, preserving the sign of `n`.
///
/// Trailing zeros become leading zeros and vanish, so `reverse(-1230)` is
/// `-321`.
pub fn reverse(n: i64) -> i128 {
    // A reversed u64 has at most 20 digits, well inside i128.
    let magnitude = reverse_magnitude(n.unsigned_abs()) as i128;
    if n < 0 { -magnitude } else { magnitude }
}

/// Move the last decimal digit of `n` to the front.
///
/// Computes `last_digit * 10^(digit_count - 1) + n / 10`, so
/// `rotate(1234) == 4123` and `rotate(1400) == 140`.
///
/// # Errors
///
/// * [`NumTheoryError::NegativeInput`] for `n < 0`; rotation is only
///   defined on non-negative integers.
/// * [`NumTheoryError::Overflow`] when the rotated value exceeds `i64::MAX`.
pub fn rotate(n: i64) -> Result<i64, NumTheoryError> {
    if n < 0 {
        return Err(NumTheoryError::NegativeInput {
            operation: "rotate",
            value: n,
        });
    }

    let place = 10_i64.checked_pow(digit_count(n) - 1);
    place
        .and_then(|p| (n % 10).checked_mul(p))
        .and_then(|front| front.checked_add(n / 10))
        .ok_or(NumTheoryError::Overflow {
            operation: "rotate",
        })
}

// ============================================================================
// Histograms
// ============================================================================

/// Count occurrences of each decimal digit in `n`.
pub fn digit_histogram(mut n: u64) -> [u8; 10] {
    let mut counts = [0_u8; 10];
    while n > 0 {
        counts[(n % 10) as usize] += 1;
        n /= 10;
    }
    counts
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Bitmask with bit `d` set for every decimal digit `d` present in `n`.
pub fn digit_mask(mut n: u64) -> u16 {
    let mut mask = 0_u16;
    while n > 0 {
        mask |= 1 << (n % 10);
        n /= 10;
    }
    mask
}

// ============================================================================
// Concatenation
// ============================================================================

/// Concatenate the decimal representations of `x` and `y`.
///
/// `concat(123, 987) == 123987` and `concat(1, 0) == 10`.
///
/// # Errors
///
/// [`NumTheoryError::Overflow`] when the concatenation exceeds `u64::MAX`.
pub fn concat(x: u64, y: u64) -> Result<u64, NumTheoryError> {
    10_u64
        .checked_pow(count_digits(y))
        .and_then(|shift| x.checked_mul(shift))
        .and_then(|head| head.checked_add(y))
        .ok_or(NumTheoryError::Overflow {
            operation: "concat",
        })
}
