//! Digit and divisor predicates.
//!
//! ## Purpose
//!
//! Boolean questions about a single integer (or a pair) answered from its
//! decimal digits or its divisors.
//!
//! ## Design notes
//!
//! * **Pandigital mask**: Seen digits are folded into a bitmask and compared
//!   with `(1 << (digits + 1)) - 2`, i.e. bits `1..=digits`.
//! * **Permutation**: Digit sums reject most mismatches before the size-10
//!   histograms are compared.
//! * **Perfect**: Proper divisors are trial-divided up to `n / 2`; the scan
//!   stops as soon as the running sum passes `n`.
//!
//! ## Invariants
//!
//! * Zeroless pandigital only: a `0` digit, a repeated digit or `n <= 0`
//!   gives `false`. `1234567890` is therefore not pandigital.
//! * `0` is neither perfect nor a permutation of any non-zero number.

// Internal dependencies
use crate::primitives::digits::{
    digit_count, digit_histogram, digit_mask, digit_sum, reverse_magnitude,
};

/// Test whether `|n|` reads the same reversed.
pub fn is_palindrome(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    u128::from(magnitude) == reverse_magnitude(magnitude)
}

/// Test whether `n` uses each digit `1..=k` exactly once, `k` being its digit count.
pub fn is_pandigital(n: i64) -> bool {
    if n <= 0 {
        return false;
    }
    // At most 19 digits, so the mask fits comfortably in 32 bits.
    let expected = (1_u32 << (digit_count(n) + 1)) - 2;
    u32::from(digit_mask(n.unsigned_abs())) == expected
}

/// Test whether `a` and `b` contain the same multiset of decimal digits.
pub fn is_permutation(a: u64, b: u64) -> bool {
    if digit_sum(a) != digit_sum(b) {
        return false;
    }
    digit_histogram(a) == digit_histogram(b)
}

/// Test whether `n` equals the sum of its proper divisors.
pub fn is_perfect(n: u64) -> bool {
    if n == 0 {
        return false;
    }

    let mut sum = 0_u64;
    for divisor in 1..=n / 2 {
        if n % divisor == 0 {
            sum = sum.saturating_add(divisor);
            if sum > n {
                return false;
            }
        }
    }
    sum == n
}
