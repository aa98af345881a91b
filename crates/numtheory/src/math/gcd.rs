//! Greatest common divisor and least common multiple.
//!
//! `gcd` follows the plain Euclidean remainder chain, so the sign of the
//! result is whatever the chain leaves behind (non-negative for
//! non-negative inputs). `lcm` is restricted to non-negative operands and
//! is only valid while the result fits in an `i64`; anything larger is
//! reported as an overflow rather than wrapped.

// Internal dependencies
use crate::primitives::errors::NumTheoryError;

/// Greatest common divisor of `a` and `b` by Euclid's algorithm.
///
/// `gcd(0, 0)` is `0`.
#[inline]
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        // `i64::MIN % -1` overflows; its remainder is 0 either way.
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two non-negative integers.
///
/// `lcm(0, x)` is `0`. The product is formed as `a / gcd(a, b) * b`.
///
/// # Errors
///
/// * [`NumTheoryError::NegativeInput`] if either operand is negative.
/// * [`NumTheoryError::Overflow`] if the multiple exceeds `i64::MAX`.
pub fn lcm(a: i64, b: i64) -> Result<i64, NumTheoryError> {
    for value in [a, b] {
        if value < 0 {
            return Err(NumTheoryError::NegativeInput {
                operation: "lcm",
                value,
            });
        }
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(NumTheoryError::Overflow { operation: "lcm" })
}
