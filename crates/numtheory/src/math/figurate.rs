//! Exact integer roots and figurate-number tests.
//!
//! ## Purpose
//!
//! Closed-form tests for pentagonal and triangular numbers. A number `n` is
//! the k-th pentagonal number iff `k = (sqrt(1 + 24n) + 1) / 6` is an
//! integer, and the k-th triangular number iff `k = (sqrt(1 + 8n) + 1) / 2`
//! is an integer.
//!
//! ## Design notes
//!
//! * **Integer-only**: The discriminant is formed in `u128` and checked with
//!   an exact integer square root, so there is no float rounding at large `n`.
//! * **Triangular parity**: `1 + 8n` is odd, so any exact root is odd and
//!   `(s + 1) / 2` is always whole; the test reduces to the perfect-square check.
//!
//! ## Invariants
//!
//! * `0` is neither pentagonal nor triangular.

/// Exact square root of `n`, if `n` is a perfect square.
#[inline]
pub fn exact_sqrt(n: u128) -> Option<u128> {
    let root = n.isqrt();
    (root * root == n).then_some(root)
}

/// Test whether `n` is a pentagonal number (1, 5, 12, 22, 35, ...).
pub fn is_pentagonal(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    exact_sqrt(1 + 24 * u128::from(n)).is_some_and(|root| (root + 1) % 6 == 0)
}

/// Test whether `n` is a triangular number (1, 3, 6, 10, 15, ...).
pub fn is_triangular(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    exact_sqrt(1 + 8 * u128::from(n)).is_some_and(|root| (root + 1) % 2 == 0)
}
