//! Trial-division primality test.
//!
//! Odd candidates are tried up to the integer square root of `n`, so the
//! test is O(sqrt(n)) with no auxiliary storage. The bound is computed with
//! an exact integer square root; no float rounding is involved.

/// Test whether `n` is prime.
///
/// `0` and `1` are not prime; `2` is the only even prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = n.isqrt();
    let mut candidate = 3;
    while candidate <= limit {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}
