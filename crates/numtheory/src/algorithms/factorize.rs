//! Prime factorization by repeated trial division.
//!
//! ## Purpose
//!
//! Splits a positive integer into its prime factors, ascending and with
//! multiplicity, so that their product reproduces the input.
//!
//! ## Design notes
//!
//! * **Prime short-circuit**: Once the remaining cofactor is prime it is appended and the loop ends.
//! * **Evens first**: Factors of 2 are divided out before any odd search.
//! * **Restarting scan**: After each odd division the candidate scan restarts at 3
//!   against the shrunken cofactor's square root.
//!
//! ## Invariants
//!
//! * Factors are emitted in ascending order.
//! * `0` and `1` have no factors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::primality::is_prime;

/// Prime factors of `n` in ascending order, with multiplicity.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    while n >= 2 {
        if is_prime(n) {
            factors.push(n);
            break;
        }

        if n % 2 == 0 {
            factors.push(2);
            n /= 2;
            continue;
        }

        // n is odd and composite, so it has a divisor no larger than its root.
        let limit = n.isqrt();
        let mut candidate = 3;
        while candidate <= limit {
            if n % candidate == 0 {
                factors.push(candidate);
                n /= candidate;
                break;
            }
            candidate += 2;
        }
    }

    factors
}
