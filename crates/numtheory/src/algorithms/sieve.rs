//! Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! Produces the prime index for every integer strictly below `n`, either as
//! raw flags or de-indexed into the ascending list of primes.
//!
//! ## Design notes
//!
//! * **Allocation**: One byte per integer below `n`, owned by the returned index.
//! * **Striking**: For each prime `i` with `i * i < n`, multiples from `i * i` are cleared.
//!
//! ## Invariants
//!
//! * Positions 0 and 1 are composite regardless of `n`.
//! * `sieve(0)` is empty and `sieve(1)` is `[false]`.
//!
//! ## Non-goals
//!
//! * No segmentation or wheel factorization; the limit is bounded by the engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// Internal dependencies
use crate::primitives::sequences::PrimeIndex;

/// Build the prime index for all integers in `[0, n)`.
pub fn sieve(n: usize) -> PrimeIndex {
    let mut flags = vec![true; n];

    let mut i = 2_usize;
    while i.checked_mul(i).is_some_and(|square| square < n) {
        if flags[i] {
            for j in (i * i..n).step_by(i) {
                flags[j] = false;
            }
        }
        i += 1;
    }

    PrimeIndex::from_flags(flags)
}

/// Ascending list of the primes strictly below `n`.
pub fn primes_below(n: usize) -> Vec<u64> {
    sieve(n).primes()
}
