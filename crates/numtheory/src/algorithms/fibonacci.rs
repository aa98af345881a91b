//! Overflow-aware iterative Fibonacci generation.
//!
//! ## Purpose
//!
//! Generates F(0)..F(n) term by term, stopping at the first term that does
//! not fit the working unsigned width.
//!
//! ## Design notes
//!
//! * **Guarded addition**: Before each step the sequencer checks
//!   `F(i-1) < MAX - F(i-2)`; on failure generation stops.
//! * **Observable truncation**: The returned [`FibSequence`] records both the
//!   requested index and the number of terms produced.
//! * **Width-generic**: Works for any unsigned primitive; `u64` is canonical.
//!
//! ## Key concepts
//!
//! * For `u64`, F(93) = 12200160415121876738 is the last representable term;
//!   any request for index 94 or beyond is truncated after 94 terms.
//!
//! ## Invariants
//!
//! * `F(0) = 0`, `F(1) = 1`.
//! * Allocation is bounded by the representable term count, not by `n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::sequences::FibSequence;

/// Upper bound on representable terms for any primitive width (u128 holds 187).
const MAX_TERMS_HINT: usize = 187;

/// Generate F(0)..F(n) in `u64`.
pub fn fib_sequence(n: usize) -> FibSequence<u64> {
    fib_sequence_in::<u64>(n)
}

/// Generate F(0)..F(n) in the unsigned width `T`.
pub fn fib_sequence_in<T: PrimInt + Unsigned>(n: usize) -> FibSequence<T> {
    let mut terms = Vec::with_capacity(n.saturating_add(1).min(MAX_TERMS_HINT));
    terms.push(T::zero());
    if n >= 1 {
        terms.push(T::one());
    }

    let mut prev = T::zero();
    let mut curr = T::one();
    for _ in 2..=n {
        if curr < T::max_value() - prev {
            let next = prev + curr;
            terms.push(next);
            prev = curr;
            curr = next;
        } else {
            break;
        }
    }

    FibSequence::new(terms, n)
}
