//! Owned sequence types returned by the generators.
//!
//! ## Purpose
//!
//! This module defines the containers handed back to callers: the prime
//! index produced by the sieve and the overflow-aware Fibonacci sequence.
//!
//! ## Design notes
//!
//! * **Ownership**: Results are returned by value; nothing retains a reference.
//! * **Explicit length**: No sentinel values; truncation is recorded, not zero-filled.
//! * **Ergonomics**: Both types implement `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `PrimeIndex` flags 0 and 1 are always `false`.
//! * `FibSequence` never holds more than `requested + 1` terms.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::PrimInt;

/// Rows shown at each end of a long listing.
const EDGE_ROWS: usize = 10;

// ============================================================================
// Prime Index
// ============================================================================

/// Prime/composite flags for every integer below a limit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimeIndex {
    flags: Vec<bool>,
}

impl PrimeIndex {
    /// Wrap raw flags, forcing positions 0 and 1 to composite.
    pub fn from_flags(mut flags: Vec<bool>) -> Self {
        for flag in flags.iter_mut().take(2) {
            *flag = false;
        }
        Self { flags }
    }

    /// Number of positions in the index (the exclusive limit).
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check if the index covers no integers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Raw boolean flags; position `i` is `true` iff `i` is prime.
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Consume the index and return its flags.
    pub fn into_flags(self) -> Vec<bool> {
        self.flags
    }

    /// Look up a single position; positions past the limit are `false`.
    #[inline]
    pub fn is_prime(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    /// Number of primes below the limit.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Iterate the primes in ascending order.
    pub fn iter_primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag)
            .map(|(i, _)| i as u64)
    }

    /// De-indexed form: the ascending list of primes below the limit.
    pub fn primes(&self) -> Vec<u64> {
        self.iter_primes().collect()
    }
}

impl Display for PrimeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let primes = self.primes();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Limit:  {}", self.len())?;
        writeln!(f, "  Primes: {}", primes.len())?;
        writeln!(f)?;
        writeln!(f, "Primes:")?;
        write_listing(f, &primes)
    }
}

// ============================================================================
// Fibonacci Sequence
// ============================================================================

/// Fibonacci terms F(0)..F(k), truncated where the next term would overflow `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibSequence<T> {
    terms: Vec<T>,
    requested: usize,
}

impl<T: PrimInt> FibSequence<T> {
    /// Build a sequence from the produced terms and the requested end index.
    pub fn new(terms: Vec<T>, requested: usize) -> Self {
        debug_assert!(
            terms.len() <= requested.saturating_add(1),
            "FibSequence: more terms than requested"
        );
        Self { terms, requested }
    }

    /// Terms actually produced.
    #[inline]
    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    /// Consume the sequence and return the produced terms.
    pub fn into_terms(self) -> Vec<T> {
        self.terms
    }

    /// Requested end index (inclusive).
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of terms produced.
    #[inline]
    pub fn produced(&self) -> usize {
        self.terms.len()
    }

    /// Whether generation stopped before the requested index.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.produced() <= self.requested
    }

    /// First index that could not be represented, if generation stopped early.
    pub fn truncated_at(&self) -> Option<usize> {
        self.is_truncated().then(|| self.produced())
    }

    /// Term at index `i`, if it was produced.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.terms.get(i).copied()
    }

    /// Last produced term.
    pub fn last(&self) -> Option<T> {
        self.terms.last().copied()
    }

    /// Fixed-length form: `requested + 1` terms with the unproduced tail zero-filled.
    ///
    /// Allocates the full requested length; prefer [`terms`](Self::terms) for
    /// large requests.
    pub fn padded(&self) -> Vec<T> {
        let mut out = self.terms.clone();
        out.resize(self.requested.saturating_add(1), T::zero());
        out
    }
}

impl<T: PrimInt + Display> Display for FibSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Requested: F(0)..F({})", self.requested)?;
        writeln!(f, "  Produced:  {}", self.produced())?;
        if let Some(index) = self.truncated_at() {
            writeln!(f, "  Truncated: overflow at index {}", index)?;
        }
        writeln!(f)?;
        writeln!(f, "Terms:")?;
        write_listing(f, &self.terms)
    }
}

// ============================================================================
// Helpers
// ============================================================================

// Write one value per row, eliding the middle of long listings.
fn write_listing<V: Display>(f: &mut Formatter<'_>, values: &[V]) -> Result {
    let n = values.len();
    writeln!(f, "{:>6} {:>22}", "Index", "Value")?;
    writeln!(f, "{:-<29}", "")?;

    for (i, value) in values.iter().enumerate() {
        if n > 2 * EDGE_ROWS && i == EDGE_ROWS {
            writeln!(f, "{:>6}", "...")?;
        }
        if n > 2 * EDGE_ROWS && (EDGE_ROWS..n - EDGE_ROWS).contains(&i) {
            continue;
        }
        writeln!(f, "{:>6} {:>22}", i, value)?;
    }

    Ok(())
}
