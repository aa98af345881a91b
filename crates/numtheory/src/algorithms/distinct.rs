//! Distinct-value extraction.
//!
//! ## Purpose
//!
//! Reduces a list of values (typically a factor list) to its unique values
//! in ascending order.
//!
//! ## Design notes
//!
//! * **Presence table**: A boolean table sized `max + 1` marks every value in
//!   one pass, then is scanned in order. O(n + max) time, O(max) space.
//! * **Bounded**: When `max + 1` exceeds the table limit the values are
//!   sorted and deduplicated instead; the output is identical.
//! * **Explicit length**: The input is a slice, so `0` is an ordinary value.
//!
//! ## Invariants
//!
//! * Output is strictly ascending.
//! * Empty input yields empty output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

/// Default presence-table capacity, in slots.
pub const DEFAULT_TABLE_LIMIT: usize = 1 << 24;

/// Ascending unique values of `values`, using the default table limit.
pub fn distinct(values: &[u64]) -> Vec<u64> {
    distinct_bounded(values, DEFAULT_TABLE_LIMIT)
}

/// Ascending unique values of `values` with an explicit presence-table limit.
pub fn distinct_bounded(values: &[u64], table_limit: usize) -> Vec<u64> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };

    let table_size = usize::try_from(max)
        .ok()
        .and_then(|m| m.checked_add(1))
        .filter(|&size| size <= table_limit);

    match table_size {
        Some(size) => count_with_table(values, size),
        None => sort_dedup(values),
    }
}

#[inline]
fn count_with_table(values: &[u64], size: usize) -> Vec<u64> {
    let mut seen = vec![false; size];
    for &value in values {
        seen[value as usize] = true;
    }

    seen.iter()
        .enumerate()
        .filter(|&(_, &present)| present)
        .map(|(value, _)| value as u64)
        .collect()
}

#[inline]
fn sort_dedup(values: &[u64]) -> Vec<u64> {
    let mut unique = values.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}
