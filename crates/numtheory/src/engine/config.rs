//! Resolved engine configuration.
//!
//! The builder in `api` collects optional parameters; once validated they are
//! frozen into an [`EngineConfig`] with every default filled in.

// Internal dependencies
use crate::algorithms::distinct::DEFAULT_TABLE_LIMIT;
use crate::evaluation::totient::PhiRounding;

/// Default maximum sieve size (one byte per integer).
pub const DEFAULT_SIEVE_LIMIT: usize = 1_000_000_000;

/// Validated engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest accepted sieve size.
    pub sieve_limit: usize,

    /// Largest presence table used for distinct counting.
    pub distinct_table_limit: usize,

    /// Rounding rule for the totient product.
    pub phi_rounding: PhiRounding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sieve_limit: DEFAULT_SIEVE_LIMIT,
            distinct_table_limit: DEFAULT_TABLE_LIMIT,
            phi_rounding: PhiRounding::default(),
        }
    }
}
