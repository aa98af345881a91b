//! High-level API for the number-theory engine.
//!
//! ## Purpose
//!
//! This module provides the configured entry point. Most operations are
//! plain functions and need no configuration; the few whose memory use or
//! rounding is tunable (sieve, distinct counting, totient) are also offered
//! on an [`Engine`] built with a fluent builder.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless**: An engine holds configuration only; every call is independent.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NumTheoryBuilder`] via `NumTheory::new()`.
//! 2. Chain configuration methods (`.sieve_limit()`, `.phi_rounding()`, etc.).
//! 3. Call `.build()` to obtain an [`Engine`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::distinct::distinct_bounded;
use crate::algorithms::sieve::sieve;
use crate::engine::validator::Validator;
use crate::evaluation::totient::phi_with;

// Publicly re-exported types
pub use crate::engine::config::EngineConfig;
pub use crate::evaluation::totient::PhiRounding;
pub use crate::primitives::errors::NumTheoryError;
pub use crate::primitives::sequences::{FibSequence, PrimeIndex};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct NumTheoryBuilder {
    /// Largest accepted sieve size.
    pub sieve_limit: Option<usize>,

    /// Largest presence table used for distinct counting.
    pub distinct_table_limit: Option<usize>,

    /// Rounding rule for the totient product.
    pub phi_rounding: Option<PhiRounding>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl NumTheoryBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest sieve size the engine will allocate.
    pub fn sieve_limit(mut self, limit: usize) -> Self {
        if self.sieve_limit.is_some() {
            self.duplicate_param = Some("sieve_limit");
        }
        self.sieve_limit = Some(limit);
        self
    }

    /// Set the largest presence table used by distinct counting.
    pub fn distinct_table_limit(mut self, limit: usize) -> Self {
        if self.distinct_table_limit.is_some() {
            self.duplicate_param = Some("distinct_table_limit");
        }
        self.distinct_table_limit = Some(limit);
        self
    }

    /// Set the rounding rule for Euler's totient.
    pub fn phi_rounding(mut self, rounding: PhiRounding) -> Self {
        if self.phi_rounding.is_some() {
            self.duplicate_param = Some("phi_rounding");
        }
        self.phi_rounding = Some(rounding);
        self
    }

    /// Validate the parameters and build the engine.
    pub fn build(self) -> Result<Engine, NumTheoryError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = EngineConfig::default();
        let config = EngineConfig {
            sieve_limit: self.sieve_limit.unwrap_or(defaults.sieve_limit),
            distinct_table_limit: self
                .distinct_table_limit
                .unwrap_or(defaults.distinct_table_limit),
            phi_rounding: self.phi_rounding.unwrap_or(defaults.phi_rounding),
        };

        Validator::validate_sieve_limit(config.sieve_limit)?;
        Validator::validate_table_limit(config.distinct_table_limit)?;

        Ok(Engine { config })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Configured, stateless front end for the bounded operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// The validated configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Prime index for all integers below `n`.
    ///
    /// # Errors
    ///
    /// [`NumTheoryError::SieveLimitExceeded`] when `n` exceeds the sieve limit.
    pub fn sieve(&self, n: usize) -> Result<PrimeIndex, NumTheoryError> {
        Validator::validate_sieve_request(n, self.config.sieve_limit)?;
        Ok(sieve(n))
    }

    /// Ascending primes below `n` (the de-indexed sieve).
    ///
    /// # Errors
    ///
    /// [`NumTheoryError::SieveLimitExceeded`] when `n` exceeds the sieve limit.
    pub fn primes_below(&self, n: usize) -> Result<Vec<u64>, NumTheoryError> {
        self.sieve(n).map(|index| index.primes())
    }

    /// Ascending unique values, using the configured presence-table limit.
    pub fn distinct(&self, values: &[u64]) -> Vec<u64> {
        distinct_bounded(values, self.config.distinct_table_limit)
    }

    /// Euler's totient with the configured rounding rule.
    pub fn phi(&self, n: u64) -> u64 {
        phi_with(
            n,
            self.config.phi_rounding,
            self.config.distinct_table_limit,
        )
    }
}
