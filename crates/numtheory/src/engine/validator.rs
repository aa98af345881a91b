//! Validation for engine configuration and bounded requests.
//!
//! ## Purpose
//!
//! This module checks builder parameters before an engine is created and
//! checks requests whose memory use is bounded by the configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Duplicate parameters are reported before range checks.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid values.
//! * This module does not validate operation domains (e.g. negative `lcm`
//!   operands); those are checked where the operation is defined.

// Internal dependencies
use crate::primitives::errors::NumTheoryError;

/// Smallest sieve limit that can contain a prime.
pub const MIN_SIEVE_LIMIT: usize = 2;

/// Smallest presence table (a table for the single value 0).
pub const MIN_TABLE_LIMIT: usize = 1;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and requests.
pub struct Validator;

impl Validator {
    /// Reject a builder in which some parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NumTheoryError> {
        match duplicate_param {
            Some(parameter) => Err(NumTheoryError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }

    /// Validate the configured maximum sieve size.
    pub fn validate_sieve_limit(limit: usize) -> Result<(), NumTheoryError> {
        if limit < MIN_SIEVE_LIMIT {
            return Err(NumTheoryError::InvalidLimit {
                parameter: "sieve_limit",
                got: limit,
                min: MIN_SIEVE_LIMIT,
            });
        }
        Ok(())
    }

    /// Validate the configured presence-table size.
    pub fn validate_table_limit(limit: usize) -> Result<(), NumTheoryError> {
        if limit < MIN_TABLE_LIMIT {
            return Err(NumTheoryError::InvalidLimit {
                parameter: "distinct_table_limit",
                got: limit,
                min: MIN_TABLE_LIMIT,
            });
        }
        Ok(())
    }

    /// Validate a sieve request against the configured maximum.
    pub fn validate_sieve_request(n: usize, limit: usize) -> Result<(), NumTheoryError> {
        if n > limit {
            return Err(NumTheoryError::SieveLimitExceeded { got: n, max: limit });
        }
        Ok(())
    }
}
