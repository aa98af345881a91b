//! Error types for number-theory operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when an operation
//! receives input outside its domain, when a result cannot be represented in
//! the working integer width, or when the engine is misconfigured.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the operation name and offending values.
//! * **No-std**: Uses only `core` formatting; no allocation is required.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Invalid domain**: Negative operands where only non-negative ones make sense.
//! 2. **Overflow**: Results that do not fit in 64 bits are refused, never wrapped.
//! 3. **Resource bounds**: Requests that exceed the configured engine limits.
//! 4. **Configuration**: Invalid or repeated builder parameters.
//!
//! ## Invariants
//!
//! * An operation either returns the exact answer or one of these errors.
//! * Fibonacci truncation is *not* an error; it is reported by the sequence itself.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not print or log anything.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for number-theory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumTheoryError {
    /// The operation is only defined for non-negative operands.
    NegativeInput {
        /// Name of the operation (e.g., "lcm").
        operation: &'static str,
        /// The negative value that was supplied.
        value: i64,
    },

    /// The exact result does not fit in the working integer width.
    Overflow {
        /// Name of the operation that would overflow.
        operation: &'static str,
    },

    /// Sieve size exceeds the limit configured on the engine.
    SieveLimitExceeded {
        /// Requested sieve size.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Closed-form Fibonacci evaluation requested beyond its accurate range.
    BinetOutOfRange {
        /// Requested index.
        index: u32,
        /// Largest index evaluated exactly.
        max: u32,
    },

    /// A builder limit is below its minimum.
    InvalidLimit {
        /// Name of the parameter.
        parameter: &'static str,
        /// The value provided.
        got: usize,
        /// Minimum accepted value.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumTheoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NegativeInput { operation, value } => {
                write!(
                    f,
                    "Invalid domain: {operation} requires non-negative operands, got {value}"
                )
            }
            Self::Overflow { operation } => {
                write!(f, "Overflow: result of {operation} does not fit in 64 bits")
            }
            Self::SieveLimitExceeded { got, max } => {
                write!(f, "Sieve size {got} exceeds the configured limit {max}")
            }
            Self::BinetOutOfRange { index, max } => {
                write!(
                    f,
                    "Binet evaluation at index {index} is inexact (must be at most {max})"
                )
            }
            Self::InvalidLimit {
                parameter,
                got,
                min,
            } => {
                write!(f, "Invalid {parameter}: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumTheoryError {}
