//! Euler's totient.
//!
//! ## Purpose
//!
//! Counts the integers in `[1, n]` coprime to `n`.
//!
//! ## Design notes
//!
//! * **Prime shortcut**: `phi(p) = p - 1` without factorizing.
//! * **Product formula**: Otherwise `phi(n) = n * prod(1 - 1/p)` over the
//!   distinct prime factors `p`, accumulated in `f64`.
//! * **Rounding**: The float product is mapped back to an integer by a
//!   [`PhiRounding`] rule; `Nearest` is exact for `n < 2^53`.
//!
//! ## Invariants
//!
//! * `phi(1) == 1` (empty product), `phi(0) == 0`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::distinct::{DEFAULT_TABLE_LIMIT, distinct_bounded};
use crate::algorithms::factorize::prime_factors;
use crate::algorithms::primality::is_prime;

/// Rule for converting the floating-point totient product to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhiRounding {
    /// Round to the nearest integer.
    #[default]
    Nearest,

    /// Drop the fractional part; can undershoot when the product lands just below a whole number.
    Truncate,
}

impl PhiRounding {
    /// Apply the rule to a non-negative product.
    #[inline]
    pub fn apply(self, product: f64) -> u64 {
        match self {
            Self::Nearest => Float::round(product) as u64,
            Self::Truncate => Float::trunc(product) as u64,
        }
    }
}

/// Euler's totient of `n` with the default rounding rule.
pub fn phi(n: u64) -> u64 {
    phi_with(n, PhiRounding::default(), DEFAULT_TABLE_LIMIT)
}

/// Euler's totient of `n` with an explicit rounding rule and distinct-table limit.
pub fn phi_with(n: u64, rounding: PhiRounding, table_limit: usize) -> u64 {
    if is_prime(n) {
        return n - 1;
    }

    let factors = prime_factors(n);
    let primes = distinct_bounded(&factors, table_limit);

    let mut product = n as f64;
    for p in primes {
        product *= 1.0 - 1.0 / p as f64;
    }

    rounding.apply(product)
}
