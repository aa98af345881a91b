//! # numtheory — Integer Number Theory for Rust
//!
//! A small, dependency-light engine for questions about integers:
//! primality, factorization, Euler's totient, Fibonacci sequences and
//! digit-level predicates. Every operation is a pure function of its
//! arguments and returns owned results.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use numtheory::prelude::*;
//!
//! assert!(is_prime(6_700_417));
//! assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
//! assert_eq!(distinct(&prime_factors(360)), vec![2, 3, 5]);
//! assert_eq!(phi(9), 6);
//!
//! let primes = sieve(30);
//! assert_eq!(primes.primes(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! assert_eq!(reverse(-1230), -321);
//! assert!(is_pandigital(123_456_789));
//! ```
//!
//! ### Fibonacci and Overflow
//!
//! The iterative sequencer stops at the first term that does not fit in
//! 64 bits and reports where it stopped:
//!
//! ```rust
//! use numtheory::prelude::*;
//!
//! let seq = fib_sequence(10);
//! assert_eq!(seq.terms(), &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
//! assert!(!seq.is_truncated());
//!
//! let seq = fib_sequence(100);
//! assert_eq!(seq.truncated_at(), Some(94));
//! ```
//!
//! ### Configured Engine
//!
//! ```rust
//! use numtheory::prelude::*;
//!
//! let engine = NumTheory::new()
//!     .sieve_limit(1_000)
//!     .phi_rounding(Nearest)
//!     .build()?;
//!
//! assert_eq!(engine.primes_below(10)?, vec![2, 3, 5, 7]);
//! assert!(engine.sieve(10_000).is_err());
//! assert_eq!(engine.phi(13), 12);
//! # Result::<(), NumTheoryError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations with a restricted domain return `Result<_, NumTheoryError>`:
//!
//! ```rust
//! use numtheory::prelude::*;
//!
//! assert_eq!(lcm(4, 6)?, 12);
//! assert!(matches!(
//!     lcm(-1, 5),
//!     Err(NumTheoryError::NegativeInput { operation: "lcm", value: -1 })
//! ));
//! # Result::<(), NumTheoryError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency;
//! an allocator is still required for the returned vectors:
//!
//! ```toml
//! [dependencies]
//! numtheory = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, digits and result containers.
mod primitives;

// Layer 2: Math - pure arithmetic building blocks.
mod math;

// Layer 3: Algorithms - sieve, primality, factorization, sequencing.
mod algorithms;

// Layer 4: Evaluation - predicates and the totient.
mod evaluation;

// Layer 5: Engine - configuration and validation.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::distinct::distinct;
    pub use crate::algorithms::factorize::prime_factors;
    pub use crate::algorithms::fibonacci::{fib_sequence, fib_sequence_in};
    pub use crate::algorithms::primality::is_prime;
    pub use crate::algorithms::sieve::{primes_below, sieve};
    pub use crate::api::{
        Engine, EngineConfig, FibSequence, NumTheoryBuilder as NumTheory, NumTheoryError,
        PhiRounding::{self, Nearest, Truncate},
        PrimeIndex,
    };
    pub use crate::evaluation::predicates::{
        is_palindrome, is_pandigital, is_perfect, is_permutation,
    };
    pub use crate::evaluation::totient::phi;
    pub use crate::math::figurate::{is_pentagonal, is_triangular};
    pub use crate::math::gcd::{gcd, lcm};
    pub use crate::math::golden::{fib_binet, fib_index, golden_ratio};
    pub use crate::primitives::digits::{bit_length, concat, digit_count, reverse, rotate};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
