//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer composes the algorithms into derived answers:
//! - Digit predicates (palindrome, pandigital, permutation) and perfect numbers
//! - Euler's totient from primality, factorization and distinct primes
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Digit and divisor predicates.
pub mod predicates;

/// Euler's totient.
pub mod totient;
