//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core integer algorithms:
//! - Trial-division primality testing
//! - Sieve of Eratosthenes
//! - Prime factorization by repeated trial division
//! - Distinct-value extraction through a bounded presence table
//! - Overflow-aware iterative Fibonacci generation
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trial-division primality test.
pub mod primality;

/// Sieve of Eratosthenes.
pub mod sieve;

/// Prime factorization.
pub mod factorize;

/// Distinct-value extraction.
pub mod distinct;

/// Overflow-aware Fibonacci sequencing.
pub mod fibonacci;
