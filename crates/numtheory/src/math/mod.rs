//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure arithmetic building blocks with no
//! algorithm-specific logic:
//! - Euclidean gcd and the derived lcm
//! - Integer square roots and figurate-number tests
//! - Golden-ratio closed forms (Binet evaluation, Fibonacci index)
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Greatest common divisor and least common multiple.
pub mod gcd;

/// Exact square roots, pentagonal and triangular tests.
pub mod figurate;

/// Golden ratio, Binet's formula and the inverse Fibonacci index.
pub mod golden;
