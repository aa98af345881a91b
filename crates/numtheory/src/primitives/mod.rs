//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and the decimal/binary digit
//! manipulation used throughout the crate. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Digit counting, reversal, rotation and histograms.
pub mod digits;

/// Owned result sequences (prime index, Fibonacci terms).
pub mod sequences;
