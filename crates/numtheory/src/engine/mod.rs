//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer holds the engine configuration and the validation applied to
//! it and to requests that are bounded by it (sieve size, presence-table
//! size).
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Resolved engine configuration.
pub mod config;

/// Configuration and request validation.
pub mod validator;
