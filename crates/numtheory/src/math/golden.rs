//! Golden-ratio closed forms.
//!
//! ## Purpose
//!
//! This module provides the golden ratio phi, Binet's closed-form Fibonacci
//! evaluation and its inverse, the closest Fibonacci index for a value.
//!
//! ## Design notes
//!
//! * **Pure constant**: phi is produced by a function, generic over `Float`.
//! * **Approximate**: Binet's formula in `f64` is exact only up to
//!   [`BINET_MAX_INDEX`]; beyond that it is refused. The iterative sequencer
//!   in `algorithms::fibonacci` is the source of truth.
//!
//! ## Non-goals
//!
//! * This module does not detect overflow; that belongs to the sequencer.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumTheoryError;

/// Largest index at which [`fib_binet`] matches the exact sequence in `f64`.
pub const BINET_MAX_INDEX: u32 = 70;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
#[inline]
pub fn golden_ratio<T: Float>() -> T {
    let two = T::one() + T::one();
    (T::one() + sqrt5::<T>()) / two
}

#[inline]
fn sqrt5<T: Float>() -> T {
    let five = T::from(5.0).unwrap_or(T::one());
    five.sqrt()
}

/// Evaluate F(n) with Binet's formula, rounded to the nearest integer.
///
/// `F(n) = (phi^n - psi^n) / sqrt(5)` with `psi = -1 / phi`.
///
/// # Errors
///
/// [`NumTheoryError::BinetOutOfRange`] for `n > BINET_MAX_INDEX`.
pub fn fib_binet(n: u32) -> Result<u64, NumTheoryError> {
    if n > BINET_MAX_INDEX {
        return Err(NumTheoryError::BinetOutOfRange {
            index: n,
            max: BINET_MAX_INDEX,
        });
    }

    let phi = golden_ratio::<f64>();
    let exponent = f64::from(n);
    // psi^n = (-1)^n * phi^-n, keeping `powf` away from a negative base.
    let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
    let psi_n = sign * Float::powf(phi, -exponent);
    let term = (Float::powf(phi, exponent) - psi_n) / sqrt5::<f64>();

    Ok(Float::round(term) as u64)
}

/// Index of the Fibonacci number closest to (at or below) `n`.
///
/// Computes `floor(ln(n * sqrt(5) + 0.5) / ln(phi))`. The raw formula is
/// negative for `n == 0`, which is pinned to index `0` since `F(0) == 0`.
pub fn fib_index(n: u64) -> u32 {
    if n == 0 {
        return 0;
    }
    let x = n as f64;
    let index = Float::ln(x * sqrt5::<f64>() + 0.5) / Float::ln(golden_ratio::<f64>());
    Float::floor(index) as u32
}
