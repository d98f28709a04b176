//! Compact fixed-point decimal arithmetic for platforms without reliable
//! floating point.
//!
//! This library provides a single decimal type:
//!
//! - **`D32`**: 32-bit with 2 decimal places
//!   - Range: ±21,474,836.47 (the full `i32` range, scaled by 100)
//!   - Precision: 0.01
//!   - Use cases: embedded calculators, display-oriented decimal math,
//!     firmware without an FPU
//!
//! ## Features
//!
//! - **Exact decimal math**: No floating-point rounding errors
//! - **Explicit overflow detection**: Checked before a result is corrupted,
//!   surfaced as `Option`/`Result` instead of a shared mutable flag
//! - **Lossy-by-design division**: Trades fractional precision of the
//!   divisor against overflow risk, never panics
//! - **Round-trippable text**: Parsing rejects values that cannot be
//!   represented; formatting trims the trailing hundredths zero
//! - **no_std compatible**: Works in embedded and WebAssembly environments
//! - **Serde support**: Decimal strings for human-readable formats, raw
//!   `i32` for binary formats
//!
//! ## Example
//!
//! ```rust
//! use centidec::D32;
//!
//! let price: D32 = "12.34".parse().unwrap();
//! let tripled = price.try_mul(D32::from_int(3)).unwrap();
//! assert_eq!(tripled.to_string(), "37.02");
//! ```
//!
//! A chain of operations fails as a unit: the first overflow short-circuits
//! everything after it.
//!
//! ```rust
//! use centidec::{D32, DecimalError};
//!
//! let result = D32::MAX
//!     .try_add(D32::ONE)
//!     .and_then(|v| v.try_mul(D32::TEN));
//! assert_eq!(result, Err(DecimalError::Overflow));
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod d32;

pub use d32::D32;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    /// The result left the representable range. Division and parsing edge
    /// cases that the design resolves silently (truncated divisor of zero,
    /// ignored trailing input) do not produce an error at all.
    #[error("overflow: value out of the representable range")]
    Overflow,
}

pub type Result<T> = core::result::Result<T, DecimalError>;
