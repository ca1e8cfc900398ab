//! Primitive types
//!
//! This module defines the low-level primitive types used by the hash
//! implementations.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit value, used as the SHA-256 digest type

mod conv;
mod u256;

/// Fixed-size 256-bit value.
///
/// Re-exported as the digest type returned by `hash::sha256`.
pub use u256::U256;
