//! Pure-Rust SHA-256.
//!
//! This crate provides a from-scratch implementation of the SHA-256
//! cryptographic hash function as specified in FIPS 180-4, computed in a
//! single pass over a fully materialized byte buffer.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on raw throughput or a large high-level API. The core is explicit
//! in its semantics, free of runtime dependencies, and free of shared
//! mutable state, so independent hash computations may run concurrently
//! without coordination.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 algorithm itself: message padding, per-block message
//!   schedule expansion, the 64-round compression function, and the
//!   one-shot `sha256` entry point.
//!
//! - `primitives`
//!   Fixed-size building blocks, currently the `U256` digest value with
//!   its conversions and lowercase hex rendering.
//!
//! # Design goals
//!
//! - No runtime dependencies
//! - No heap allocations inside the compression core
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled SHA-256
//! primitive with every step of the pipeline in plain sight.

pub mod hash;
pub mod primitives;
