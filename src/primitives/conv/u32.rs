//! Conversions between `U256` and arrays of 32-bit words.

use crate::primitives::U256;

/// Builds a `U256` from 8 big-endian `u32` words.
///
/// This is the final step of a hash computation: the 8-word state
/// serializes most-significant word first, 4 bytes per word.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (i, v) in value.into_iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}

/// Splits a `U256` into 8 big-endian `u32` words.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        let mut out = [0u32; 8];

        for (i, chunk) in value.0.chunks_exact(4).enumerate() {
            out[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}
