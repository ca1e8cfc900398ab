//! Conversions between `U256` and raw byte arrays.

use crate::primitives::U256;

/// Wraps 32 big-endian bytes as a `U256`.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Unwraps a `U256` into its 32 big-endian bytes.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}
