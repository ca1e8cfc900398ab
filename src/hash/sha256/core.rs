//! SHA-256 core hashing functions
//!
//! This module implements the core logic of the SHA-256 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input
//!
//! The implementation is intentionally minimal and explicit. Blocks are
//! processed strictly in order: each block's rounds read the state produced
//! by the previous block, so there is no parallelism within one hash
//! computation.

use super::H256_INIT;
use super::computations::{all_rounds, expand_schedule};
use super::padding::pad;
use crate::primitives::U256;

/// Compresses a single 512-bit message block.
///
/// This function performs the SHA-256 compression step on a single
/// 64-byte block, updating the hash state in place. Taking the block as
/// `&[u8; 64]` makes the alignment requirement a type-level fact; the
/// function cannot be called on a misaligned slice.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let w = expand_schedule(block);

    all_rounds(state, &w);
}

/// Computes the SHA-256 hash of the given input.
///
/// This function pads the input per the SHA-256 preprocessing rules,
/// folds each 512-bit block into the hash state, and returns the final
/// 256-bit digest.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-256 digest as a [`U256`]
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 64-bit big-endian integer (in bits).
/// - The digest serializes the final state as 8 big-endian 32-bit words;
///   its `Display` form is the usual 64-character lowercase hex string.
pub fn sha256(input: &[u8]) -> U256 {
    let mut state = H256_INIT;

    for block in pad(input).chunks_exact(64) {
        let block: &[u8; 64] = block.try_into().unwrap();
        compress(block, &mut state);
    }

    U256::from(state)
}
