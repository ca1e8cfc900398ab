//! SHA-256 message preprocessing (FIPS 180-4, section 5.1.1).
//!
//! Padding extends a message so its bit length becomes a multiple of 512,
//! leaving the last 64 bits of the final block for the original message
//! length. Every input pads successfully, including the empty message,
//! which produces exactly one all-padding block.

/// Byte offset within a block where the 64-bit length field begins.
const LENGTH_OFFSET: usize = 56;

/// Pads a message to a whole number of 512-bit blocks.
///
/// Appends the `0x80` marker byte (a `1` bit followed by seven `0` bits),
/// then the minimum run of zero bytes placing the length field at the end
/// of a block, then the message length in bits as a 64-bit big-endian
/// integer.
///
/// # Parameters
/// - `input`: Arbitrary-length message
///
/// # Returns
/// - The padded message, whose length is a positive multiple of 64 bytes
///
/// # Notes
/// - Pure function, no failure modes.
/// - When fewer than 9 bytes remain after the marker (a 56- to 63-byte
///   tail), the zero run wraps into a second block.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let len = input.len();

    // One marker byte, then zeros up to the next length-field boundary.
    let rem = (len + 1) % 64;
    let zeros = if rem > LENGTH_OFFSET {
        64 + LENGTH_OFFSET - rem
    } else {
        LENGTH_OFFSET - rem
    };

    let mut padded = Vec::with_capacity(len + 1 + zeros + 8);

    padded.extend_from_slice(input);
    padded.push(0x80);
    padded.resize(len + 1 + zeros, 0);

    let bit_len = (len as u64) << 3;
    padded.extend_from_slice(&bit_len.to_be_bytes());

    padded
}
