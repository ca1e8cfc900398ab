use std::fmt::{Display, Formatter, Result};

/// A fixed-size 256-bit value stored as 32 big-endian bytes.
///
/// This is the digest type of the crate: `hash::sha256` serializes its
/// final 8-word state into a `U256`. The `Display` form is the usual
/// 64-character lowercase hexadecimal string, most-significant byte first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Borrows the digest as raw big-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the digest as raw big-endian bytes.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
