//! Chaotic rolling hash: short, stable identifiers.
//!
//! 32 bits of non-cryptographic mixing. Collisions are expected at scale;
//! use it for display identifiers, never for integrity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::ChaosEngine;

/// A 32-bit chaotic hash, displayed as 8 uppercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChaoticHash(pub u32);

impl ChaoticHash {
    /// Create from a raw value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Convert to an 8-character uppercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0.to_be_bytes())
    }

    /// Parse from an 8-character hex string (either case).
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(u32::from_be_bytes(arr)))
    }
}

impl fmt::Debug for ChaoticHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChaoticHash({})", self.to_hex())
    }
}

impl fmt::Display for ChaoticHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<ChaoticHash> for String {
    fn from(hash: ChaoticHash) -> Self {
        hash.to_hex()
    }
}

impl ChaosEngine {
    /// Fold `input` into a chaotic rolling hash.
    ///
    /// Resets first. Each UTF-16 code unit `c` updates
    /// `hash = hash * 31 + c * floor(next() * 1000)` with 32-bit wrapping;
    /// the result is the absolute value of the signed hash.
    pub fn chaotic_hash(&mut self, input: &str) -> ChaoticHash {
        self.reset();
        let mut hash: i32 = 0;
        for unit in input.encode_utf16() {
            let weight = (self.next() * 1000.0).floor() as i32;
            hash = hash
                .wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit).wrapping_mul(weight));
        }
        ChaoticHash(hash.unsigned_abs())
    }
}
