//! Double SHA-256 hashing
//!
//! Block headers and transactions are identified by SHA-256 applied twice.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// 32-byte hash, stored in internal (little-endian) byte order.
///
/// Hex strings use the byte-reversed display order of Bitcoin-family
/// tooling: `to_hex` of a block hash prints with the leading zeros that
/// satisfy the proof-of-work target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash (genesis previous-block hash, unset anchors)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Parse a display-order hex string.
    ///
    /// Accepts an optional `0x` prefix. Strings shorter than 64 digits are
    /// zero-extended on the left, so `"0x00"` parses to the zero hash.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() > 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut padded = String::with_capacity(64);
        for _ in hex.len()..64 {
            padded.push('0');
        }
        padded.push_str(hex);
        let bytes = hex::decode(&padded)?;
        let mut arr = [0u8; 32];
        for (i, b) in bytes.iter().enumerate() {
            arr[31 - i] = *b;
        }
        Ok(Hash256(arr))
    }

    /// Render as a display-order hex string
    pub fn to_hex(&self) -> String {
        let mut rev = self.0;
        rev.reverse();
        hex::encode(rev)
    }

    /// Get the internal-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True for the all-zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Hash256 {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Hash arbitrary bytes with double SHA-256
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&second);
    Hash256(arr)
}

/// Hash two nodes together (for Merkle tree interior nodes)
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}
