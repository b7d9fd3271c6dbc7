//! 32-byte Merkle root

use crate::model::Chunk;
use crate::{Error, Result, BYTES_PER_CHUNK};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte hash-tree-root
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Root([u8; BYTES_PER_CHUNK]);

impl Root {
    /// The all-zero root
    pub const ZERO: Root = Root([0u8; BYTES_PER_CHUNK]);

    /// Create a root from raw bytes
    pub const fn from_bytes(bytes: [u8; BYTES_PER_CHUNK]) -> Self {
        Root(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; BYTES_PER_CHUNK] {
        &self.0
    }

    /// Convert to a lowercase hex string without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex, with or without a leading `0x`
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| Error::InvalidHex(e.to_string()))?;
        let arr: [u8; BYTES_PER_CHUNK] = bytes.as_slice().try_into().map_err(|_| {
            Error::InvalidHex(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Root(arr))
    }

    /// Get a short prefix for display
    pub fn short(&self) -> String {
        self.to_hex()[..8].to_string()
    }

    /// Check if this is the zero root
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; BYTES_PER_CHUNK]
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root({})", self.short())
    }
}

impl Default for Root {
    fn default() -> Self {
        Root::ZERO
    }
}

impl AsRef<[u8]> for Root {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BYTES_PER_CHUNK]> for Root {
    fn from(bytes: [u8; BYTES_PER_CHUNK]) -> Self {
        Root(bytes)
    }
}

// A single-chunk tree's root is the chunk itself.
impl From<Chunk> for Root {
    fn from(chunk: Chunk) -> Self {
        Root(*chunk.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_hex_roundtrip() {
        let root = Root::from_bytes([0xab; 32]);
        let parsed = Root::from_hex(&root.to_hex()).unwrap();
        assert_eq!(root, parsed);
    }

    #[test]
    fn test_root_from_hex_accepts_prefix() {
        let plain = Root::from_hex(&"11".repeat(32)).unwrap();
        let prefixed = Root::from_hex(&format!("0x{}", "11".repeat(32))).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.to_string(), format!("0x{}", "11".repeat(32)));
    }

    #[test]
    fn test_root_from_hex_rejects_wrong_length() {
        assert!(matches!(Root::from_hex("abcd"), Err(Error::InvalidHex(_))));
        assert!(matches!(Root::from_hex("zz"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_root_short() {
        let root = Root::from_bytes([0x12; 32]);
        assert_eq!(root.short(), "12121212");
        assert!(Root::default().is_zero());
    }
}
