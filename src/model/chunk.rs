//! Fixed-size Merkle leaf

use crate::model::Root;
use crate::{Error, Result, BYTES_PER_CHUNK};
use std::fmt;

/// A 32-byte leaf of the Merkle tree
///
/// A chunk is never partially constructed: short input is zero-extended
/// through [`Chunk::right_padded`], and [`Chunk::from_slice`] refuses any
/// length other than [`BYTES_PER_CHUNK`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk([u8; BYTES_PER_CHUNK]);

impl Chunk {
    /// The all-zero padding chunk
    pub const ZERO: Chunk = Chunk([0u8; BYTES_PER_CHUNK]);

    /// Create a chunk from raw bytes
    pub const fn from_bytes(bytes: [u8; BYTES_PER_CHUNK]) -> Self {
        Chunk(bytes)
    }

    /// Create a chunk from a slice that must be exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; BYTES_PER_CHUNK] = bytes
            .try_into()
            .map_err(|_| Error::InvalidChunkLength(bytes.len()))?;
        Ok(Chunk(arr))
    }

    /// Copy up to 32 bytes into a chunk, zero-filling the remainder.
    pub(crate) fn right_padded(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= BYTES_PER_CHUNK);
        let mut arr = [0u8; BYTES_PER_CHUNK];
        arr[..bytes.len()].copy_from_slice(bytes);
        Chunk(arr)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; BYTES_PER_CHUNK] {
        &self.0
    }

    /// Check if every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; BYTES_PER_CHUNK]
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({})", hex::encode(self.0))
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Chunk::ZERO
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Chunk {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Chunk::from_slice(bytes)
    }
}

// Field roots are packed as chunks when composing a record's root.
impl From<Root> for Chunk {
    fn from(root: Root) -> Self {
        Chunk(*root.as_bytes())
    }
}
