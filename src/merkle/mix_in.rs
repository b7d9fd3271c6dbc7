//! Binding roots to a length or a union selector

use super::hasher::hash_concat;
use crate::model::Root;
use crate::{Error, Result, BYTES_PER_CHUNK};

/// A 32-byte little-endian value mixed into a root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MixIn([u8; BYTES_PER_CHUNK]);

impl MixIn {
    /// Encode an integer as a little-endian uint256
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; BYTES_PER_CHUNK];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        MixIn(bytes)
    }

    /// Zero-extend an already little-endian encoded value
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > BYTES_PER_CHUNK {
            return Err(Error::MixInTooWide(bytes.len()));
        }
        let mut out = [0u8; BYTES_PER_CHUNK];
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(MixIn(out))
    }

    pub fn as_bytes(&self) -> &[u8; BYTES_PER_CHUNK] {
        &self.0
    }
}

impl From<u64> for MixIn {
    fn from(value: u64) -> Self {
        MixIn::from_u64(value)
    }
}

impl From<usize> for MixIn {
    fn from(value: usize) -> Self {
        MixIn::from_u64(value as u64)
    }
}

impl From<u8> for MixIn {
    fn from(value: u8) -> Self {
        MixIn::from_u64(value.into())
    }
}

/// `hash(root || length)`
pub fn mix_in_length(root: &Root, length: MixIn) -> Root {
    hash_concat(root.as_bytes(), length.as_bytes())
}

/// `hash(root || type_index)`
pub fn mix_in_type(root: &Root, type_index: MixIn) -> Root {
    hash_concat(root.as_bytes(), type_index.as_bytes())
}
