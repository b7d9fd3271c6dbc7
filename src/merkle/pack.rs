//! Packing serialized items into chunks

use crate::model::Chunk;
use crate::{Error, Result, BYTES_PER_CHUNK};

/// Pack serialized items of one basic type into 32-byte chunks
///
/// - no items → one zero chunk
/// - items that are already 32 bytes wide are used as chunks unchanged
/// - otherwise items are concatenated and split, zero-padding only the last chunk
///
/// All items must share the width of the first one; a differing item is
/// rejected with [`Error::MixedItemWidth`] instead of being flattened.
pub fn pack<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<Chunk>> {
    let Some(first) = items.first() else {
        return Ok(vec![Chunk::ZERO]);
    };
    let expected = first.as_ref().len();

    for (index, item) in items.iter().enumerate() {
        let found = item.as_ref().len();
        if found != expected {
            return Err(Error::MixedItemWidth {
                index,
                expected,
                found,
            });
        }
    }

    if expected == BYTES_PER_CHUNK {
        return items
            .iter()
            .map(|item| Chunk::from_slice(item.as_ref()))
            .collect();
    }

    let mut flat = Vec::with_capacity(expected * items.len());
    for item in items {
        flat.extend_from_slice(item.as_ref());
    }
    Ok(pack_bytes(&flat))
}

/// Pack items whose width is fixed by their type
///
/// Produces the same chunks as [`pack`] without the runtime width check.
pub fn pack_fixed<const N: usize>(items: &[[u8; N]]) -> Vec<Chunk> {
    if items.is_empty() {
        return vec![Chunk::ZERO];
    }
    if N == BYTES_PER_CHUNK {
        return items.iter().map(|item| Chunk::right_padded(item)).collect();
    }
    pack_bytes(items.as_flattened())
}

/// Split an already flattened byte string into chunks
///
/// The last chunk is right-padded with zeros; empty input yields one zero chunk.
pub fn pack_bytes(bytes: &[u8]) -> Vec<Chunk> {
    if bytes.is_empty() {
        return vec![Chunk::ZERO];
    }
    bytes.chunks(BYTES_PER_CHUNK).map(Chunk::right_padded).collect()
}
