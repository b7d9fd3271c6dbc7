//! Binary Merkle tree construction

use super::hasher::{hash_concat, zero_hash, MAX_TREE_DEPTH};
use crate::model::{Chunk, Root};
use crate::{Error, Result};

/// Fold a chunk sequence into its Merkle root
///
/// One chunk is returned verbatim. Longer sequences are right-extended with
/// zero chunks to the next power of two and hashed pairwise, level by level,
/// as `hash(left || right)`.
pub fn merkleize(chunks: &[Chunk]) -> Result<Root> {
    match chunks {
        [] => Err(Error::EmptyChunks),
        [single] => Ok(Root::from(*single)),
        _ => {
            let width = chunks.len().next_power_of_two();
            let mut layer: Vec<Root> = Vec::with_capacity(width);
            layer.extend(chunks.iter().copied().map(Root::from));
            layer.resize(width, Root::ZERO);

            while layer.len() > 1 {
                layer = next_layer(&layer);
            }
            Ok(layer[0])
        }
    }
}

/// Merkleize against a declared chunk limit
///
/// The tree has `next_power_of_two(limit)` leaves. Missing leaves are never
/// materialized: an unpaired node on any level is hashed with the zero subtree
/// of that height, so a limit of `2^40` costs only the real chunks plus one
/// hash per level.
pub fn merkleize_with_limit(chunks: &[Chunk], limit: usize) -> Result<Root> {
    if chunks.len() > limit {
        return Err(Error::ChunkLimitExceeded {
            count: chunks.len(),
            limit,
        });
    }

    let width = limit
        .max(1)
        .checked_next_power_of_two()
        .ok_or(Error::TreeTooDeep {
            depth: MAX_TREE_DEPTH,
            max: MAX_TREE_DEPTH - 1,
        })?;
    let depth = width.trailing_zeros() as usize;

    if chunks.is_empty() {
        return zero_hash(depth);
    }

    let mut layer: Vec<Root> = chunks.iter().copied().map(Root::from).collect();
    for height in 0..depth {
        if layer.len() % 2 == 1 {
            layer.push(zero_hash(height)?);
        }
        layer = next_layer(&layer);
    }
    Ok(layer[0])
}

fn next_layer(layer: &[Root]) -> Vec<Root> {
    layer
        .chunks_exact(2)
        .map(|pair| hash_concat(pair[0].as_bytes(), pair[1].as_bytes()))
        .collect()
}
