//! SHA-256 node hashing and precomputed zero subtrees

use crate::model::Root;
use crate::{Error, Result};
use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

/// Deepest zero subtree kept in the table; covers every `usize` leaf count.
pub const MAX_TREE_DEPTH: usize = 64;

lazy_static! {
    static ref ZERO_HASHES: Vec<Root> = {
        let mut hashes = vec![Root::ZERO; MAX_TREE_DEPTH + 1];

        for i in 0..MAX_TREE_DEPTH {
            hashes[i + 1] = hash_concat(hashes[i].as_bytes(), hashes[i].as_bytes());
        }

        hashes
    };
}

/// SHA-256 of arbitrary bytes
pub fn hash(data: &[u8]) -> Root {
    Root::from_bytes(Sha256::digest(data).into())
}

/// SHA-256 of `left || right`
///
/// This is the only way two nodes are combined. Left always comes first.
pub fn hash_concat(left: &[u8], right: &[u8]) -> Root {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    Root::from_bytes(hasher.finalize().into())
}

/// Root of a full tree of `2^depth` zero chunks
pub fn zero_hash(depth: usize) -> Result<Root> {
    ZERO_HASHES.get(depth).copied().ok_or(Error::TreeTooDeep {
        depth,
        max: MAX_TREE_DEPTH,
    })
}
