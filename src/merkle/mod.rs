//! SSZ merkleization
//!
//! Pure functions with no shared state:
//! - [`pack`] turns serialized items into 32-byte chunks
//! - [`merkleize`] folds chunks into a root with SHA-256
//! - [`mix_in_length`] / [`mix_in_type`] bind a root to a length or selector

mod hasher;
mod mix_in;
mod pack;
mod tree;

pub use hasher::{hash, hash_concat, zero_hash, MAX_TREE_DEPTH};
pub use mix_in::{mix_in_length, mix_in_type, MixIn};
pub use pack::{pack, pack_bytes, pack_fixed};
pub use tree::{merkleize, merkleize_with_limit};
