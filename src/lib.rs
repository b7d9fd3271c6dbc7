//! # ssz_root
//!
//! SSZ merkleization: the part of hash-tree-root that has to be bit-exact.
//!
//! A type-directed serializer turns each field of a value into bytes and
//! hands them to this crate, which packs them into 32-byte chunks, folds the
//! chunks into a SHA-256 binary Merkle tree, and mixes in list lengths or
//! union selectors. Roots of sub-values can be memoized by fingerprint.
//!
//! ## Core Concepts
//!
//! - **Chunk**: a 32-byte leaf, zero-padded when the data runs short
//! - **Root**: the 32-byte digest at the top of the tree
//! - **Mix-in**: `hash(root || metadata)` binding a length or variant index
//! - **Fingerprint**: cache key identifying a value and its type shape
//!
//! ## Example
//!
//! ```
//! use ssz_root::{Chunk, Merkleizer, Root};
//!
//! let engine = Merkleizer::default();
//! let previous = engine.root_of(&[[0x9fu8, 0x41, 0xbd, 0x5b]])?;
//! let current = engine.root_of(&[[0xcbu8, 0xb0, 0xf1, 0xd7]])?;
//! let epoch = engine.root_of(&[11971467576204192310u64.to_le_bytes()])?;
//!
//! let fields: Vec<Chunk> = [previous, current, epoch].into_iter().map(Into::into).collect();
//! let root = engine.merkleize(&fields)?;
//! assert_eq!(
//!     root,
//!     Root::from_hex("3ad1264c33bc66b43a49b1258b88f34b8dbfa1649f17e6df550f589650d34992")?
//! );
//! # Ok::<(), ssz_root::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod merkle;
pub mod model;

mod engine;
mod error;

pub use cache::{CacheStats, Fingerprint, Identity, RootCache};
pub use config::{CacheConfig, EngineConfig};
pub use engine::Merkleizer;
pub use error::{Error, Result};
pub use merkle::{merkleize, merkleize_with_limit, mix_in_length, mix_in_type, pack, MixIn};
pub use model::{Chunk, Root};

/// Size of a Merkle leaf and of every digest
pub const BYTES_PER_CHUNK: usize = 32;
