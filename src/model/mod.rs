//! Core data model types for ssz_root

mod chunk;
mod root;

pub use chunk::Chunk;
pub use root::Root;
