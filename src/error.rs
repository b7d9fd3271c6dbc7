//! Error types for ssz_root

use thiserror::Error;

/// Result type alias for ssz_root operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packing, merkleizing or configuring the engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot merkleize an empty chunk sequence")]
    EmptyChunks,

    #[error("Item {index} is {found} bytes wide, expected {expected}")]
    MixedItemWidth {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Chunk must be exactly 32 bytes, got {0}")]
    InvalidChunkLength(usize),

    #[error("Chunk count {count} exceeds limit {limit}")]
    ChunkLimitExceeded { count: usize, limit: usize },

    #[error("Tree depth {depth} exceeds maximum of {max}")]
    TreeTooDeep { depth: usize, max: usize },

    #[error("Mix-in value is {0} bytes, at most 32 allowed")]
    MixInTooWide(usize),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Config error: {0}")]
    Config(String),
}
