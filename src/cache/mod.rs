//! Fingerprint-keyed memoization of Merkle roots

mod fingerprint;
mod store;

pub use fingerprint::{Fingerprint, Identity};
pub use store::{CacheStats, RootCache};
