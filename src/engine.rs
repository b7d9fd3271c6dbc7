//! High-level merkleization API
//!
//! [`Merkleizer`] is what an SSZ serializer holds on to: it bundles the pure
//! packing and hashing functions with an optional root cache whose lifetime
//! is the engine's own.

use crate::cache::{Identity, RootCache};
use crate::config::EngineConfig;
use crate::merkle::{self, MixIn};
use crate::model::{Chunk, Root};
use crate::Result;
use log::debug;

/// Merkleization engine
///
/// Caching is fixed at construction. Enabling it changes how often roots are
/// computed, never which roots are returned.
pub struct Merkleizer {
    config: EngineConfig,
    cache: Option<RootCache>,
}

impl Merkleizer {
    /// Create an engine from a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let cache = config
            .cache
            .enabled
            .then(|| RootCache::with_max_entries(config.cache.max_entries));
        debug!(
            "merkleizer created (cache enabled: {}, max entries: {:?})",
            config.cache.enabled, config.cache.max_entries
        );

        Ok(Merkleizer { config, cache })
    }

    /// Engine with an unbounded root cache
    pub fn with_cache() -> Self {
        Merkleizer {
            config: EngineConfig::cached(),
            cache: Some(RootCache::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The root cache, if enabled
    pub fn cache(&self) -> Option<&RootCache> {
        self.cache.as_ref()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn pack<T: AsRef<[u8]>>(&self, items: &[T]) -> Result<Vec<Chunk>> {
        merkle::pack(items)
    }

    pub fn merkleize(&self, chunks: &[Chunk]) -> Result<Root> {
        merkle::merkleize(chunks)
    }

    pub fn merkleize_with_limit(&self, chunks: &[Chunk], limit: usize) -> Result<Root> {
        merkle::merkleize_with_limit(chunks, limit)
    }

    pub fn mix_in_length(&self, root: &Root, length: impl Into<MixIn>) -> Root {
        merkle::mix_in_length(root, length.into())
    }

    pub fn mix_in_type(&self, root: &Root, type_index: impl Into<MixIn>) -> Root {
        merkle::mix_in_type(root, type_index.into())
    }

    /// Root of a homogeneous sequence of serialized items
    pub fn root_of<T: AsRef<[u8]>>(&self, items: &[T]) -> Result<Root> {
        self.merkleize(&self.pack(items)?)
    }

    /// Root of a bounded list of basic items, with its length mixed in
    ///
    /// `limit_chunks` is the list's maximum size expressed in chunks.
    pub fn list_root<T: AsRef<[u8]>>(&self, items: &[T], limit_chunks: usize) -> Result<Root> {
        let chunks = if items.is_empty() {
            Vec::new()
        } else {
            self.pack(items)?
        };
        let root = self.merkleize_with_limit(&chunks, limit_chunks)?;
        Ok(self.mix_in_length(&root, items.len()))
    }

    /// Root of `value`, served from the cache when possible
    ///
    /// With the cache disabled `compute` always runs. With it enabled,
    /// `compute` runs only on a fingerprint miss and its result is stored.
    pub fn cached_root<V, F>(&self, value: &V, compute: F) -> Result<Root>
    where
        V: Identity + ?Sized,
        F: FnOnce() -> Result<Root>,
    {
        match &self.cache {
            Some(cache) => cache.get_or_try_insert_with(value.fingerprint(), compute),
            None => compute(),
        }
    }
}

impl Default for Merkleizer {
    fn default() -> Self {
        Merkleizer {
            config: EngineConfig::default(),
            cache: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::Error;

    #[test]
    fn test_default_engine_has_no_cache() {
        let engine = Merkleizer::default();
        assert!(!engine.cache_enabled());
        assert!(engine.cache().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig {
            cache: CacheConfig::bounded(0),
        };
        assert!(matches!(Merkleizer::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_root_of_single_item() {
        let engine = Merkleizer::default();
        let root = engine.root_of(&[5u64.to_le_bytes()]).unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 5;
        assert_eq!(root, Root::from_bytes(expected));
    }

    #[test]
    fn test_list_root_empty() {
        let engine = Merkleizer::default();
        let items: Vec<[u8; 8]> = Vec::new();
        let root = engine.list_root(&items, 4).unwrap();
        let expected = merkle::mix_in_length(&merkle::zero_hash(2).unwrap(), MixIn::from_u64(0));
        assert_eq!(root, expected);
    }

    #[test]
    fn test_list_root_length_binding() {
        let engine = Merkleizer::default();
        // [1] and [1, 0] pack to the same chunk but have different lengths
        let one = engine.list_root(&[1u64.to_le_bytes()], 4).unwrap();
        let two = engine
            .list_root(&[1u64.to_le_bytes(), 0u64.to_le_bytes()], 4)
            .unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn test_cached_root_skips_compute_on_hit() {
        let engine = Merkleizer::with_cache();
        let value = vec![1u8, 2, 3];
        let mut calls = 0;

        for _ in 0..3 {
            let root = engine
                .cached_root(&value, || {
                    calls += 1;
                    engine.root_of(&[value.as_slice()])
                })
                .unwrap();
            assert_eq!(root, engine.root_of(&[value.as_slice()]).unwrap());
        }

        assert_eq!(calls, 1);
        let stats = engine.cache().unwrap().stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_cached_root_without_cache_always_computes() {
        let engine = Merkleizer::default();
        let mut calls = 0;
        for _ in 0..3 {
            engine
                .cached_root(&7u64, || {
                    calls += 1;
                    engine.root_of(&[7u64.to_le_bytes()])
                })
                .unwrap();
        }
        assert_eq!(calls, 3);
    }
}
