//! Concurrency-safe fingerprint → root store

use super::Fingerprint;
use crate::model::Root;
use crate::Result;
use log::{debug, trace};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing cache effectiveness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

struct Entries {
    roots: HashMap<Fingerprint, Root>,
    /// Insertion order, only tracked when the cache is bounded
    order: VecDeque<Fingerprint>,
}

/// Memoized roots keyed by [`Fingerprint`]
///
/// Entries are written once and never updated: inserting a fingerprint that
/// is already present keeps the stored root. With a `max_entries` bound the
/// oldest entry is evicted to make room; without one the cache grows for the
/// lifetime of its owner.
pub struct RootCache {
    entries: RwLock<Entries>,
    max_entries: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl RootCache {
    /// Create an unbounded cache
    pub fn new() -> Self {
        Self::with_max_entries(None)
    }

    /// Create a cache holding at most `max_entries` roots (`None` = unbounded)
    pub fn with_max_entries(max_entries: Option<usize>) -> Self {
        RootCache {
            entries: RwLock::new(Entries {
                roots: HashMap::new(),
                order: VecDeque::new(),
            }),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Look up a previously stored root
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Root> {
        let found = self.entries.read().roots.get(fingerprint).copied();
        match found {
            Some(root) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!("root cache hit {:?} -> {:?}", fingerprint, root);
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!("root cache miss {:?}", fingerprint);
            }
        }
        found
    }

    /// Store a root and return the one held by the cache
    ///
    /// If another caller stored this fingerprint first, its root is kept and
    /// returned.
    pub fn insert(&self, fingerprint: Fingerprint, root: Root) -> Root {
        let mut entries = self.entries.write();

        if let Some(existing) = entries.roots.get(&fingerprint) {
            return *existing;
        }

        if let Some(max) = self.max_entries {
            if max == 0 {
                return root;
            }
            while entries.roots.len() >= max {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.roots.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!("root cache evicted {:?} (max {})", oldest, max);
            }
            entries.order.push_back(fingerprint);
        }

        entries.roots.insert(fingerprint, root);
        root
    }

    /// Return the cached root, or compute and store it on a miss
    ///
    /// `compute` runs without holding the lock. Two threads missing on the
    /// same fingerprint may both compute; the first stored root wins. An
    /// error from `compute` is returned and nothing is stored.
    pub fn get_or_try_insert_with<F>(&self, fingerprint: Fingerprint, compute: F) -> Result<Root>
    where
        F: FnOnce() -> Result<Root>,
    {
        if let Some(root) = self.get(&fingerprint) {
            return Ok(root);
        }
        let root = compute()?;
        Ok(self.insert(fingerprint, root))
    }

    /// Number of stored roots
    pub fn len(&self) -> usize {
        self.entries.read().roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry; counters are kept
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.roots.clear();
        entries.order.clear();
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for RootCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fp(n: u8) -> Fingerprint {
        Fingerprint::derive("test", &[n])
    }

    fn root(n: u8) -> Root {
        Root::from_bytes([n; 32])
    }

    #[test]
    fn test_cache_get_insert() {
        let cache = RootCache::new();
        assert_eq!(cache.get(&fp(1)), None);

        cache.insert(fp(1), root(1));
        assert_eq!(cache.get(&fp(1)), Some(root(1)));
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_cache_entries_never_replaced() {
        let cache = RootCache::new();
        assert_eq!(cache.insert(fp(1), root(1)), root(1));
        assert_eq!(cache.insert(fp(1), root(2)), root(1));
        assert_eq!(cache.get(&fp(1)), Some(root(1)));
    }

    #[test]
    fn test_cache_hit_skips_compute() {
        let cache = RootCache::new();
        let mut calls = 0;

        let first = cache
            .get_or_try_insert_with(fp(3), || {
                calls += 1;
                Ok(root(3))
            })
            .unwrap();
        let second = cache
            .get_or_try_insert_with(fp(3), || {
                calls += 1;
                Ok(root(9))
            })
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cache_failed_compute_stores_nothing() {
        let cache = RootCache::new();
        let result = cache.get_or_try_insert_with(fp(4), || Err(Error::EmptyChunks));
        assert!(matches!(result, Err(Error::EmptyChunks)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bounded_cache_evicts_oldest() {
        let cache = RootCache::with_max_entries(Some(2));
        cache.insert(fp(1), root(1));
        cache.insert(fp(2), root(2));
        cache.insert(fp(3), root(3));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&fp(1)), None);
        assert_eq!(cache.get(&fp(2)), Some(root(2)));
        assert_eq!(cache.get(&fp(3)), Some(root(3)));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_zero_capacity_cache_stores_nothing() {
        let cache = RootCache::with_max_entries(Some(0));
        assert_eq!(cache.insert(fp(1), root(1)), root(1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let cache = RootCache::with_max_entries(Some(4));
        cache.insert(fp(1), root(1));
        cache.clear();
        assert!(cache.is_empty());
        cache.insert(fp(1), root(5));
        assert_eq!(cache.get(&fp(1)), Some(root(5)));
    }

    #[test]
    fn test_cache_concurrent_population() {
        let cache = RootCache::new();
        std::thread::scope(|s| {
            for t in 0..8u8 {
                let cache = &cache;
                s.spawn(move || {
                    for n in 0..32u8 {
                        let stored = cache
                            .get_or_try_insert_with(fp(n), || Ok(root(n)))
                            .unwrap();
                        assert_eq!(stored, root(n), "thread {}", t);
                    }
                });
            }
        });
        assert_eq!(cache.len(), 32);
    }
}
