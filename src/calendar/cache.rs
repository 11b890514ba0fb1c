//! Bounded least-recently-used result cache with hit/miss accounting.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Capacity of the classification cache unless configured otherwise.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// A snapshot of cache occupancy and effectiveness.
///
/// `hit_rate` is `hits / (hits + misses) * 100`. Before any lookup it is
/// NaN (serialized as `null`), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently held.
    pub size: usize,
    /// Maximum entries held before eviction.
    pub max_size: usize,
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Hits as a percentage of all lookups.
    pub hit_rate: f64,
}

/// A fixed-capacity key/value store evicting the least recently used key.
///
/// Both [`get`](Self::get) hits and [`set`](Self::set) mark a key as most
/// recently used. Inserting a new key into a full cache evicts exactly one
/// entry, the least recently used one.
///
/// The cache has no internal locking; mutating calls take `&mut self`.
///
/// # Example
///
/// ```
/// use cn_workday::calendar::LruResultCache;
/// use std::num::NonZeroUsize;
///
/// let mut cache = LruResultCache::new(NonZeroUsize::new(2).unwrap());
/// cache.set("a", 1);
/// cache.set("b", 2);
/// assert_eq!(cache.get(&"a"), Some(&1)); // "b" is now least recently used
/// cache.set("c", 3);
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.stats().hits, 1);
/// assert_eq!(cache.stats().misses, 1);
/// ```
#[derive(Debug)]
pub struct LruResultCache<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Hash + Eq, V> LruResultCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up `key`, counting a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Inserts or replaces `key`, making it the most recently used entry.
    pub fn set(&mut self, key: K, value: V) {
        let full = self.entries.len() == self.entries.cap().get();
        let replacing = self.entries.contains(&key);
        self.entries.put(key, value);
        if full && !replacing {
            debug!(capacity = self.entries.cap().get(), "evicted least recently used entry");
        }
    }

    /// Whether `key` is present; does not count as a lookup or touch recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Removes every entry matching `predicate`, leaving the counters alone.
    ///
    /// Surviving entries keep their relative recency order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&K) -> bool) -> usize {
        let before = self.entries.len();
        let survivors: Vec<(K, V)> = std::iter::from_fn(|| self.entries.pop_lru())
            .filter(|(key, _)| !predicate(key))
            .collect();
        for (key, value) in survivors {
            self.entries.put(key, value);
        }
        before - self.entries.len()
    }

    /// Empties the cache and resets both counters to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Current occupancy and hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            size: self.entries.len(),
            max_size: self.capacity(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: self.hits as f64 / lookups as f64 * 100.0,
        }
    }
}
