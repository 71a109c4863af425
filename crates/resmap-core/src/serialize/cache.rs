//! Attribute map cache keyed by (entity type, field-set) fingerprints.

use parking_lot::RwLock;
use resmap_proto::AttributeMap;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache key for one (entity type, requested field set) combination.
///
/// The fingerprint hashes the canonical form of the filter: the engine
/// normalizes names to field-case, and the constructor sorts them before
/// hashing. Set-equal filters therefore produce identical keys
/// regardless of request ordering or wire casing, and distinct filter
/// sets hash apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSetFingerprint {
    entity_type: String,
    fields_hash: u64,
}

impl FieldSetFingerprint {
    /// Create a fingerprint for an entity type and a normalized filter.
    ///
    /// An empty slice means "no filter" and keys the unfiltered map.
    pub fn new(entity_type: impl Into<String>, normalized_fields: &[String]) -> Self {
        let mut sorted: Vec<&str> = normalized_fields.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let mut hasher = DefaultHasher::new();
        sorted.hash(&mut hasher);

        Self {
            entity_type: entity_type.into(),
            fields_hash: hasher.finish(),
        }
    }

    /// The entity type this fingerprint belongs to.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }
}

/// Attribute map store shared across requests.
///
/// Implementations must make individual reads and writes atomic, but
/// need not serialize whole extraction pipelines: two requests racing to
/// populate one key write identical maps, and the last write wins.
pub trait CacheStore: Send + Sync {
    /// Check whether a fingerprint has a cached map.
    fn contains(&self, key: &FieldSetFingerprint) -> bool;

    /// Get the cached map for a fingerprint.
    fn get(&self, key: &FieldSetFingerprint) -> Option<AttributeMap>;

    /// Store a map under a fingerprint.
    fn set(&self, key: FieldSetFingerprint, attributes: AttributeMap);

    /// Drop every cached entry.
    fn clear(&self);
}

/// Cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    /// Get hit count.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get miss count.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

/// Unbounded in-memory cache store.
///
/// Entries live for the process lifetime and are dropped only by
/// [`CacheStore::clear`]. A cached map never reflects entity or metadata
/// changes made after it was first computed; callers that swap metadata
/// must clear explicitly. Unbounded growth is the accepted tradeoff;
/// environments that need eviction supply their own store.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<FieldSetFingerprint, AttributeMap>>,
    stats: CacheStats,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access hit/miss statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached maps.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn contains(&self, key: &FieldSetFingerprint) -> bool {
        self.entries.read().contains_key(key)
    }

    fn get(&self, key: &FieldSetFingerprint) -> Option<AttributeMap> {
        match self.entries.read().get(key) {
            Some(attributes) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(attributes.clone())
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn set(&self, key: FieldSetFingerprint, attributes: AttributeMap) {
        self.entries.write().insert(key, attributes);
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}
