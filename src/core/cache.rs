//! Bounded memoization of resolved intents.
//!
//! Keyed by the exact query string so repeated queries never repeat an
//! external estimation call. Capacity-bounded with LRU eviction plus a TTL so
//! stale estimates age out.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use crate::intent::types::PriceIntent;

pub struct IntentCache {
    entries: Mutex<LruCache<String, (PriceIntent, Instant)>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub hit_rate: f64,
}

impl IntentCache {
    pub fn new(capacity: usize, ttl_secs: u64) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least one");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl: Duration::from_secs(ttl_secs),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, query: &str) -> Option<PriceIntent> {
        let mut entries = self.entries.lock();
        if let Some((intent, stored_at)) = entries.get(query) {
            if stored_at.elapsed() < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(intent.clone());
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub fn put(&self, query: &str, intent: PriceIntent) {
        let mut entries = self.entries.lock();
        entries.put(query.to_string(), (intent, Instant::now()));
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        let entries = self.entries.lock();

        CacheStats {
            hits,
            misses,
            size: entries.len(),
            hit_rate,
        }
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
