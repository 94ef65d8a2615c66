//! Namespaced TTL cache of scorer results, backed by moka.
//!
//! One cache serves both scorers. Keys are `<namespace>:<scorer>:<fingerprint>`,
//! so semantic and route entries never collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;
use sentinela_core::config::RuntimeConfig;
use sentinela_core::models::{ScoreResult, ScoreSource};
use sentinela_observability::tracing_setup::events;
use serde::Serialize;

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

pub struct ScoreCache {
    cache: Cache<String, ScoreResult>,
    namespace: String,
    enabled: bool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ScoreCache {
    pub fn new(namespace: impl Into<String>, max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            namespace: namespace.into(),
            enabled: true,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        let mut cache = Self::new(
            config.cache_namespace.clone(),
            config.cache_max_capacity,
            config.cache_ttl(),
        );
        cache.enabled = config.cache_enabled;
        cache
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn key(&self, source: ScoreSource, fingerprint: &str) -> String {
        format!("{}:{}:{}", self.namespace, source.as_str(), fingerprint)
    }

    /// Cached result for `fingerprint`, if present and not expired.
    pub fn get(&self, source: ScoreSource, fingerprint: &str) -> Option<ScoreResult> {
        if !self.enabled {
            return None;
        }
        let key = self.key(source, fingerprint);
        match self.cache.get(&key) {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                events::cache_hit(&self.namespace, &key);
                Some(result)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a freshly computed result. Degraded results are never cached.
    pub fn insert(&self, source: ScoreSource, fingerprint: &str, result: ScoreResult) {
        if !self.enabled || result.is_degraded() {
            return;
        }
        self.cache.insert(self.key(source, fingerprint), result);
    }

    pub fn invalidate_all(&self) {
        let entries = self.cache.entry_count();
        self.cache.invalidate_all();
        events::cache_invalidated(entries);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}
