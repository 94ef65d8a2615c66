use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Concurrency and timeout bound for one scorer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerLimits {
    pub max_concurrent: usize,
    pub timeout_ms: u64,
}

impl ScorerLimits {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ScorerLimits {
    fn default() -> Self {
        Self {
            max_concurrent: defaults::DEFAULT_SEMANTIC_MAX_CONCURRENT,
            timeout_ms: defaults::DEFAULT_SCORER_TIMEOUT_MS,
        }
    }
}

/// Agent runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub semantic: ScorerLimits,
    pub route: ScorerLimits,
    pub cache_enabled: bool,
    pub cache_ttl_secs: u64,
    pub cache_max_capacity: u64,
    /// Prefix of every cache key, ahead of the scorer namespace.
    pub cache_namespace: String,
}

impl RuntimeConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            semantic: ScorerLimits {
                max_concurrent: defaults::DEFAULT_SEMANTIC_MAX_CONCURRENT,
                timeout_ms: defaults::DEFAULT_SCORER_TIMEOUT_MS,
            },
            route: ScorerLimits {
                max_concurrent: defaults::DEFAULT_ROUTE_MAX_CONCURRENT,
                timeout_ms: defaults::DEFAULT_SCORER_TIMEOUT_MS,
            },
            cache_enabled: true,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            cache_max_capacity: defaults::DEFAULT_CACHE_MAX_CAPACITY,
            cache_namespace: defaults::DEFAULT_CACHE_NAMESPACE.to_string(),
        }
    }
}
