//! Structured log events for key engine operations.

/// Log a scorer falling back to a zero score.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a component returning to normal operation.
pub fn degradation_recovered(component: &str) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        "degradation recovered"
    );
}

pub fn cache_hit(namespace: &str, key: &str) {
    tracing::debug!(event = "cache_hit", namespace = %namespace, key = %key, "cache hit");
}

pub fn cache_invalidated(entries: u64) {
    tracing::info!(event = "cache_invalidated", entries = entries, "cache invalidated");
}

/// Log engine startup with the effective configuration summary.
pub fn engine_started(lexicon_version: &str, profile: &str, cache_enabled: bool) {
    tracing::info!(
        event = "engine_started",
        lexicon_version = %lexicon_version,
        profile = %profile,
        cache_enabled = cache_enabled,
        "engine started"
    );
}
