//! Span definitions for the scoring pipeline.

/// Span around one semantic scoring call.
#[macro_export]
macro_rules! semantic_span {
    ($fingerprint:expr) => {
        tracing::info_span!("sentinela.semantic", fingerprint = %$fingerprint)
    };
}

/// Span around one route scoring call.
#[macro_export]
macro_rules! route_span {
    ($vehicle_id:expr, $history_len:expr) => {
        tracing::info_span!(
            "sentinela.route",
            vehicle_id = %$vehicle_id,
            history_len = $history_len
        )
    };
}

/// Span around a full decision.
#[macro_export]
macro_rules! decision_span {
    ($narrative_len:expr, $has_trip:expr) => {
        tracing::info_span!(
            "sentinela.decision",
            narrative_len = $narrative_len,
            has_trip = $has_trip
        )
    };
}

/// Span around a batch of decisions.
#[macro_export]
macro_rules! batch_span {
    ($size:expr) => {
        tracing::info_span!("sentinela.batch", size = $size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEMANTIC: &str = "sentinela.semantic";
    pub const ROUTE: &str = "sentinela.route";
    pub const DECISION: &str = "sentinela.decision";
    pub const BATCH: &str = "sentinela.batch";
}
