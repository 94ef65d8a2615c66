use sentinela_core::config::LoggingConfig;
use sentinela_core::models::DegradationEvent;
use sentinela_observability::tracing_setup::spans::names;
use sentinela_observability::{
    decision_span, init_tracing, route_span, semantic_span, DegradationTracker, RecoveryStatus,
};

#[test]
fn init_is_idempotent() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json: true,
    };
    init_tracing(&config);
    init_tracing(&LoggingConfig::default());
}

#[test]
fn spans_can_be_entered() {
    let _decision = decision_span!(120usize, true).entered();
    let _semantic = semantic_span!("abc123").entered();
    let _route = route_span!("AAA0A00", 3usize).entered();
    assert_eq!(names::DECISION, "sentinela.decision");
}

#[test]
fn tracked_events_serialize_with_status() {
    let mut tracker = DegradationTracker::new();
    tracker.record(DegradationEvent::now("route_scorer", "cancelled", "zero_score"));
    let json = serde_json::to_value(tracker.events()).unwrap();
    assert_eq!(json[0]["recovery_status"], "active");
    assert_eq!(json[0]["event"]["component"], "route_scorer");

    tracker.mark_recovered("route_scorer");
    assert_eq!(tracker.events()[0].recovery_status, RecoveryStatus::Recovered);
    assert!(tracker.events()[0].recovered_at.is_some());
}
