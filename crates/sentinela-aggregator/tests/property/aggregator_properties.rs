use proptest::prelude::*;
use sentinela_aggregator::RiskAggregator;
use sentinela_core::models::{ContextFactor, DecisionWeights, ScoreResult, ScoreSource};

fn result(source: ScoreSource) -> impl Strategy<Value = ScoreResult> {
    (
        0.0f64..=1.0,
        prop::collection::vec(prop::sample::select(ContextFactor::ALL.to_vec()), 0..4),
    )
        .prop_map(move |(score, factors)| ScoreResult::new(source, score).with_factors(factors))
}

fn weights() -> impl Strategy<Value = DecisionWeights> {
    (0.0f64..=1.0).prop_map(|s| DecisionWeights::new(s, 1.0 - s))
}

proptest! {
    #[test]
    fn decide_is_idempotent(
        semantic in result(ScoreSource::Semantic),
        route in result(ScoreSource::Route),
        weights in weights(),
    ) {
        let aggregator = RiskAggregator::default();
        let first = aggregator.decide(&semantic, &route, weights);
        let second = aggregator.decide(&semantic, &route, weights);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn confidence_in_unit_interval(
        semantic in result(ScoreSource::Semantic),
        route in result(ScoreSource::Route),
        weights in weights(),
    ) {
        let verdict = RiskAggregator::default().decide(&semantic, &route, weights);
        prop_assert!((0.0..=1.0).contains(&verdict.confidence));
        prop_assert_eq!(verdict.is_suspect(), verdict.confidence >= verdict.threshold);
    }
}
