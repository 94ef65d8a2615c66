use std::sync::Arc;

use proptest::prelude::*;
use sentinela_core::config::SemanticConfig;
use sentinela_core::traits::ISemanticScorer;
use sentinela_lexicon::{builtin, LexiconSet};
use sentinela_semantic::SemanticScorer;

fn scorer() -> SemanticScorer {
    SemanticScorer::new(Arc::new(LexiconSet::builtin().unwrap()), SemanticConfig::default())
}

fn pick(list: &'static str) -> impl Strategy<Value = &'static str> {
    prop::sample::select(builtin::terms(list).unwrap_or_default().to_vec())
}

fn any_term() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        pick(builtin::CRITICAL_KEYWORDS),
        pick(builtin::COVERAGE_PATTERNS),
        pick(builtin::CRIMINAL_CONTEXTS),
        pick(builtin::EVASION_INDICATORS),
        pick(builtin::NORMAL_INDICATORS),
        Just("rodovia"),
        Just("condutor"),
    ]
}

proptest! {
    #[test]
    fn score_is_always_in_unit_interval(words in prop::collection::vec(any_term(), 0..40)) {
        let text = format!("relato da abordagem: {}", words.join(" "));
        let result = scorer().score(&text).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.score()));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{20,300}") {
        if let Ok(result) = scorer().score(&text) {
            prop_assert!((0.0..=1.0).contains(&result.score()));
        }
    }

    #[test]
    fn monotone_in_critical_hits(
        base in prop::collection::vec(any_term(), 0..20),
        extra in pick(builtin::CRITICAL_KEYWORDS),
    ) {
        let s = scorer();
        let before = format!("relato da abordagem: {}", base.join(" "));
        let after = format!("{before} {extra}");
        let a = s.score(&before).unwrap().score();
        let b = s.score(&after).unwrap().score();
        prop_assert!(b >= a, "{a} -> {b}");
    }

    #[test]
    fn scoring_is_deterministic(words in prop::collection::vec(any_term(), 0..20)) {
        let text = format!("relato da abordagem: {}", words.join(" "));
        prop_assert_eq!(scorer().score(&text).unwrap(), scorer().score(&text).unwrap());
    }
}
