use std::sync::Arc;

use sentinela_core::config::{ConfigProfile, SemanticConfig, SentinelaConfig};
use sentinela_core::errors::InputError;
use sentinela_core::models::ContextFactor;
use sentinela_core::traits::{IProbabilitySource, ISemanticScorer};
use sentinela_lexicon::LexiconSet;
use sentinela_semantic::SemanticScorer;

fn scorer() -> SemanticScorer {
    SemanticScorer::new(Arc::new(LexiconSet::builtin().unwrap()), SemanticConfig::default())
}

struct FixedProbability(f64);

impl IProbabilitySource for FixedProbability {
    fn probability(&self, _narrative: &str) -> Option<f64> {
        Some(self.0)
    }

    fn model_id(&self) -> &str {
        "fixed"
    }
}

struct Unavailable;

impl IProbabilitySource for Unavailable {
    fn probability(&self, _narrative: &str) -> Option<f64> {
        None
    }

    fn model_id(&self) -> &str {
        "offline"
    }
}

#[test]
fn scenario_a_narrative_scores_high() {
    let scenario = test_fixtures::load_scenario("scenario_a");
    let result = scorer().score(&scenario.narrative).unwrap();
    assert!((result.score() - 0.95).abs() < 1e-9);
    assert!(result.contribution("critical_escalation") > 0.0);
    let terms = result.matched_term_strings();
    assert_eq!(
        terms,
        vec!["denúncia anônima", "tráfico", "drogas", "cocaína", "escondida"]
    );
}

#[test]
fn scenario_b_and_c_narratives_score_zero() {
    for name in ["scenario_b", "scenario_c", "scenario_c_long"] {
        let scenario = test_fixtures::load_scenario(name);
        let result = scorer().score(&scenario.narrative).unwrap();
        assert_eq!(result.score(), 0.0, "{name}");
    }
}

#[test]
fn scenario_c_keeps_the_suspicious_hit_in_the_explanation() {
    let scenario = test_fixtures::load_scenario("scenario_c");
    let result = scorer().score(&scenario.narrative).unwrap();
    assert!(result.matched_term_strings().contains(&"nervoso"));
    assert!(result.contribution("criminal_contexts") > 0.0);
    assert!(result.contribution("normal_indicators") < 0.0);
}

#[test]
fn too_short_narrative_is_invalid_input() {
    let err = scorer().score("só isso").unwrap_err();
    assert!(matches!(err, InputError::NarrativeTooShort { .. }));
    assert!(scorer().check("só isso").is_err());
}

#[test]
fn oversized_narrative_is_truncated_before_scoring() {
    let config = SemanticConfig {
        max_text_length: 40,
        ..Default::default()
    };
    let scorer = SemanticScorer::new(Arc::new(LexiconSet::builtin().unwrap()), config);
    // The critical term sits past the cut and must not count.
    let text = format!("{} cocaína", "a viagem seguia normalmente ".repeat(3));
    let result = scorer.score(&text).unwrap();
    assert!(!result.matched_term_strings().contains(&"cocaína"));
}

#[test]
fn flight_attempt_and_missing_documents_become_factors() {
    let result = scorer()
        .score("O passageiro estava sem documento e tentou fugir pela mata")
        .unwrap();
    assert_eq!(
        result.context_factors(),
        &[ContextFactor::MissingDocuments, ContextFactor::FlightAttempt]
    );
}

#[test]
fn plural_missing_documents_scores_like_the_singular() {
    let scorer = scorer();
    let singular = scorer
        .score("Condutor estava sem documento e tentou fugir da abordagem")
        .unwrap();
    let plural = scorer
        .score("Condutor estava sem documentos e tentou fugir da abordagem")
        .unwrap();
    assert!(plural.score() > 0.0);
    assert!((plural.score() - singular.score()).abs() < 1e-12);
    assert_eq!(
        plural.context_factors(),
        &[ContextFactor::MissingDocuments, ContextFactor::FlightAttempt]
    );
    assert_eq!(
        plural.matched_term_strings(),
        vec!["sem documentos", "tentou fugir"]
    );
}

#[test]
fn negated_cooperation_never_lowers_the_score() {
    let scorer = scorer();
    let nervous = scorer
        .score("Condutor nervoso durante toda a abordagem policial")
        .unwrap();
    let refused = scorer
        .score("Condutor nervoso, não colaborou durante toda a abordagem policial")
        .unwrap();
    assert!(nervous.score() > 0.0);
    assert!(refused.score() >= nervous.score());
    assert!(!refused.matched_term_strings().contains(&"colaborou"));
}

#[test]
fn probability_source_is_blended() {
    let base = scorer();
    let blended = scorer().with_probability_source(Arc::new(FixedProbability(1.0)));
    let text = "Veículo parado em local suspeito durante a madrugada";
    let plain = base.score(text).unwrap().score();
    let mixed = blended.score(text).unwrap().score();
    assert!((mixed - (0.7 * plain + 0.3)).abs() < 1e-9);
    assert!(blended
        .score(text)
        .unwrap()
        .category_breakdown()
        .contains_key("external_probability"));
}

#[test]
fn unavailable_probability_falls_back_to_heuristic() {
    let text = "Veículo parado em local suspeito durante a madrugada";
    let plain = scorer().score(text).unwrap();
    let fallback = scorer()
        .with_probability_source(Arc::new(Unavailable))
        .score(text)
        .unwrap();
    assert_eq!(plain.score(), fallback.score());
}

#[test]
fn fingerprint_tracks_normalized_text_and_model() {
    let s = scorer();
    assert_eq!(
        s.fingerprint("Tráfico  de DROGAS na rodovia federal"),
        s.fingerprint("tráfico de drogas na rodovia federal")
    );
    let with_model = scorer().with_probability_source(Arc::new(FixedProbability(0.5)));
    assert_ne!(
        s.fingerprint("tráfico de drogas na rodovia federal"),
        with_model.fingerprint("tráfico de drogas na rodovia federal")
    );
}

#[test]
fn score_many_preserves_order() {
    let narratives = vec![
        "Fiscalização de rotina sem alterações".to_string(),
        "curto".to_string(),
        "Apreensão de maconha e crack no porta-malas".to_string(),
    ];
    let results = scorer().score_many(&narratives);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().score(), 0.0);
    assert!(results[1].is_err());
    assert!(results[2].as_ref().unwrap().score() > 0.9);
}

#[test]
fn precision_profile_changes_weights() {
    let config = SentinelaConfig::from_profile(ConfigProfile::HighPrecision);
    let lexicon = Arc::new(LexiconSet::from_config(&config).unwrap());
    let precise = SemanticScorer::new(lexicon, config.semantic);
    let text = "Foi encontrada maconha no banco traseiro";
    let balanced = scorer().score(text).unwrap().score();
    let tuned = precise.score(text).unwrap().score();
    assert!(tuned > balanced);
}
