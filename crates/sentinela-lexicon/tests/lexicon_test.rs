use sentinela_core::config::{CategoryOverride, ConfigProfile, SentinelaConfig};
use sentinela_core::errors::LexiconError;
use sentinela_lexicon::builtin::{self, LEXICON_VERSION};
use sentinela_lexicon::{normalize, LexiconSet, Polarity};

#[test]
fn builtin_weights_follow_config() {
    let lexicon = LexiconSet::builtin().unwrap();
    let additive: f64 = lexicon
        .semantic_categories()
        .iter()
        .filter(|c| c.set().polarity == Polarity::Additive)
        .map(|c| c.set().weight)
        .sum();
    assert!((additive - 1.0).abs() < 1e-9);

    let normal = lexicon.category(builtin::NORMAL_INDICATORS).unwrap();
    assert_eq!(normal.set().polarity, Polarity::Subtractive);
    assert_eq!(normal.set().weight, 0.20);
    assert_eq!(lexicon.category(builtin::EVASION_INDICATORS).unwrap().set().saturation, 5);
}

#[test]
fn profile_weights_reach_the_lexicon() {
    let config = SentinelaConfig::from_profile(ConfigProfile::HighPrecision);
    let lexicon = LexiconSet::from_config(&config).unwrap();
    let critical = lexicon.category(builtin::CRITICAL_KEYWORDS).unwrap();
    assert_eq!(critical.set().weight, 0.35);
    assert_eq!(lexicon.category(builtin::EVASION_INDICATORS).unwrap().set().saturation, 3);
}

#[test]
fn normalizing_terms_are_found_in_scenario_text() {
    let lexicon = LexiconSet::builtin().unwrap();
    let text = normalize("Nervoso, mas explicou que era a primeira vez; Documentos em ordem.");
    let normal = lexicon.category(builtin::NORMAL_INDICATORS).unwrap();
    let terms: Vec<String> = normal.find_all(&text).into_iter().map(|m| m.term).collect();
    assert_eq!(terms, vec!["explicou".to_string(), "documentos".to_string()]);
}

#[test]
fn extra_terms_are_normalized_and_change_version() {
    let mut config = SentinelaConfig::default();
    config.lexicon.categories.insert(
        builtin::CRITICAL_KEYWORDS.to_string(),
        CategoryOverride {
            extra_terms: vec!["  Skunk ".to_string()],
            ..Default::default()
        },
    );
    let lexicon = LexiconSet::from_config(&config).unwrap();
    let critical = lexicon.category(builtin::CRITICAL_KEYWORDS).unwrap();
    assert!(critical.set().terms.contains(&"skunk".to_string()));
    assert!(critical.is_match("havia skunk no porta-malas"));
    assert_ne!(lexicon.version(), LEXICON_VERSION);
    assert!(lexicon.version().starts_with(LEXICON_VERSION));
}

#[test]
fn explicit_version_wins() {
    let mut config = SentinelaConfig::default();
    config.lexicon.version = Some("custom-7".to_string());
    assert_eq!(LexiconSet::from_config(&config).unwrap().version(), "custom-7");
    assert_eq!(LexiconSet::builtin().unwrap().version(), LEXICON_VERSION);
}

#[test]
fn emptied_category_is_reported_not_thrown() {
    let mut config = SentinelaConfig::default();
    config.lexicon.categories.insert(
        builtin::COVERAGE_PATTERNS.to_string(),
        CategoryOverride {
            terms: Some(vec![]),
            ..Default::default()
        },
    );
    let lexicon = LexiconSet::from_config(&config).unwrap();
    let issues = lexicon.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "lexicon.categories.coverage_patterns");
}

#[test]
fn unknown_category_override_fails() {
    let mut config = SentinelaConfig::default();
    config
        .lexicon
        .categories
        .insert("slang".to_string(), CategoryOverride::default());
    assert!(matches!(
        LexiconSet::from_config(&config),
        Err(LexiconError::UnknownCategory { .. })
    ));
}

#[test]
fn route_lists_are_reachable_by_name() {
    let lexicon = LexiconSet::builtin().unwrap();
    let border = lexicon.category(builtin::BORDER_LOCATIONS).unwrap();
    assert_eq!(border.first("fronteira paraguai"), Some("fronteira paraguai".to_string()));
    assert!(lexicon.issues().is_empty());
}
