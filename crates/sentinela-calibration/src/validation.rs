//! Startup configuration validation.
//!
//! Problems are collected into a list of [`ConfigIssue`]s instead of failing
//! on the first one; the caller decides whether to refuse startup.

use std::str::FromStr;

use sentinela_core::config::{defaults, SentinelaConfig};
use sentinela_core::models::{ConfigIssue, ContextFactor};
use sentinela_lexicon::LexiconSet;

/// Check `config` and the compiled `lexicon` built from it.
pub fn validate(config: &SentinelaConfig, lexicon: &LexiconSet) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    check_weights(config, &mut issues);
    check_thresholds(config, &mut issues);
    check_multipliers(config, &mut issues);
    issues.extend(lexicon.issues());
    check_semantic(config, &mut issues);
    check_route(config, &mut issues);
    check_runtime(config, &mut issues);

    if issues.is_empty() {
        tracing::debug!(lexicon = lexicon.version(), "configuration valid");
    } else {
        for issue in &issues {
            tracing::warn!(field = %issue.field, message = %issue.message, "configuration issue");
        }
    }
    issues
}

fn check_weights(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    let weights = &config.semantic.weights;
    for (name, weight) in weights.iter() {
        if !(0.0..=1.0).contains(&weight) {
            issues.push(ConfigIssue::new(
                format!("semantic.weights.{name}"),
                format!("weight {weight} must be within [0, 1]"),
            ));
        }
    }
    let sum = weights.sum();
    if (sum - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
        issues.push(ConfigIssue::new(
            "semantic.weights",
            format!(
                "category weights sum to {sum:.3}, outside 1.0 ± {}",
                defaults::WEIGHT_SUM_TOLERANCE
            ),
        ));
    }
    if !(0.0..=1.0).contains(&config.semantic.normal_weight) {
        issues.push(ConfigIssue::new(
            "semantic.normal_weight",
            "must be within [0, 1]",
        ));
    }

    let decision = &config.decision;
    if !(decision.semantic_weight >= 0.0 && decision.route_weight >= 0.0) {
        issues.push(ConfigIssue::new(
            "decision",
            "scorer weights must be non-negative",
        ));
    } else if decision.semantic_weight + decision.route_weight <= 0.0 {
        issues.push(ConfigIssue::new("decision", "scorer weights must not both be zero"));
    }
}

fn check_thresholds(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    let t = &config.thresholds;
    let named = [
        ("thresholds.base_threshold", t.base_threshold),
        ("thresholds.confidence_threshold", t.confidence_threshold),
        ("thresholds.high_risk_threshold", t.high_risk_threshold),
    ];
    for (field, value) in named {
        if !(value > 0.0 && value < 1.0) {
            issues.push(ConfigIssue::new(field, format!("{value} must be within (0, 1)")));
        }
    }
    if !(t.base_threshold < t.confidence_threshold && t.confidence_threshold < t.high_risk_threshold)
    {
        issues.push(ConfigIssue::new(
            "thresholds",
            format!(
                "expected base < confidence < high_risk, got {} / {} / {}",
                t.base_threshold, t.confidence_threshold, t.high_risk_threshold
            ),
        ));
    }
    if !(0.0..=1.0).contains(&t.human_review_threshold) {
        issues.push(ConfigIssue::new(
            "thresholds.human_review_threshold",
            "must be within [0, 1]",
        ));
    }
}

fn check_multipliers(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    for (name, multiplier) in &config.thresholds.context_multipliers {
        let field = format!("thresholds.context_multipliers.{name}");
        if ContextFactor::from_str(name).is_err() {
            issues.push(ConfigIssue::new(field.clone(), "unknown context factor"));
        }
        if !(multiplier.is_finite() && *multiplier > 0.0) {
            issues.push(ConfigIssue::new(
                field,
                format!("multiplier {multiplier} must be positive"),
            ));
        }
    }
}

fn check_semantic(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    let s = &config.semantic;
    if s.category_saturation == 0 || s.evasion_saturation == 0 {
        issues.push(ConfigIssue::new(
            "semantic.category_saturation",
            "saturation must be at least 1",
        ));
    }
    if s.critical_escalation_hits == 0 {
        issues.push(ConfigIssue::new(
            "semantic.critical_escalation_hits",
            "must be at least 1",
        ));
    }
    if !(0.0..=1.0).contains(&s.critical_escalation_floor) {
        issues.push(ConfigIssue::new(
            "semantic.critical_escalation_floor",
            "must be within [0, 1]",
        ));
    }
    if !(0.0..=1.0).contains(&s.probability_weight) {
        issues.push(ConfigIssue::new(
            "semantic.probability_weight",
            "must be within [0, 1]",
        ));
    }
    if s.min_text_length >= s.max_text_length {
        issues.push(ConfigIssue::new(
            "semantic.max_text_length",
            format!(
                "max_text_length {} must exceed min_text_length {}",
                s.max_text_length, s.min_text_length
            ),
        ));
    }
}

fn check_route(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    let r = &config.route;
    let weights = [
        ("location_weight", r.location_weight),
        ("time_weight", r.time_weight),
        ("round_trip_weight", r.round_trip_weight),
        ("illicit_travel_weight", r.illicit_travel_weight),
        ("high_risk_area_weight", r.high_risk_area_weight),
        ("history_count_weight", r.history_count_weight),
        ("history_repetition_weight", r.history_repetition_weight),
        ("prior_crime_weight", r.prior_crime_weight),
        ("prior_stop_weight", r.prior_stop_weight),
        ("recent_transfer_weight", r.recent_transfer_weight),
    ];
    for (name, weight) in weights {
        if !(0.0..=1.0).contains(&weight) {
            issues.push(ConfigIssue::new(
                format!("route.{name}"),
                format!("weight {weight} must be within [0, 1]"),
            ));
        }
    }
    if let Some(hour) = r.suspicious_hours.iter().find(|h| **h > 23) {
        issues.push(ConfigIssue::new(
            "route.suspicious_hours",
            format!("hour {hour} is outside 0..=23"),
        ));
    }
}

fn check_runtime(config: &SentinelaConfig, issues: &mut Vec<ConfigIssue>) {
    let rt = &config.runtime;
    for (name, limits) in [("semantic", rt.semantic), ("route", rt.route)] {
        if limits.max_concurrent == 0 {
            issues.push(ConfigIssue::new(
                format!("runtime.{name}.max_concurrent"),
                "must be positive",
            ));
        }
        if limits.timeout_ms == 0 {
            issues.push(ConfigIssue::new(
                format!("runtime.{name}.timeout_ms"),
                "must be positive",
            ));
        }
    }
    if rt.cache_enabled {
        if rt.cache_ttl_secs == 0 {
            issues.push(ConfigIssue::new("runtime.cache_ttl_secs", "must be positive"));
        }
        if rt.cache_max_capacity == 0 {
            issues.push(ConfigIssue::new(
                "runtime.cache_max_capacity",
                "must be positive",
            ));
        }
    }
}
