//! The seven route rules. Each returns at most its configured weight.

use chrono::Timelike;
use sentinela_core::config::RouteConfig;
use sentinela_core::models::{ContextFactor, TripRecord, VehicleHistory};
use sentinela_lexicon::{builtin, normalize, LexiconSet};

pub const LOCATION: &str = "location";
pub const TIME: &str = "time";
pub const ROUND_TRIP: &str = "round_trip";
pub const ILLICIT_TRAVEL: &str = "illicit_travel";
pub const HIGH_RISK_AREA: &str = "high_risk_area";
pub const HISTORY: &str = "history";
pub const VEHICLE_FLAGS: &str = "vehicle_flags";

/// Rule names in evaluation order.
pub const ALL_RULES: [&str; 7] = [
    LOCATION,
    TIME,
    ROUND_TRIP,
    ILLICIT_TRAVEL,
    HIGH_RISK_AREA,
    HISTORY,
    VEHICLE_FLAGS,
];

/// Result of evaluating one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub contribution: f64,
    /// Evidence as `(term, share of contribution)`.
    pub evidence: Vec<(String, f64)>,
    pub factors: Vec<ContextFactor>,
}

impl RuleOutcome {
    fn silent(rule: &'static str) -> Self {
        Self {
            rule,
            contribution: 0.0,
            evidence: Vec::new(),
            factors: Vec::new(),
        }
    }

    fn fired(rule: &'static str, contribution: f64, term: Option<String>) -> Self {
        Self {
            rule,
            contribution,
            evidence: term.map(|t| (t, contribution)).into_iter().collect(),
            factors: Vec::new(),
        }
    }

    fn with_factor(mut self, factor: ContextFactor) -> Self {
        self.factors.push(factor);
        self
    }

    fn with_factor_if_fired(self, factor: ContextFactor) -> Self {
        if self.is_fired() {
            self.with_factor(factor)
        } else {
            self
        }
    }

    pub fn is_fired(&self) -> bool {
        self.contribution > 0.0
    }
}

/// Inputs shared by every rule.
pub struct RuleInput<'a> {
    pub trip: &'a TripRecord,
    pub history: &'a VehicleHistory,
    /// Normalized, truncated narrative.
    pub narrative: &'a str,
}

/// Evaluate all seven rules in order.
pub fn evaluate_all(
    lexicon: &LexiconSet,
    config: &RouteConfig,
    input: &RuleInput<'_>,
) -> Vec<RuleOutcome> {
    let narrative = input.narrative;
    vec![
        location(lexicon, config, input.trip),
        time(config, input.trip),
        phrase_rule(
            lexicon,
            ROUND_TRIP,
            builtin::ROUND_TRIP_PHRASES,
            config.round_trip_weight,
            narrative,
        ),
        phrase_rule(
            lexicon,
            ILLICIT_TRAVEL,
            builtin::ILLICIT_TRAVEL_PHRASES,
            config.illicit_travel_weight,
            narrative,
        ),
        phrase_rule(
            lexicon,
            HIGH_RISK_AREA,
            builtin::HIGH_RISK_AREA_PHRASES,
            config.high_risk_area_weight,
            narrative,
        )
        .with_factor_if_fired(ContextFactor::KnownCrimeLocation),
        history(config, input.history),
        vehicle_flags(lexicon, config, input.trip, narrative),
    ]
}

/// +weight when the trip location is a known border or high-risk area.
pub fn location(lexicon: &LexiconSet, config: &RouteConfig, trip: &TripRecord) -> RuleOutcome {
    if !config.analyze_location_context {
        return RuleOutcome::silent(LOCATION);
    }
    let Some(location) = trip.location.as_deref().map(normalize) else {
        return RuleOutcome::silent(LOCATION);
    };
    match lexicon
        .category(builtin::BORDER_LOCATIONS)
        .and_then(|c| c.first(&location))
    {
        Some(term) => RuleOutcome::fired(LOCATION, config.location_weight, Some(term))
            .with_factor(ContextFactor::BorderArea),
        None => RuleOutcome::silent(LOCATION),
    }
}

/// +weight when the stop hour is in the suspicious set.
pub fn time(config: &RouteConfig, trip: &TripRecord) -> RuleOutcome {
    if !config.analyze_temporal_context {
        return RuleOutcome::silent(TIME);
    }
    match trip.timestamp {
        Some(ts) if config.suspicious_hours.contains(&ts.hour()) => {
            RuleOutcome::fired(TIME, config.time_weight, None)
                .with_factor(ContextFactor::SuspiciousHour)
        }
        _ => RuleOutcome::silent(TIME),
    }
}

/// +weight when the narrative contains any phrase of `list`.
fn phrase_rule(
    lexicon: &LexiconSet,
    rule: &'static str,
    list: &str,
    weight: f64,
    narrative: &str,
) -> RuleOutcome {
    match lexicon.category(list).and_then(|c| c.first(narrative)) {
        Some(term) => RuleOutcome::fired(rule, weight, Some(term)),
        None => RuleOutcome::silent(rule),
    }
}

/// Frequency and location-repetition signals from prior trips.
pub fn history(config: &RouteConfig, history: &VehicleHistory) -> RuleOutcome {
    let trips = history.len();
    let mut contribution = 0.0;
    if trips > config.history_trip_threshold {
        contribution += config.history_count_weight;
    }
    if trips >= config.repetition_min_trips && history.most_common_location_count() * 2 > trips {
        contribution += config.history_repetition_weight;
    }
    if contribution > 0.0 {
        RuleOutcome::fired(HISTORY, contribution, None)
    } else {
        RuleOutcome::silent(HISTORY)
    }
}

/// Vehicle flags, each counted only with corroborating narrative text.
///
/// A flag with no matching phrase contributes exactly zero.
pub fn vehicle_flags(
    lexicon: &LexiconSet,
    config: &RouteConfig,
    trip: &TripRecord,
    narrative: &str,
) -> RuleOutcome {
    let flags = trip.vehicle_flags;
    if !flags.any() {
        return RuleOutcome::silent(VEHICLE_FLAGS);
    }
    let behavior = lexicon
        .category(builtin::CORROBORATING_BEHAVIOR)
        .and_then(|c| c.first(narrative));
    let frequency = lexicon
        .category(builtin::CORROBORATING_FREQUENCY)
        .and_then(|c| c.first(narrative));

    let mut outcome = RuleOutcome::silent(VEHICLE_FLAGS);
    if flags.prior_crime {
        if let Some(term) = &behavior {
            outcome.contribution += config.prior_crime_weight;
            outcome.evidence.push((term.clone(), config.prior_crime_weight));
            outcome.factors.push(ContextFactor::Recidivism);
        }
    }
    if flags.prior_stop {
        if let Some(term) = &frequency {
            outcome.contribution += config.prior_stop_weight;
            outcome.evidence.push((term.clone(), config.prior_stop_weight));
        }
    }
    if flags.recent_transfer {
        if let Some(term) = behavior.as_ref().or(frequency.as_ref()) {
            outcome.contribution += config.recent_transfer_weight;
            outcome.evidence.push((term.clone(), config.recent_transfer_weight));
        }
    }
    outcome
}
