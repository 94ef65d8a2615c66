use std::collections::BTreeMap;
use std::sync::Arc;

use sentinela_core::config::{defaults, RouteConfig};
use sentinela_core::errors::InputError;
use sentinela_core::fingerprint::fingerprint;
use sentinela_core::models::{MatchedTerm, ScoreResult, ScoreSource, TripRecord, VehicleHistory};
use sentinela_core::traits::IRouteScorer;
use sentinela_lexicon::{normalize, truncate_chars, LexiconSet};

use crate::rules::{self, RuleInput, RuleOutcome};

/// Additive rule scorer over trip metadata and vehicle history.
pub struct RouteScorer {
    lexicon: Arc<LexiconSet>,
    config: RouteConfig,
    max_text_length: usize,
}

impl RouteScorer {
    pub fn new(lexicon: Arc<LexiconSet>, config: RouteConfig) -> Self {
        Self {
            lexicon,
            config,
            max_text_length: defaults::DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    /// Cap on narrative characters examined by the phrase rules.
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Evaluate every rule and return the individual outcomes.
    pub fn evaluate(
        &self,
        trip: &TripRecord,
        history: &VehicleHistory,
    ) -> Result<Vec<RuleOutcome>, InputError> {
        self.check(trip, history)?;
        let narrative = normalize(truncate_chars(&trip.narrative, self.max_text_length));
        let input = RuleInput {
            trip,
            history,
            narrative: &narrative,
        };
        Ok(rules::evaluate_all(&self.lexicon, &self.config, &input))
    }
}

impl IRouteScorer for RouteScorer {
    fn score(&self, trip: &TripRecord, history: &VehicleHistory) -> Result<ScoreResult, InputError> {
        let outcomes = self.evaluate(trip, history)?;

        let mut breakdown = BTreeMap::new();
        let mut terms = Vec::new();
        let mut factors = Vec::new();
        let mut total = 0.0;
        for outcome in outcomes {
            total += outcome.contribution;
            breakdown.insert(outcome.rule.to_string(), outcome.contribution);
            terms.extend(outcome.evidence.into_iter().map(|(term, share)| MatchedTerm {
                term,
                category: outcome.rule.to_string(),
                contribution: share,
            }));
            factors.extend(outcome.factors);
        }

        tracing::debug!(
            vehicle_id = %trip.vehicle_id,
            score = total.clamp(0.0, 1.0),
            raw_total = total,
            rules = ?breakdown,
            "route score computed"
        );

        Ok(ScoreResult::new(ScoreSource::Route, total)
            .with_terms(terms)
            .with_breakdown(breakdown)
            .with_factors(factors))
    }

    fn fingerprint(&self, trip: &TripRecord, history: &VehicleHistory) -> String {
        let encoded = serde_json::to_vec(&(trip, history)).unwrap_or_default();
        fingerprint(&[self.lexicon.version().as_bytes(), &encoded])
    }
}
