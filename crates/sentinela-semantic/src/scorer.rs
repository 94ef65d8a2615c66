use std::sync::Arc;

use rayon::prelude::*;
use sentinela_core::config::SemanticConfig;
use sentinela_core::errors::InputError;
use sentinela_core::fingerprint::fingerprint;
use sentinela_core::models::{ScoreResult, ScoreSource};
use sentinela_core::traits::{IProbabilitySource, ISemanticScorer};
use sentinela_lexicon::LexiconSet;

use crate::formula::{self, SemanticBreakdown};
use crate::input::prepare_narrative;

/// Lexicon-driven narrative scorer.
pub struct SemanticScorer {
    lexicon: Arc<LexiconSet>,
    config: SemanticConfig,
    probability: Option<Arc<dyn IProbabilitySource>>,
}

impl SemanticScorer {
    pub fn new(lexicon: Arc<LexiconSet>, config: SemanticConfig) -> Self {
        Self {
            lexicon,
            config,
            probability: None,
        }
    }

    /// Blend an external classifier's probability into every score.
    pub fn with_probability_source(mut self, source: Arc<dyn IProbabilitySource>) -> Self {
        self.probability = Some(source);
        self
    }

    pub fn has_probability_source(&self) -> bool {
        self.probability.is_some()
    }

    pub fn config(&self) -> &SemanticConfig {
        &self.config
    }

    /// Score with every intermediate value exposed.
    pub fn score_breakdown(&self, narrative: &str) -> Result<SemanticBreakdown, InputError> {
        let normalized = prepare_narrative(narrative, &self.config)?;
        let probability = self
            .probability
            .as_ref()
            .and_then(|source| source.probability(&normalized));
        Ok(formula::compute(
            &self.lexicon,
            &self.config,
            &normalized,
            probability,
        ))
    }

    /// Score many narratives in parallel, preserving input order.
    pub fn score_many(&self, narratives: &[String]) -> Vec<Result<ScoreResult, InputError>> {
        narratives.par_iter().map(|n| self.score(n)).collect()
    }
}

impl ISemanticScorer for SemanticScorer {
    fn score(&self, narrative: &str) -> Result<ScoreResult, InputError> {
        let breakdown = self.score_breakdown(narrative)?;
        tracing::debug!(
            score = breakdown.final_score,
            heuristic = breakdown.heuristic,
            hits = breakdown.matched.len(),
            categories = ?breakdown.categories,
            "semantic score computed"
        );
        let flattened = breakdown.flatten(self.config.probability_weight);
        Ok(ScoreResult::new(ScoreSource::Semantic, breakdown.final_score)
            .with_terms(breakdown.matched)
            .with_breakdown(flattened)
            .with_factors(breakdown.context_factors))
    }

    fn check(&self, narrative: &str) -> Result<(), InputError> {
        prepare_narrative(narrative, &self.config).map(|_| ())
    }

    fn fingerprint(&self, narrative: &str) -> String {
        let normalized = prepare_narrative(narrative, &self.config)
            .unwrap_or_else(|_| narrative.trim().to_string());
        let model = self
            .probability
            .as_ref()
            .map(|s| s.model_id().to_string())
            .unwrap_or_default();
        fingerprint(&[
            self.lexicon.version().as_bytes(),
            model.as_bytes(),
            normalized.as_bytes(),
        ])
    }
}
