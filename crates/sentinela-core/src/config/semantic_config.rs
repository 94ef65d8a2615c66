use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the additive semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub critical_keywords: f64,
    pub coverage_patterns: f64,
    pub criminal_contexts: f64,
    pub evasion_indicators: f64,
    pub general_suspicious: f64,
    pub behavioral_indicators: f64,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// `(category name, weight)` pairs in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("critical_keywords", self.critical_keywords),
            ("coverage_patterns", self.coverage_patterns),
            ("criminal_contexts", self.criminal_contexts),
            ("evasion_indicators", self.evasion_indicators),
            ("general_suspicious", self.general_suspicious),
            ("behavioral_indicators", self.behavioral_indicators),
        ]
        .into_iter()
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.iter().find(|(name, _)| *name == category).map(|(_, w)| w)
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            critical_keywords: defaults::DEFAULT_CRITICAL_WEIGHT,
            coverage_patterns: defaults::DEFAULT_COVERAGE_WEIGHT,
            criminal_contexts: defaults::DEFAULT_CONTEXT_WEIGHT,
            evasion_indicators: defaults::DEFAULT_EVASION_WEIGHT,
            general_suspicious: defaults::DEFAULT_GENERAL_WEIGHT,
            behavioral_indicators: defaults::DEFAULT_BEHAVIORAL_WEIGHT,
        }
    }
}

/// Semantic scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    pub weights: CategoryWeights,
    /// Weight subtracted for normalizing terms. Not part of the weight sum.
    pub normal_weight: f64,
    /// Hits needed for a category to reach its full weight.
    pub category_saturation: u32,
    pub evasion_saturation: u32,
    /// Distinct critical terms that trigger the escalation floor.
    pub critical_escalation_hits: usize,
    pub critical_escalation_floor: f64,
    /// Share of the final score taken by an external probability source.
    pub probability_weight: f64,
    pub min_text_length: usize,
    /// Longer narratives are truncated, not rejected.
    pub max_text_length: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            normal_weight: defaults::DEFAULT_NORMAL_WEIGHT,
            category_saturation: defaults::DEFAULT_CATEGORY_SATURATION,
            evasion_saturation: defaults::DEFAULT_EVASION_SATURATION,
            critical_escalation_hits: defaults::DEFAULT_CRITICAL_ESCALATION_HITS,
            critical_escalation_floor: defaults::DEFAULT_CRITICAL_ESCALATION_FLOOR,
            probability_weight: defaults::DEFAULT_PROBABILITY_WEIGHT,
            min_text_length: defaults::DEFAULT_MIN_TEXT_LENGTH,
            max_text_length: defaults::DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}
