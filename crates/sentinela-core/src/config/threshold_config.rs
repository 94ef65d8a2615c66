use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ContextFactor;

/// Decision thresholds and context multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Combined score at or above which a report is SUSPECT.
    pub base_threshold: f64,
    pub confidence_threshold: f64,
    pub high_risk_threshold: f64,
    /// Confidence below this always goes to human review.
    pub human_review_threshold: f64,
    /// Context factor name to multiplier (> 0). Higher lowers the threshold.
    pub context_multipliers: BTreeMap<String, f64>,
}

impl ThresholdConfig {
    pub fn multiplier(&self, factor: ContextFactor) -> Option<f64> {
        self.context_multipliers.get(factor.as_str()).copied()
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base_threshold: defaults::DEFAULT_BASE_THRESHOLD,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            high_risk_threshold: defaults::DEFAULT_HIGH_RISK_THRESHOLD,
            human_review_threshold: defaults::DEFAULT_HUMAN_REVIEW_THRESHOLD,
            context_multipliers: defaults::DEFAULT_CONTEXT_MULTIPLIERS
                .iter()
                .map(|(name, m)| (name.to_string(), *m))
                .collect(),
        }
    }
}
