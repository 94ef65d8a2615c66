use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ContextFactor;

/// Which scorer produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Semantic,
    Route,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Route => "route",
        }
    }

    /// Component name used in degradation entries and events.
    pub fn component(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic_scorer",
            Self::Route => "route_scorer",
        }
    }
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a scorer contributed zero instead of a computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradationReason {
    MissingInput,
    TimedOut,
    Cancelled,
    Failed,
}

impl DegradationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::TimedOut => "timed_out",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DegradationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indicator hit, recorded in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedTerm {
    pub term: String,
    /// Lexicon category (semantic) or rule name (route).
    pub category: String,
    /// Signed share of the category contribution. Negative for normalizing terms.
    pub contribution: f64,
}

/// Output of either scorer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    source: ScoreSource,
    score: f64,
    matched_terms: Vec<MatchedTerm>,
    category_breakdown: BTreeMap<String, f64>,
    context_factors: Vec<ContextFactor>,
    degradation: Option<DegradationReason>,
}

impl ScoreResult {
    /// Create a result; `score` is clamped to [0.0, 1.0].
    pub fn new(source: ScoreSource, score: f64) -> Self {
        Self {
            source,
            score: clamp_unit(score),
            matched_terms: Vec::new(),
            category_breakdown: BTreeMap::new(),
            context_factors: Vec::new(),
            degradation: None,
        }
    }

    /// A zero score standing in for a scorer that could not produce one.
    pub fn degraded(source: ScoreSource, reason: DegradationReason) -> Self {
        Self {
            degradation: Some(reason),
            ..Self::new(source, 0.0)
        }
    }

    pub fn with_terms(mut self, terms: Vec<MatchedTerm>) -> Self {
        self.matched_terms = terms;
        self
    }

    pub fn with_breakdown(mut self, breakdown: BTreeMap<String, f64>) -> Self {
        self.category_breakdown = breakdown;
        self
    }

    /// Attach context factors, dropping duplicates while keeping first-seen order.
    pub fn with_factors(mut self, factors: impl IntoIterator<Item = ContextFactor>) -> Self {
        for factor in factors {
            if !self.context_factors.contains(&factor) {
                self.context_factors.push(factor);
            }
        }
        self
    }

    pub fn source(&self) -> ScoreSource {
        self.source
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn matched_terms(&self) -> &[MatchedTerm] {
        &self.matched_terms
    }

    /// Matched indicator strings in encounter order.
    pub fn matched_term_strings(&self) -> Vec<&str> {
        self.matched_terms.iter().map(|m| m.term.as_str()).collect()
    }

    pub fn category_breakdown(&self) -> &BTreeMap<String, f64> {
        &self.category_breakdown
    }

    pub fn contribution(&self, category: &str) -> f64 {
        self.category_breakdown.get(category).copied().unwrap_or(0.0)
    }

    pub fn context_factors(&self) -> &[ContextFactor] {
        &self.context_factors
    }

    pub fn degradation(&self) -> Option<DegradationReason> {
        self.degradation
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
