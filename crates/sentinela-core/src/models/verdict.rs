use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContextFactor, DegradationReason, ScoreSource};

/// Binary outcome of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Suspect,
    NoChange,
}

/// Coarse bucket derived from a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Minimal,
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "MINIMAL",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contributing factor of a verdict.
///
/// Serializes flat: `{source, category, term | rule, contribution}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    pub source: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub contribution: f64,
}

impl ExplanationEntry {
    pub fn term(
        source: ScoreSource,
        category: impl Into<String>,
        term: impl Into<String>,
        contribution: f64,
    ) -> Self {
        Self {
            source: source.as_str().to_string(),
            category: category.into(),
            term: Some(term.into()),
            rule: None,
            contribution,
        }
    }

    pub fn rule(
        source: ScoreSource,
        category: impl Into<String>,
        rule: impl Into<String>,
        contribution: f64,
    ) -> Self {
        Self {
            source: source.as_str().to_string(),
            category: category.into(),
            term: None,
            rule: Some(rule.into()),
            contribution,
        }
    }

    /// Entry documenting a scorer that fell back to zero.
    pub fn degraded(source: ScoreSource, reason: DegradationReason) -> Self {
        Self {
            source: source.component().to_string(),
            category: "degraded".to_string(),
            term: None,
            rule: Some(reason.as_str().to_string()),
            contribution: 0.0,
        }
    }

    pub fn is_degradation(&self) -> bool {
        self.category == "degraded"
    }
}

impl fmt::Display for ExplanationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_degradation() {
            return write!(f, "{}: {}", self.source, self.rule.as_deref().unwrap_or("unknown"));
        }
        let label = self
            .term
            .as_deref()
            .or(self.rule.as_deref())
            .unwrap_or_default();
        write!(
            f,
            "{}: {}/{} ({:+.3})",
            self.source, self.category, label, self.contribution
        )
    }
}

/// Final decision for one report. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub classification: Classification,
    pub confidence: f64,
    pub risk_tier: RiskTier,
    pub requires_human_review: bool,
    /// Effective decision threshold after context adjustment.
    pub threshold: f64,
    pub context_factors: Vec<ContextFactor>,
    /// True when at least one scorer contributed a fallback zero.
    pub degraded: bool,
    pub explanation: Vec<ExplanationEntry>,
}

impl Verdict {
    pub fn is_suspect(&self) -> bool {
        self.classification == Classification::Suspect
    }
}
