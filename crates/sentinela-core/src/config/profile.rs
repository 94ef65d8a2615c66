//! Named tuning profiles.
//!
//! Each profile fixes the four thresholds, the additive category weights and
//! the evasion saturation. Everything else keeps its current value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CategoryWeights, SentinelaConfig};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigProfile {
    #[default]
    Balanced,
    /// Fewer false positives.
    HighPrecision,
    /// Fewer false negatives.
    HighRecall,
    /// Only very clear cases.
    Conservative,
    Aggressive,
    /// Maximum precision for after-the-fact review.
    Forensic,
}

struct ProfileValues {
    thresholds: [f64; 4],
    weights: [f64; 6],
    evasion_saturation: u32,
}

impl ConfigProfile {
    pub const ALL: [ConfigProfile; 6] = [
        Self::Balanced,
        Self::HighPrecision,
        Self::HighRecall,
        Self::Conservative,
        Self::Aggressive,
        Self::Forensic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::HighPrecision => "high_precision",
            Self::HighRecall => "high_recall",
            Self::Conservative => "conservative",
            Self::Aggressive => "aggressive",
            Self::Forensic => "forensic",
        }
    }

    // thresholds: base / confidence / high risk / review
    // weights: critical / coverage / context / evasion / general / behavioral
    fn values(&self) -> ProfileValues {
        match self {
            Self::Balanced => ProfileValues {
                thresholds: [0.5, 0.7, 0.8, 0.4],
                weights: [0.25, 0.20, 0.20, 0.15, 0.10, 0.10],
                evasion_saturation: 5,
            },
            Self::HighPrecision => ProfileValues {
                thresholds: [0.7, 0.8, 0.9, 0.5],
                weights: [0.35, 0.25, 0.20, 0.10, 0.05, 0.05],
                evasion_saturation: 3,
            },
            Self::HighRecall => ProfileValues {
                thresholds: [0.3, 0.5, 0.6, 0.2],
                weights: [0.20, 0.18, 0.18, 0.16, 0.14, 0.14],
                evasion_saturation: 8,
            },
            Self::Conservative => ProfileValues {
                thresholds: [0.8, 0.9, 0.95, 0.6],
                weights: [0.40, 0.20, 0.30, 0.05, 0.03, 0.02],
                evasion_saturation: 5,
            },
            Self::Aggressive => ProfileValues {
                thresholds: [0.25, 0.4, 0.6, 0.15],
                weights: [0.18, 0.18, 0.16, 0.16, 0.16, 0.16],
                evasion_saturation: 5,
            },
            Self::Forensic => ProfileValues {
                thresholds: [0.9, 0.95, 0.98, 0.8],
                weights: [0.50, 0.10, 0.35, 0.03, 0.01, 0.01],
                evasion_saturation: 5,
            },
        }
    }

    /// Overwrite the profile-controlled fields of `config`.
    pub fn apply(&self, config: &mut SentinelaConfig) {
        let values = self.values();
        let [base, confidence, high_risk, review] = values.thresholds;
        config.thresholds.base_threshold = base;
        config.thresholds.confidence_threshold = confidence;
        config.thresholds.high_risk_threshold = high_risk;
        config.thresholds.human_review_threshold = review;

        let [critical, coverage, context, evasion, general, behavioral] = values.weights;
        config.semantic.weights = CategoryWeights {
            critical_keywords: critical,
            coverage_patterns: coverage,
            criminal_contexts: context,
            evasion_indicators: evasion,
            general_suspicious: general,
            behavioral_indicators: behavioral,
        };
        config.semantic.evasion_saturation = values.evasion_saturation;
    }
}

impl fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or(ConfigError::UnknownProfile {
                name: s.to_string(),
            })
    }
}
