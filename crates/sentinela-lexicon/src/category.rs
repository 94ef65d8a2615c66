use serde::{Deserialize, Serialize};

use crate::matcher::{PhraseMatch, PhraseMatcher};

/// Whether a category raises or lowers the semantic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Additive,
    Subtractive,
}

/// A named term category with its scoring weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub name: String,
    /// Weight in [0, 1]. Route lists carry 0; their weights live in the route rules.
    pub weight: f64,
    /// Hits needed for the category to reach its full weight.
    pub saturation: u32,
    pub polarity: Polarity,
    /// Lowercase, whitespace-normalized terms without duplicates.
    pub terms: Vec<String>,
}

impl IndicatorSet {
    /// Pre-weight contribution for `hits` occurrences, capped at 1.0.
    pub fn saturation_ratio(&self, hits: usize) -> f64 {
        if hits == 0 {
            return 0.0;
        }
        let saturation = self.saturation.max(1) as f64;
        (hits as f64 / saturation).min(1.0)
    }

    /// Signed weighted contribution for `hits` occurrences.
    pub fn contribution(&self, hits: usize) -> f64 {
        if hits == 0 {
            return 0.0;
        }
        let magnitude = self.saturation_ratio(hits) * self.weight;
        match self.polarity {
            Polarity::Additive => magnitude,
            Polarity::Subtractive => -magnitude,
        }
    }
}

/// An indicator set compiled for matching.
#[derive(Debug, Clone)]
pub struct Category {
    set: IndicatorSet,
    matcher: PhraseMatcher,
}

impl Category {
    pub(crate) fn new(set: IndicatorSet, matcher: PhraseMatcher) -> Self {
        Self { set, matcher }
    }

    pub fn name(&self) -> &str {
        &self.set.name
    }

    pub fn set(&self) -> &IndicatorSet {
        &self.set
    }

    pub fn find_all(&self, normalized: &str) -> Vec<PhraseMatch> {
        self.matcher.find_all(normalized)
    }

    pub fn first(&self, normalized: &str) -> Option<String> {
        self.matcher.first(normalized)
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }
}
