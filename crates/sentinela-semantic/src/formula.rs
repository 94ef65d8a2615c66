//! Weighted lexicon formula.
//!
//! ```text
//! positive  = Σ min(hits_c / saturation_c, 1) × weight_c      (additive categories)
//! escalated = max(positive, floor)   if distinct critical terms ≥ escalation_hits
//! heuristic = clamp(escalated − min(hits_n / saturation_n, 1) × weight_n, 0, 1)
//! score     = (1 − w) × heuristic + w × p                       (p from an external source)
//! ```
//!
//! A normalizing hit inside a suspicious phrase ("documentos" in "sem
//! documentos") or right after a negator ("não colaborou") is not counted.

use std::collections::{BTreeMap, HashSet};

use sentinela_core::config::SemanticConfig;
use sentinela_core::models::{ContextFactor, MatchedTerm};
use sentinela_lexicon::{builtin, LexiconSet, PhraseMatch, Polarity};

use crate::factors;

pub const CRITICAL_ESCALATION: &str = "critical_escalation";
pub const EXTERNAL_PROBABILITY: &str = "external_probability";

/// Words that invert the normalizing term they precede.
const NEGATORS: [&str; 3] = ["sem", "não", "nunca"];

/// Every intermediate value of one semantic evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticBreakdown {
    /// Signed contribution per lexicon category. Every category is present.
    pub categories: BTreeMap<String, f64>,
    /// Lift added by the critical escalation floor (0 when not triggered).
    pub critical_escalation: f64,
    /// Lexicon-only score, clamped.
    pub heuristic: f64,
    /// External probability, when a source answered.
    pub probability: Option<f64>,
    pub final_score: f64,
    /// Hits in encounter order.
    pub matched: Vec<MatchedTerm>,
    pub context_factors: Vec<ContextFactor>,
}

impl SemanticBreakdown {
    /// Flattened breakdown for `ScoreResult::category_breakdown`.
    pub fn flatten(&self, probability_weight: f64) -> BTreeMap<String, f64> {
        let mut out = self.categories.clone();
        if self.critical_escalation > 0.0 {
            out.insert(CRITICAL_ESCALATION.to_string(), self.critical_escalation);
        }
        if let Some(p) = self.probability {
            out.insert(EXTERNAL_PROBABILITY.to_string(), probability_weight * p);
        }
        out
    }
}

/// Score already-normalized text.
pub fn compute(
    lexicon: &LexiconSet,
    config: &SemanticConfig,
    normalized: &str,
    probability: Option<f64>,
) -> SemanticBreakdown {
    let mut categories = BTreeMap::new();
    let mut located: Vec<(usize, usize, MatchedTerm)> = Vec::new();
    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut distinct_critical: HashSet<String> = HashSet::new();

    let categories_hits: Vec<Vec<PhraseMatch>> = lexicon
        .semantic_categories()
        .iter()
        .map(|c| c.find_all(normalized))
        .collect();
    let suspicious_spans: Vec<(usize, usize)> = lexicon
        .semantic_categories()
        .iter()
        .zip(&categories_hits)
        .filter(|(c, _)| c.set().polarity == Polarity::Additive)
        .flat_map(|(_, hits)| hits.iter().map(|h| (h.start, h.start + h.term.len())))
        .collect();

    for (order, (category, mut hits)) in lexicon
        .semantic_categories()
        .iter()
        .zip(categories_hits)
        .enumerate()
    {
        let set = category.set();
        if set.polarity == Polarity::Subtractive {
            hits.retain(|h| !is_neutralized(normalized, h, &suspicious_spans));
        }
        let contribution = set.contribution(hits.len());
        categories.insert(set.name.clone(), contribution);

        match set.polarity {
            Polarity::Additive => positive += contribution,
            Polarity::Subtractive => negative += contribution,
        }
        if set.name == builtin::CRITICAL_KEYWORDS {
            distinct_critical.extend(hits.iter().map(|h| h.term.clone()));
        }

        let share = if hits.is_empty() {
            0.0
        } else {
            contribution / hits.len() as f64
        };
        for hit in hits {
            located.push((
                hit.start,
                order,
                MatchedTerm {
                    term: hit.term,
                    category: set.name.clone(),
                    contribution: share,
                },
            ));
        }
    }

    let escalation_triggered = config.critical_escalation_hits > 0
        && distinct_critical.len() >= config.critical_escalation_hits;
    let escalated = if escalation_triggered {
        positive.max(config.critical_escalation_floor)
    } else {
        positive
    };
    let critical_escalation = escalated - positive;
    let heuristic = (escalated + negative).clamp(0.0, 1.0);

    let probability = probability.filter(|p| p.is_finite()).map(|p| p.clamp(0.0, 1.0));
    let final_score = match probability {
        Some(p) => {
            let w = config.probability_weight.clamp(0.0, 1.0);
            ((1.0 - w) * heuristic + w * p).clamp(0.0, 1.0)
        }
        None => heuristic,
    };

    located.sort_by_key(|(start, order, _)| (*start, *order));
    let matched: Vec<MatchedTerm> = located.into_iter().map(|(_, _, m)| m).collect();
    let context_factors = factors::derive(&matched);

    SemanticBreakdown {
        categories,
        critical_escalation,
        heuristic,
        probability,
        final_score,
        matched,
        context_factors,
    }
}

/// Whether a normalizing hit is negated or part of a suspicious phrase.
fn is_neutralized(normalized: &str, hit: &PhraseMatch, suspicious: &[(usize, usize)]) -> bool {
    let end = hit.start + hit.term.len();
    if suspicious
        .iter()
        .any(|&(s, e)| s <= hit.start && end <= e)
    {
        return true;
    }
    let preceding = normalized[..hit.start]
        .trim_end()
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    NEGATORS.contains(&preceding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinela_lexicon::normalize;

    fn run(text: &str) -> SemanticBreakdown {
        let lexicon = LexiconSet::builtin().unwrap();
        compute(&lexicon, &SemanticConfig::default(), &normalize(text), None)
    }

    #[test]
    fn neutral_text_scores_zero() {
        let b = run("o veículo seguia pela rodovia em velocidade compatível");
        assert_eq!(b.final_score, 0.0);
        assert!(b.matched.is_empty());
        assert_eq!(b.categories.len(), 7);
    }

    #[test]
    fn single_critical_hit_is_weighted_and_saturated() {
        let b = run("foi encontrada maconha no banco traseiro");
        let expected = 0.25 / 3.0;
        assert!((b.categories["critical_keywords"] - expected).abs() < 1e-12);
        assert!((b.final_score - expected).abs() < 1e-12);
        assert_eq!(b.critical_escalation, 0.0);
    }

    #[test]
    fn repeated_keyword_cannot_exceed_category_weight() {
        let b = run("arma arma arma arma arma arma arma arma");
        assert!((b.categories["critical_keywords"] - 0.25).abs() < 1e-12);
        // One distinct term never escalates.
        assert!((b.final_score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn two_distinct_critical_terms_escalate() {
        let b = run("apreensão de cocaína durante a fiscalização");
        assert!(b.critical_escalation > 0.0);
        assert!((b.final_score - 0.95).abs() < 1e-12);
    }

    #[test]
    fn normalizing_terms_offset_suspicion() {
        let b = run("nervoso, mas explicou que era a primeira vez, documentos em ordem");
        assert!(b.categories["criminal_contexts"] > 0.0);
        assert!(b.categories["normal_indicators"] < 0.0);
        assert_eq!(b.final_score, 0.0);
    }

    #[test]
    fn negated_normalizing_terms_do_not_offset() {
        let b = run("condutor nervoso, não colaborou com a equipe");
        assert_eq!(b.categories["normal_indicators"], 0.0);
        assert!(b.categories["criminal_contexts"] > 0.0);
        assert!(b.matched.iter().all(|m| m.category != "normal_indicators"));

        let b = run("condutor estava sem carteira e sem cpf");
        assert_eq!(b.categories["normal_indicators"], 0.0);
    }

    #[test]
    fn normalizing_term_inside_suspicious_phrase_is_ignored() {
        let b = run("condutor estava sem documentos no momento da abordagem");
        let terms: Vec<&str> = b.matched.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["sem documentos"]);
        assert_eq!(b.context_factors, vec![ContextFactor::MissingDocuments]);
        assert!(b.final_score > 0.0);
    }

    #[test]
    fn matched_terms_follow_text_order_across_categories() {
        let b = run("não sei de onde veio a cocaína, estava indo para casa");
        let terms: Vec<&str> = b.matched.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["não sei", "cocaína", "estava indo para casa", "casa"]);
        assert_eq!(b.context_factors, vec![ContextFactor::EvasiveBehavior]);
    }

    #[test]
    fn term_shares_sum_to_category_contribution() {
        let b = run("pistola e munição apreendidas, além de um revólver");
        let shares: f64 = b
            .matched
            .iter()
            .filter(|m| m.category == "critical_keywords")
            .map(|m| m.contribution)
            .sum();
        assert!((shares - b.categories["critical_keywords"]).abs() < 1e-12);
    }

    #[test]
    fn probability_blends_with_configured_weight() {
        let lexicon = LexiconSet::builtin().unwrap();
        let config = SemanticConfig::default();
        let text = normalize("foi encontrada maconha no banco traseiro");
        let b = compute(&lexicon, &config, &text, Some(0.9));
        let expected = 0.7 * (0.25 / 3.0) + 0.3 * 0.9;
        assert!((b.final_score - expected).abs() < 1e-12);
        assert_eq!(b.probability, Some(0.9));
    }

    #[test]
    fn non_finite_probability_is_ignored() {
        let lexicon = LexiconSet::builtin().unwrap();
        let text = normalize("foi encontrada maconha no banco traseiro");
        let b = compute(&lexicon, &SemanticConfig::default(), &text, Some(f64::NAN));
        assert_eq!(b.probability, None);
        assert!((b.final_score - b.heuristic).abs() < 1e-12);
    }
}
