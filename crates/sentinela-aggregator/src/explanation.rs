//! Flattening of scorer outputs into verdict explanation entries.

use sentinela_core::models::{ExplanationEntry, ScoreResult};

/// Entries for one scorer result.
///
/// A degraded result yields a single degradation entry. Otherwise matched
/// terms come first in encounter order, followed by non-zero breakdown
/// entries that no term accounts for (rules such as `time` or `history`).
pub fn entries_for(result: &ScoreResult) -> Vec<ExplanationEntry> {
    let source = result.source();
    if let Some(reason) = result.degradation() {
        return vec![ExplanationEntry::degraded(source, reason)];
    }

    let mut entries: Vec<ExplanationEntry> = result
        .matched_terms()
        .iter()
        .map(|m| ExplanationEntry::term(source, m.category.as_str(), m.term.as_str(), m.contribution))
        .collect();

    for (category, contribution) in result.category_breakdown() {
        let explained = result.matched_terms().iter().any(|m| &m.category == category);
        if *contribution != 0.0 && !explained {
            entries.push(ExplanationEntry::rule(
                source,
                category.as_str(),
                category.as_str(),
                *contribution,
            ));
        }
    }
    entries
}
