use sentinela_core::config::SentinelaConfig;
use sentinela_core::errors::LexiconError;
use sentinela_core::fingerprint::fingerprint;
use sentinela_core::models::ConfigIssue;

use crate::builtin::{self, LEXICON_VERSION};
use crate::category::{Category, IndicatorSet, Polarity};
use crate::matcher::PhraseMatcher;
use crate::normalize::normalize;

/// The full, compiled lexicon: semantic categories plus route phrase lists.
///
/// Built once from configuration and shared read-only.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    version: String,
    semantic: Vec<Category>,
    route: Vec<Category>,
}

impl LexiconSet {
    /// Built-in lexicons with default weights.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_config(&SentinelaConfig::default())
    }

    /// Built-in lexicons with the overrides and weights from `config`.
    pub fn from_config(config: &SentinelaConfig) -> Result<Self, LexiconError> {
        let overrides = &config.lexicon.categories;
        if let Some(unknown) = overrides.keys().find(|name| builtin::terms(name).is_none()) {
            return Err(LexiconError::UnknownCategory {
                name: unknown.clone(),
            });
        }

        let semantic = builtin::SEMANTIC_CATEGORIES
            .iter()
            .map(|name| {
                let (weight, saturation, polarity) = if *name == builtin::NORMAL_INDICATORS {
                    (
                        config.semantic.normal_weight,
                        config.semantic.category_saturation,
                        Polarity::Subtractive,
                    )
                } else if *name == builtin::EVASION_INDICATORS {
                    (
                        config.semantic.weights.evasion_indicators,
                        config.semantic.evasion_saturation,
                        Polarity::Additive,
                    )
                } else {
                    (
                        config.semantic.weights.get(name).unwrap_or(0.0),
                        config.semantic.category_saturation,
                        Polarity::Additive,
                    )
                };
                compile(config, name, weight, saturation, polarity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let route = builtin::ROUTE_LISTS
            .iter()
            .map(|name| compile(config, name, 0.0, 1, Polarity::Additive))
            .collect::<Result<Vec<_>, _>>()?;

        let version = match (&config.lexicon.version, overrides.is_empty()) {
            (Some(version), _) => version.clone(),
            (None, true) => LEXICON_VERSION.to_string(),
            (None, false) => {
                let encoded = serde_json::to_vec(overrides).unwrap_or_default();
                let digest = fingerprint(&[&encoded]);
                format!("{LEXICON_VERSION}+{}", &digest[..12])
            }
        };

        Ok(Self {
            version,
            semantic,
            route,
        })
    }

    /// Version tag; part of every cache fingerprint.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Semantic categories in scoring order, normalizing terms last.
    pub fn semantic_categories(&self) -> &[Category] {
        &self.semantic
    }

    /// Semantic category or route list by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.semantic
            .iter()
            .chain(self.route.iter())
            .find(|c| c.name() == name)
    }

    /// Empty categories, reported rather than thrown.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        self.semantic
            .iter()
            .chain(self.route.iter())
            .filter(|c| c.set().terms.is_empty())
            .map(|c| {
                ConfigIssue::new(
                    format!("lexicon.categories.{}", c.name()),
                    "term list must not be empty",
                )
            })
            .collect()
    }
}

fn compile(
    config: &SentinelaConfig,
    name: &str,
    weight: f64,
    saturation: u32,
    polarity: Polarity,
) -> Result<Category, LexiconError> {
    let override_ = config.lexicon.categories.get(name);
    let base: Vec<String> = match override_.and_then(|o| o.terms.as_ref()) {
        Some(replacement) => replacement.clone(),
        None => builtin::terms(name)
            .unwrap_or_default()
            .iter()
            .map(|t| t.to_string())
            .collect(),
    };
    let extra = override_.map(|o| o.extra_terms.clone()).unwrap_or_default();

    let mut terms: Vec<String> = Vec::with_capacity(base.len() + extra.len());
    for term in base.iter().chain(extra.iter()).map(|t| normalize(t)) {
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }

    let saturation = override_.and_then(|o| o.saturation).unwrap_or(saturation);
    let matcher = PhraseMatcher::new(name, &terms)?;
    let set = IndicatorSet {
        name: name.to_string(),
        weight,
        saturation,
        polarity,
        terms,
    };
    Ok(Category::new(set, matcher))
}
