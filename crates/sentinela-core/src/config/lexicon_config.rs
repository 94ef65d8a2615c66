use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overrides applied on top of the built-in lexicons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Replaces the built-in lexicon version tag. Changing it invalidates cached scores.
    pub version: Option<String>,
    /// Category name to override.
    pub categories: BTreeMap<String, CategoryOverride>,
}

/// Per-category lexicon override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryOverride {
    /// Replaces the built-in terms entirely.
    pub terms: Option<Vec<String>>,
    /// Appended to the (possibly replaced) terms.
    pub extra_terms: Vec<String>,
    pub saturation: Option<u32>,
}
