use regex::Regex;
use sentinela_core::errors::LexiconError;

use crate::normalize::normalize;

/// A single whole-word occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub term: String,
    /// Byte offset in the normalized text.
    pub start: usize,
}

/// Whole-word/phrase matcher over a fixed term list.
///
/// Compiles the terms into one alternation bounded by Unicode `\b`, longest
/// terms first, so "boca de fumo ativa" wins over "boca de fumo" and "pó"
/// never matches inside "pólvora".
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    regex: Option<Regex>,
}

impl PhraseMatcher {
    pub fn new(category: &str, terms: &[String]) -> Result<Self, LexiconError> {
        let mut sorted: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();
        if sorted.is_empty() {
            return Ok(Self { regex: None });
        }
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        sorted.dedup();

        let alternation = sorted
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"\b(?:{alternation})\b")).map_err(|e| {
            LexiconError::InvalidPattern {
                category: category.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { regex: Some(regex) })
    }

    /// All non-overlapping occurrences in `normalized` text, in encounter order.
    pub fn find_all(&self, normalized: &str) -> Vec<PhraseMatch> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };
        regex
            .find_iter(normalized)
            .map(|m| PhraseMatch {
                term: m.as_str().to_string(),
                start: m.start(),
            })
            .collect()
    }

    /// First occurrence in `normalized` text.
    pub fn first(&self, normalized: &str) -> Option<String> {
        self.regex
            .as_ref()?
            .find(normalized)
            .map(|m| m.as_str().to_string())
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(normalized))
    }

    /// Convenience for raw, unnormalized text.
    pub fn matches_raw(&self, text: &str) -> bool {
        self.is_match(&normalize(text))
    }
}
