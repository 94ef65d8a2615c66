//! # sentinela-lexicon
//!
//! Indicator lexicons: static, versioned keyword and phrase categories used by
//! the semantic and route scorers, plus the whole-word matcher that finds them.

pub mod builtin;
mod category;
mod lexicon_set;
mod matcher;
pub mod normalize;

pub use category::{Category, IndicatorSet, Polarity};
pub use lexicon_set::LexiconSet;
pub use matcher::{PhraseMatch, PhraseMatcher};
pub use normalize::{normalize, truncate_chars};
