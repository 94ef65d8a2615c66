//! # sentinela-semantic
//!
//! Converts a narrative into a `[0, 1]` suspicion score from lexicon hits.
//! Deterministic: no randomness, no model inference of its own.

mod factors;
pub mod formula;
mod input;
mod scorer;

pub use formula::SemanticBreakdown;
pub use input::prepare_narrative;
pub use scorer::SemanticScorer;
