//! # sentinela-route
//!
//! Converts a trip record and the vehicle's recent history into a `[0, 1]`
//! suspicion score using seven independently capped additive rules.

pub mod rules;
mod scorer;

pub use rules::RuleOutcome;
pub use scorer::RouteScorer;
