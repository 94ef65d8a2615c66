//! # sentinela-core
//!
//! Foundation crate for the Sentinela decision engine.
//! Defines the data model, traits, errors, configuration, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SentinelaConfig;
pub use errors::{SentinelaError, SentinelaResult};
pub use models::{
    Classification, ContextFactor, DecisionRequest, DecisionWeights, ExplanationEntry,
    RiskTier, ScoreResult, ScoreSource, TripRecord, VehicleFlags, VehicleHistory, Verdict,
};
