mod config_issue;
mod context_factor;
mod decision;
mod degradation_event;
mod score_result;
mod trip;
mod verdict;

pub use config_issue::ConfigIssue;
pub use context_factor::ContextFactor;
pub use decision::{DecisionRequest, DecisionWeights};
pub use degradation_event::DegradationEvent;
pub use score_result::{DegradationReason, MatchedTerm, ScoreResult, ScoreSource};
pub use trip::{TripRecord, VehicleFlags, VehicleHistory};
pub use verdict::{Classification, ExplanationEntry, RiskTier, Verdict};
