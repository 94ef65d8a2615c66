use serde::{Deserialize, Serialize};

use super::{TripRecord, VehicleHistory};
use crate::config::defaults;

/// Relative weight of each scorer in the combined score.
///
/// Not renormalized by the aggregator; callers supply weights summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionWeights {
    pub semantic_weight: f64,
    pub route_weight: f64,
}

impl DecisionWeights {
    pub fn new(semantic_weight: f64, route_weight: f64) -> Self {
        Self {
            semantic_weight,
            route_weight,
        }
    }
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            route_weight: defaults::DEFAULT_ROUTE_WEIGHT,
        }
    }
}

/// Everything needed for one decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionRequest {
    pub narrative: String,
    /// `None` when no trip metadata is available; the route scorer then degrades.
    pub trip: Option<TripRecord>,
    pub history: VehicleHistory,
    /// Falls back to the engine's configured weights when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<DecisionWeights>,
}

impl DecisionRequest {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            ..Default::default()
        }
    }

    pub fn with_trip(mut self, trip: TripRecord) -> Self {
        self.trip = Some(trip);
        self
    }

    pub fn with_history(mut self, history: VehicleHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_weights(mut self, weights: DecisionWeights) -> Self {
        self.weights = Some(weights);
        self
    }
}
