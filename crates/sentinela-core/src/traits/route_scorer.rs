use crate::errors::InputError;
use crate::models::{ScoreResult, TripRecord, VehicleHistory};

/// Trip metadata and vehicle history to suspicion score.
pub trait IRouteScorer: Send + Sync {
    fn score(&self, trip: &TripRecord, history: &VehicleHistory) -> Result<ScoreResult, InputError>;

    /// Structural validation run before scheduling.
    fn check(&self, trip: &TripRecord, history: &VehicleHistory) -> Result<(), InputError> {
        history.check_belongs_to(trip)
    }

    fn fingerprint(&self, trip: &TripRecord, history: &VehicleHistory) -> String;
}
