use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Prior-record flags attached to the vehicle of a stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleFlags {
    pub prior_crime: bool,
    pub prior_stop: bool,
    pub recent_transfer: bool,
}

impl VehicleFlags {
    pub fn any(&self) -> bool {
        self.prior_crime || self.prior_stop || self.recent_transfer
    }
}

/// Structured metadata about one stop or travel event.
///
/// Owned by the caller and read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRecord {
    /// Opaque key used to group trips of the same vehicle.
    pub vehicle_id: String,
    pub location: Option<String>,
    /// Local wall-clock time of the stop.
    pub timestamp: Option<NaiveDateTime>,
    pub narrative: String,
    pub vehicle_flags: VehicleFlags,
}

impl TripRecord {
    pub fn new(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }

    pub fn with_flags(mut self, flags: VehicleFlags) -> Self {
        self.vehicle_flags = flags;
        self
    }

    /// Location lowercased and trimmed, or `None` when absent or blank.
    pub fn normalized_location(&self) -> Option<String> {
        self.location
            .as_deref()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
    }
}

/// Snapshot of prior trips for one vehicle, oldest first.
///
/// The engine never retains it beyond a single call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleHistory {
    pub vehicle_id: String,
    pub trips: Vec<TripRecord>,
}

impl VehicleHistory {
    pub fn new(vehicle_id: impl Into<String>, trips: Vec<TripRecord>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            trips,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Number of trips sharing the most frequent normalized location.
    pub fn most_common_location_count(&self) -> usize {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for location in self.trips.iter().filter_map(TripRecord::normalized_location) {
            *counts.entry(location).or_insert(0) += 1;
        }
        counts.into_values().max().unwrap_or(0)
    }

    /// Check that this history can be used alongside `trip`.
    pub fn check_belongs_to(&self, trip: &TripRecord) -> Result<(), InputError> {
        if self.is_empty() {
            return Ok(());
        }
        if trip.vehicle_id.trim().is_empty() {
            return Err(InputError::MalformedTrip {
                reason: "vehicle_id is empty but a vehicle history was supplied".to_string(),
            });
        }
        if !self.vehicle_id.is_empty() && self.vehicle_id != trip.vehicle_id {
            return Err(InputError::HistoryMismatch {
                expected: trip.vehicle_id.clone(),
                found: self.vehicle_id.clone(),
            });
        }
        if let Some(stray) = self
            .trips
            .iter()
            .find(|t| !t.vehicle_id.is_empty() && t.vehicle_id != trip.vehicle_id)
        {
            return Err(InputError::HistoryMismatch {
                expected: trip.vehicle_id.clone(),
                found: stray.vehicle_id.clone(),
            });
        }
        Ok(())
    }
}
