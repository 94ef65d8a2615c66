use serde::{Deserialize, Serialize};

use super::defaults;

/// Route scorer rule weights and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub location_weight: f64,
    pub time_weight: f64,
    pub round_trip_weight: f64,
    pub illicit_travel_weight: f64,
    pub high_risk_area_weight: f64,
    pub history_count_weight: f64,
    pub history_repetition_weight: f64,
    pub prior_crime_weight: f64,
    pub prior_stop_weight: f64,
    pub recent_transfer_weight: f64,
    /// History rule fires when prior trips exceed this count.
    pub history_trip_threshold: usize,
    /// Minimum prior trips before location repetition is considered.
    pub repetition_min_trips: usize,
    /// Local hours (0-23) considered suspicious.
    pub suspicious_hours: Vec<u32>,
    pub analyze_temporal_context: bool,
    pub analyze_location_context: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            location_weight: defaults::DEFAULT_LOCATION_WEIGHT,
            time_weight: defaults::DEFAULT_TIME_WEIGHT,
            round_trip_weight: defaults::DEFAULT_ROUND_TRIP_WEIGHT,
            illicit_travel_weight: defaults::DEFAULT_ILLICIT_TRAVEL_WEIGHT,
            high_risk_area_weight: defaults::DEFAULT_HIGH_RISK_AREA_WEIGHT,
            history_count_weight: defaults::DEFAULT_HISTORY_COUNT_WEIGHT,
            history_repetition_weight: defaults::DEFAULT_HISTORY_REPETITION_WEIGHT,
            prior_crime_weight: defaults::DEFAULT_PRIOR_CRIME_WEIGHT,
            prior_stop_weight: defaults::DEFAULT_PRIOR_STOP_WEIGHT,
            recent_transfer_weight: defaults::DEFAULT_RECENT_TRANSFER_WEIGHT,
            history_trip_threshold: defaults::DEFAULT_HISTORY_TRIP_THRESHOLD,
            repetition_min_trips: defaults::DEFAULT_REPETITION_MIN_TRIPS,
            suspicious_hours: defaults::DEFAULT_SUSPICIOUS_HOURS.to_vec(),
            analyze_temporal_context: true,
            analyze_location_context: true,
        }
    }
}
