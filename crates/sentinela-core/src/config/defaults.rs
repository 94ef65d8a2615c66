//! Single source of truth for all default values.

// Thresholds
pub const DEFAULT_BASE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.8;
pub const DEFAULT_HUMAN_REVIEW_THRESHOLD: f64 = 0.4;
/// Distance from the base threshold considered a borderline decision.
pub const BORDERLINE_MARGIN: f64 = 0.1;

// Threshold clamps
pub const CONTEXT_THRESHOLD_MIN: f64 = 0.1;
pub const CONTEXT_THRESHOLD_MAX: f64 = 0.9;
pub const DYNAMIC_THRESHOLD_MIN: f64 = 0.05;
pub const DYNAMIC_THRESHOLD_MAX: f64 = 0.95;

// Context multipliers
pub const DEFAULT_CONTEXT_MULTIPLIERS: [(&str, f64); 9] = [
    ("suspicious_hour", 1.2),
    ("known_crime_location", 1.5),
    ("evasive_behavior", 1.3),
    ("missing_documents", 1.2),
    ("suspicious_group", 1.4),
    ("recidivism", 2.0),
    ("border_area", 1.6),
    ("remote_location", 1.3),
    ("flight_attempt", 1.8),
];
/// Factors that always require human review.
pub const HIGH_STAKES_FACTORS: [&str; 3] = ["recidivism", "border_area", "flight_attempt"];

// Semantic category weights (additive categories sum to 1.0)
pub const DEFAULT_CRITICAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.20;
pub const DEFAULT_CONTEXT_WEIGHT: f64 = 0.20;
pub const DEFAULT_EVASION_WEIGHT: f64 = 0.15;
pub const DEFAULT_GENERAL_WEIGHT: f64 = 0.10;
pub const DEFAULT_BEHAVIORAL_WEIGHT: f64 = 0.10;
pub const DEFAULT_NORMAL_WEIGHT: f64 = 0.20;
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.15;

// Semantic scoring
pub const DEFAULT_CATEGORY_SATURATION: u32 = 3;
pub const DEFAULT_EVASION_SATURATION: u32 = 5;
pub const DEFAULT_CRITICAL_ESCALATION_HITS: usize = 2;
pub const DEFAULT_CRITICAL_ESCALATION_FLOOR: f64 = 0.95;
pub const DEFAULT_PROBABILITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

// Route rules
pub const DEFAULT_LOCATION_WEIGHT: f64 = 0.3;
pub const DEFAULT_TIME_WEIGHT: f64 = 0.2;
pub const DEFAULT_ROUND_TRIP_WEIGHT: f64 = 0.3;
pub const DEFAULT_ILLICIT_TRAVEL_WEIGHT: f64 = 0.2;
pub const DEFAULT_HIGH_RISK_AREA_WEIGHT: f64 = 0.3;
pub const DEFAULT_HISTORY_COUNT_WEIGHT: f64 = 0.2;
pub const DEFAULT_HISTORY_REPETITION_WEIGHT: f64 = 0.3;
pub const DEFAULT_PRIOR_CRIME_WEIGHT: f64 = 0.3;
pub const DEFAULT_PRIOR_STOP_WEIGHT: f64 = 0.2;
pub const DEFAULT_RECENT_TRANSFER_WEIGHT: f64 = 0.2;
pub const DEFAULT_HISTORY_TRIP_THRESHOLD: usize = 5;
pub const DEFAULT_REPETITION_MIN_TRIPS: usize = 3;
pub const DEFAULT_SUSPICIOUS_HOURS: [u32; 8] = [22, 23, 0, 1, 2, 3, 4, 5];

// Decision weights
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.75;
pub const DEFAULT_ROUTE_WEIGHT: f64 = 0.25;

// Runtime
pub const DEFAULT_SEMANTIC_MAX_CONCURRENT: usize = 4;
pub const DEFAULT_ROUTE_MAX_CONCURRENT: usize = 3;
pub const DEFAULT_SCORER_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;
pub const DEFAULT_CACHE_NAMESPACE: &str = "sentinela";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
