use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Situational factor that lowers the decision threshold.
///
/// Each factor maps to a multiplier in `ThresholdConfig::context_multipliers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextFactor {
    SuspiciousHour,
    KnownCrimeLocation,
    EvasiveBehavior,
    MissingDocuments,
    SuspiciousGroup,
    Recidivism,
    BorderArea,
    RemoteLocation,
    FlightAttempt,
}

impl ContextFactor {
    pub const ALL: [ContextFactor; 9] = [
        Self::SuspiciousHour,
        Self::KnownCrimeLocation,
        Self::EvasiveBehavior,
        Self::MissingDocuments,
        Self::SuspiciousGroup,
        Self::Recidivism,
        Self::BorderArea,
        Self::RemoteLocation,
        Self::FlightAttempt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuspiciousHour => "suspicious_hour",
            Self::KnownCrimeLocation => "known_crime_location",
            Self::EvasiveBehavior => "evasive_behavior",
            Self::MissingDocuments => "missing_documents",
            Self::SuspiciousGroup => "suspicious_group",
            Self::Recidivism => "recidivism",
            Self::BorderArea => "border_area",
            Self::RemoteLocation => "remote_location",
            Self::FlightAttempt => "flight_attempt",
        }
    }
}

impl fmt::Display for ContextFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|factor| factor.as_str() == s)
            .ok_or_else(|| format!("unknown context factor: {s}"))
    }
}
