//! Test fixture loader for Sentinela decision scenarios.
//!
//! Provides typed deserialization of the scenario JSON files and helper
//! functions for loading them in tests across crates.

use std::path::PathBuf;

use sentinela_core::models::{Classification, DecisionRequest, RiskTier, TripRecord, VehicleHistory};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Expected outcome of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    pub classification: Classification,
    /// Any of these tiers is acceptable.
    pub risk_tiers: Vec<RiskTier>,
    #[serde(default)]
    pub requires_human_review: Option<bool>,
    #[serde(default)]
    pub degraded: Option<bool>,
    /// Exact route score, when the scenario pins it.
    #[serde(default)]
    pub route_score: Option<f64>,
}

/// A named end-to-end decision scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub narrative: String,
    #[serde(default)]
    pub trip: Option<TripRecord>,
    #[serde(default)]
    pub history: VehicleHistory,
    pub expected: Expectation,
}

impl Scenario {
    /// Decision request using the engine's configured weights.
    pub fn request(&self) -> DecisionRequest {
        DecisionRequest {
            narrative: self.narrative.clone(),
            trip: self.trip.clone(),
            history: self.history.clone(),
            weights: None,
        }
    }
}

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load one scenario by file stem, e.g. `"scenario_a"`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Load every scenario, sorted by file name.
pub fn load_all_scenarios() -> Vec<Scenario> {
    let dir = fixtures_root().join("scenarios");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(load_scenario))
        .collect()
}
