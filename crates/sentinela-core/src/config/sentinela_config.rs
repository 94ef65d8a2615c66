//! Top-level Sentinela configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConfigProfile, LexiconConfig, LoggingConfig, RouteConfig, RuntimeConfig, SemanticConfig,
    ThresholdConfig,
};
use crate::errors::ConfigError;
use crate::models::DecisionWeights;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SENTINELA_*`)
/// 2. Profile named by `profile`, over the file values it controls
/// 3. Config file
/// 4. Compiled defaults
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SentinelaConfig {
    /// When set, replaces thresholds and category weights with the profile's.
    pub profile: Option<ConfigProfile>,
    pub thresholds: ThresholdConfig,
    pub semantic: SemanticConfig,
    pub route: RouteConfig,
    pub lexicon: LexiconConfig,
    pub runtime: RuntimeConfig,
    pub decision: DecisionWeights,
    pub logging: LoggingConfig,
}

impl SentinelaConfig {
    /// Defaults with `profile` applied.
    pub fn from_profile(profile: ConfigProfile) -> Self {
        let mut config = Self::default();
        config.set_profile(profile);
        config
    }

    /// Load from a TOML file, then apply environment overrides.
    ///
    /// Validation is left to the engine, which also needs the compiled lexicon.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: SentinelaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_selected_profile();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: SentinelaConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.apply_selected_profile();
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn set_profile(&mut self, profile: ConfigProfile) {
        profile.apply(self);
        self.profile = Some(profile);
    }

    fn apply_selected_profile(&mut self) {
        if let Some(profile) = self.profile {
            profile.apply(self);
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SENTINELA_SUSPICION_THRESHOLD`, `SENTINELA_TIMEOUT_MS`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let parse_f64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());
        let parse_u64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        // Profile first so individual values can still refine it.
        if let Some(profile) = lookup("SENTINELA_PROFILE").and_then(|v| v.parse().ok()) {
            self.set_profile(profile);
        }
        if let Some(v) = parse_f64("SENTINELA_SUSPICION_THRESHOLD") {
            self.thresholds.base_threshold = v;
        }
        if let Some(v) = parse_f64("SENTINELA_CONFIDENCE_THRESHOLD") {
            self.thresholds.confidence_threshold = v;
        }
        if let Some(v) = parse_f64("SENTINELA_HIGH_RISK_THRESHOLD") {
            self.thresholds.high_risk_threshold = v;
        }
        if let Some(v) = parse_f64("SENTINELA_REVIEW_THRESHOLD") {
            self.thresholds.human_review_threshold = v;
        }
        if let Some(v) = parse_u64("SENTINELA_MAX_CONCURRENT") {
            self.runtime.semantic.max_concurrent = v as usize;
            self.runtime.route.max_concurrent = v as usize;
        }
        if let Some(v) = parse_u64("SENTINELA_TIMEOUT_MS") {
            self.runtime.semantic.timeout_ms = v;
            self.runtime.route.timeout_ms = v;
        }
        if let Some(v) = parse_u64("SENTINELA_CACHE_TTL_SECS") {
            self.runtime.cache_ttl_secs = v;
        }
        if let Some(v) = lookup("SENTINELA_CACHE_ENABLED").and_then(|v| v.trim().parse::<bool>().ok()) {
            self.runtime.cache_enabled = v;
        }
    }
}
