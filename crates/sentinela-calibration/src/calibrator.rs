use sentinela_core::config::{defaults, ThresholdConfig};
use sentinela_core::models::{ContextFactor, RiskTier};

/// Pure threshold arithmetic over a frozen [`ThresholdConfig`].
#[derive(Debug, Clone)]
pub struct ThresholdCalibrator {
    config: ThresholdConfig,
}

impl ThresholdCalibrator {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    pub fn base_threshold(&self) -> f64 {
        self.config.base_threshold
    }

    /// `base / multiplier[factor]`, clamped to `[0.1, 0.9]`.
    ///
    /// A factor without a configured multiplier leaves the base threshold
    /// in place (still clamped).
    pub fn context_adjusted_threshold(&self, factor: ContextFactor) -> f64 {
        let base = self.config.base_threshold;
        let adjusted = match self.config.multiplier(factor) {
            Some(m) if m > 0.0 => base / m,
            _ => base,
        };
        adjusted.clamp(
            defaults::CONTEXT_THRESHOLD_MIN,
            defaults::CONTEXT_THRESHOLD_MAX,
        )
    }

    /// Divide the base threshold by every factor's multiplier in order.
    ///
    /// Only the final value is clamped to `[0.05, 0.95]`.
    pub fn dynamic_threshold(&self, factors: &[ContextFactor]) -> f64 {
        let threshold = factors
            .iter()
            .filter_map(|f| self.config.multiplier(*f))
            .filter(|m| *m > 0.0)
            .fold(self.config.base_threshold, |t, m| t / m);
        threshold.clamp(
            defaults::DYNAMIC_THRESHOLD_MIN,
            defaults::DYNAMIC_THRESHOLD_MAX,
        )
    }

    /// Threshold a combined score is compared against.
    ///
    /// No factors: the base threshold. One factor: the context-adjusted
    /// threshold. Two or more: the dynamic threshold.
    pub fn effective_threshold(&self, factors: &[ContextFactor]) -> f64 {
        match factors {
            [] => self.config.base_threshold,
            [single] => self.context_adjusted_threshold(*single),
            many => self.dynamic_threshold(many),
        }
    }

    pub fn risk_tier(&self, confidence: f64) -> RiskTier {
        if confidence >= self.config.high_risk_threshold {
            RiskTier::High
        } else if confidence >= self.config.confidence_threshold {
            RiskTier::Medium
        } else if confidence >= self.config.base_threshold {
            RiskTier::Low
        } else {
            RiskTier::Minimal
        }
    }

    /// Low confidence, a borderline score, or any high-stakes factor.
    pub fn requires_review(&self, confidence: f64, factors: &[ContextFactor]) -> bool {
        confidence < self.config.human_review_threshold
            || (confidence - self.config.base_threshold).abs() < defaults::BORDERLINE_MARGIN
            || factors.iter().any(|f| is_high_stakes(*f))
    }
}

impl Default for ThresholdCalibrator {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

fn is_high_stakes(factor: ContextFactor) -> bool {
    defaults::HIGH_STAKES_FACTORS.contains(&factor.as_str())
}
