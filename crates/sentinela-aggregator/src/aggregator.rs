use sentinela_calibration::ThresholdCalibrator;
use sentinela_core::models::{
    Classification, ContextFactor, DecisionWeights, ScoreResult, Verdict,
};

use crate::explanation;

/// `route_weight * route + semantic_weight * semantic`, clamped to `[0, 1]`.
///
/// Weights are used as given; a non-finite result counts as zero.
pub fn combine(semantic: f64, route: f64, weights: DecisionWeights) -> f64 {
    let combined = weights.route_weight * route + weights.semantic_weight * semantic;
    if combined.is_finite() {
        combined.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Stateless apart from the calibrator it holds.
#[derive(Debug, Clone, Default)]
pub struct RiskAggregator {
    calibrator: ThresholdCalibrator,
}

impl RiskAggregator {
    pub fn new(calibrator: ThresholdCalibrator) -> Self {
        Self { calibrator }
    }

    pub fn calibrator(&self) -> &ThresholdCalibrator {
        &self.calibrator
    }

    /// Combine both scorer outputs into a verdict.
    ///
    /// A degraded input contributes its zero score and marks the verdict
    /// degraded; the decision itself never fails.
    pub fn decide(
        &self,
        semantic: &ScoreResult,
        route: &ScoreResult,
        weights: DecisionWeights,
    ) -> Verdict {
        let confidence = combine(semantic.score(), route.score(), weights);

        let mut factors: Vec<ContextFactor> = Vec::new();
        for factor in semantic
            .context_factors()
            .iter()
            .chain(route.context_factors())
        {
            if !factors.contains(factor) {
                factors.push(*factor);
            }
        }

        let threshold = self.calibrator.effective_threshold(&factors);
        let classification = if confidence >= threshold {
            Classification::Suspect
        } else {
            Classification::NoChange
        };
        let risk_tier = self.calibrator.risk_tier(confidence);
        let degraded = semantic.is_degraded() || route.is_degraded();
        let requires_human_review =
            degraded || self.calibrator.requires_review(confidence, &factors);

        let mut explanation = explanation::entries_for(semantic);
        explanation.extend(explanation::entries_for(route));

        tracing::info!(
            classification = ?classification,
            confidence,
            risk_tier = %risk_tier,
            threshold,
            requires_review = requires_human_review,
            degraded,
            factors = factors.len(),
            "verdict reached"
        );

        Verdict {
            classification,
            confidence,
            risk_tier,
            requires_human_review,
            threshold,
            context_factors: factors,
            degraded,
            explanation,
        }
    }
}
