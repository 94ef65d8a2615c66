use proptest::prelude::*;
use sentinela_calibration::ThresholdCalibrator;
use sentinela_core::config::ThresholdConfig;
use sentinela_core::models::{ContextFactor, RiskTier};

fn factor() -> impl Strategy<Value = ContextFactor> {
    prop::sample::select(ContextFactor::ALL.to_vec())
}

fn with_multiplier(factor: ContextFactor, multiplier: f64, base: f64) -> ThresholdCalibrator {
    let mut config = ThresholdConfig {
        base_threshold: base,
        ..Default::default()
    };
    config
        .context_multipliers
        .insert(factor.as_str().to_string(), multiplier);
    ThresholdCalibrator::new(config)
}

proptest! {
    #[test]
    fn context_threshold_non_increasing_in_multiplier(
        factor in factor(),
        base in 0.01f64..0.99,
        low in 0.01f64..10.0,
        delta in 0.0f64..10.0,
    ) {
        let lower = with_multiplier(factor, low, base).context_adjusted_threshold(factor);
        let higher = with_multiplier(factor, low + delta, base).context_adjusted_threshold(factor);
        prop_assert!(higher <= lower);
    }

    #[test]
    fn context_threshold_within_bounds(
        factor in factor(),
        base in 0.01f64..0.99,
        multiplier in 0.001f64..1000.0,
    ) {
        let t = with_multiplier(factor, multiplier, base).context_adjusted_threshold(factor);
        prop_assert!((0.1..=0.9).contains(&t));
    }

    #[test]
    fn dynamic_threshold_within_bounds(factors in prop::collection::vec(factor(), 0..12)) {
        let t = ThresholdCalibrator::default().dynamic_threshold(&factors);
        prop_assert!((0.05..=0.95).contains(&t));
    }

    #[test]
    fn risk_tier_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let c = ThresholdCalibrator::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(c.risk_tier(lo) <= c.risk_tier(hi));
        prop_assert!(c.risk_tier(lo) >= RiskTier::Minimal);
    }
}
