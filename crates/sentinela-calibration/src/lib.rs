//! # sentinela-calibration
//!
//! Threshold Calibrator: maps context factors to effective decision
//! thresholds, confidences to risk tiers, and decides when a verdict needs
//! human review. Also hosts the one-shot configuration validation run at
//! engine startup.

mod calibrator;
pub mod validation;

pub use calibrator::ThresholdCalibrator;
pub use validation::validate;
