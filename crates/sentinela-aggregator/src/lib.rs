//! # sentinela-aggregator
//!
//! Risk Aggregator: weighted combination of the two scorer outputs,
//! thresholded through the calibrator into a [`Verdict`](sentinela_core::models::Verdict).

mod aggregator;
pub mod explanation;

pub use aggregator::{combine, RiskAggregator};
