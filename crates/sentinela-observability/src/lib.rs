//! # sentinela-observability
//!
//! Structured logging setup, span macros for the scoring pipeline, and the
//! degradation tracker that records every scorer fallback.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::init_tracing;
