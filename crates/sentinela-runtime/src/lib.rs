//! # sentinela-runtime
//!
//! Agent runtime and engine facade. Runs both scorers concurrently, each
//! behind its own concurrency ceiling, timeout and namespaced cache, then
//! hands the results to the risk aggregator.

pub mod cache;
pub mod cancellation;
mod engine;
pub mod limiter;

pub use cache::{CacheStats, ScoreCache};
pub use cancellation::{Cancellable, CancellationToken};
pub use engine::{EngineStats, SentinelaEngine};
pub use limiter::{ScorerLimiter, ScorerStats};
