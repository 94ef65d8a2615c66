//! Per-scorer concurrency ceiling and outcome counters.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use sentinela_core::config::ScorerLimits;
use sentinela_core::errors::ScorerError;
use serde::Serialize;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Snapshot of one scorer's load and outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorerStats {
    pub in_flight: usize,
    pub max_concurrent: usize,
    /// Highest `in_flight` observed since startup.
    pub peak_in_flight: usize,
    pub total_processed: u64,
    pub total_errors: u64,
    pub timeouts: u64,
    pub cancellations: u64,
}

impl ScorerStats {
    /// Fraction of processed calls that produced a score.
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 1.0;
        }
        (self.total_processed - self.total_errors) as f64 / self.total_processed as f64
    }

    pub fn load(&self) -> f64 {
        if self.max_concurrent == 0 {
            return 0.0;
        }
        self.in_flight as f64 / self.max_concurrent as f64
    }
}

/// Bounds in-flight evaluations of one scorer type.
///
/// Calls beyond `max_concurrent` wait for a permit instead of spawning work.
pub struct ScorerLimiter {
    name: &'static str,
    limits: ScorerLimits,
    semaphore: Arc<Semaphore>,
    gauge: Arc<Gauge>,
    processed: AtomicU64,
    errors: AtomicU64,
    timeouts: AtomicU64,
    cancellations: AtomicU64,
}

#[derive(Debug, Default)]
struct Gauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

/// An acquired permit. Counts as in flight until dropped.
///
/// Moved into the blocking task, so abandoned work keeps its permit until it
/// actually finishes.
pub struct Slot {
    _permit: OwnedSemaphorePermit,
    gauge: Arc<Gauge>,
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.gauge.current.fetch_sub(1, Ordering::AcqRel);
    }
}

impl ScorerLimiter {
    pub fn new(name: &'static str, limits: ScorerLimits) -> Self {
        Self {
            name,
            limits,
            semaphore: Arc::new(Semaphore::new(limits.max_concurrent.max(1))),
            gauge: Arc::new(Gauge::default()),
            processed: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            timeouts: AtomicU64::new(0),
            cancellations: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn limits(&self) -> ScorerLimits {
        self.limits
    }

    /// Wait for a free slot.
    pub async fn acquire(&self) -> Result<Slot, ScorerError> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|e| ScorerError::Failed {
                scorer: self.name.to_string(),
                reason: e.to_string(),
            })?;
        let now = self.gauge.current.fetch_add(1, Ordering::AcqRel) + 1;
        self.gauge.peak.fetch_max(now, Ordering::AcqRel);
        Ok(Slot {
            _permit: permit,
            gauge: Arc::clone(&self.gauge),
        })
    }

    /// Count the outcome of one evaluation.
    pub fn record<T>(&self, outcome: &Result<T, ScorerError>) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        match outcome {
            Ok(_) => {}
            Err(ScorerError::TimedOut { .. }) => {
                self.timeouts.fetch_add(1, Ordering::Relaxed);
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            Err(ScorerError::Cancelled { .. }) => {
                self.cancellations.fetch_add(1, Ordering::Relaxed);
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            Err(_) => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn stats(&self) -> ScorerStats {
        ScorerStats {
            in_flight: self.gauge.current.load(Ordering::Acquire),
            max_concurrent: self.limits.max_concurrent,
            peak_in_flight: self.gauge.peak.load(Ordering::Acquire),
            total_processed: self.processed.load(Ordering::Relaxed),
            total_errors: self.errors.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
            cancellations: self.cancellations.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max: usize) -> ScorerLimiter {
        ScorerLimiter::new(
            "semantic_scorer",
            ScorerLimits {
                max_concurrent: max,
                timeout_ms: 1_000,
            },
        )
    }

    #[tokio::test]
    async fn slots_track_in_flight() {
        let limiter = limiter(2);
        let a = limiter.acquire().await.unwrap();
        let b = limiter.acquire().await.unwrap();
        assert_eq!(limiter.stats().in_flight, 2);
        assert_eq!(limiter.stats().load(), 1.0);
        drop(a);
        drop(b);
        let stats = limiter.stats();
        assert_eq!(stats.in_flight, 0);
        assert_eq!(stats.peak_in_flight, 2);
    }

    #[tokio::test]
    async fn third_caller_waits() {
        let limiter = limiter(1);
        let held = limiter.acquire().await.unwrap();
        let waited = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            limiter.acquire(),
        )
        .await;
        assert!(waited.is_err());
        drop(held);
        assert!(limiter.acquire().await.is_ok());
    }

    #[test]
    fn outcomes_are_counted() {
        let limiter = limiter(1);
        limiter.record::<()>(&Ok(()));
        limiter.record::<()>(&Err(ScorerError::TimedOut {
            scorer: "semantic_scorer".into(),
            timeout_ms: 10,
        }));
        let stats = limiter.stats();
        assert_eq!(stats.total_processed, 2);
        assert_eq!(stats.timeouts, 1);
        assert!((stats.success_rate() - 0.5).abs() < 1e-12);
    }
}
