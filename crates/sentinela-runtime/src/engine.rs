use std::sync::{Arc, Mutex, MutexGuard};

use sentinela_aggregator::RiskAggregator;
use sentinela_calibration::{validate, ThresholdCalibrator};
use sentinela_core::config::SentinelaConfig;
use sentinela_core::errors::{ConfigError, InputError, ScorerError, SentinelaResult};
use sentinela_core::models::{
    DecisionRequest, DegradationEvent, DegradationReason, ScoreResult, ScoreSource, TripRecord,
    VehicleHistory, Verdict,
};
use sentinela_core::traits::{IProbabilitySource, IRouteScorer, ISemanticScorer};
use sentinela_lexicon::LexiconSet;
use sentinela_observability::tracing_setup::events;
use sentinela_observability::{
    decision_span, route_span, semantic_span, DegradationTracker, TrackedDegradation,
};
use sentinela_route::RouteScorer;
use sentinela_semantic::SemanticScorer;
use serde::Serialize;
use tracing::Instrument;

use crate::cache::{CacheStats, ScoreCache};
use crate::cancellation::CancellationToken;
use crate::limiter::{ScorerLimiter, ScorerStats};

const FALLBACK: &str = "zero_score";

/// Runtime counters across both scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStats {
    pub semantic: ScorerStats,
    pub route: ScorerStats,
    pub cache: CacheStats,
    pub active_degradations: usize,
}

/// The decision engine.
///
/// Built once from a validated configuration, then shared (typically in an
/// `Arc`) by every request.
pub struct SentinelaEngine {
    config: Arc<SentinelaConfig>,
    lexicon: Arc<LexiconSet>,
    semantic: Arc<dyn ISemanticScorer>,
    route: Arc<dyn IRouteScorer>,
    aggregator: RiskAggregator,
    semantic_limiter: ScorerLimiter,
    route_limiter: ScorerLimiter,
    cache: ScoreCache,
    degradation: Mutex<DegradationTracker>,
}

impl SentinelaEngine {
    /// Compile the lexicon, validate the configuration, and build both scorers.
    ///
    /// Any validation issue refuses startup with `ConfigError::ValidationFailed`.
    pub fn new(config: SentinelaConfig) -> SentinelaResult<Self> {
        let lexicon = Arc::new(LexiconSet::from_config(&config)?);
        let issues = validate(&config, &lexicon);
        if !issues.is_empty() {
            return Err(ConfigError::ValidationFailed { issues }.into());
        }

        let semantic = SemanticScorer::new(Arc::clone(&lexicon), config.semantic.clone());
        let route = RouteScorer::new(Arc::clone(&lexicon), config.route.clone())
            .with_max_text_length(config.semantic.max_text_length);

        let engine = Self {
            semantic: Arc::new(semantic),
            route: Arc::new(route),
            aggregator: RiskAggregator::new(ThresholdCalibrator::new(config.thresholds.clone())),
            semantic_limiter: ScorerLimiter::new(
                ScoreSource::Semantic.component(),
                config.runtime.semantic,
            ),
            route_limiter: ScorerLimiter::new(ScoreSource::Route.component(), config.runtime.route),
            cache: ScoreCache::from_config(&config.runtime),
            degradation: Mutex::new(DegradationTracker::new()),
            lexicon,
            config: Arc::new(config),
        };
        events::engine_started(
            engine.lexicon.version(),
            engine
                .config
                .profile
                .as_ref()
                .map(|p| p.as_str())
                .unwrap_or("custom"),
            engine.cache.is_enabled(),
        );
        Ok(engine)
    }

    /// Blend an external probability into the built-in semantic scorer.
    pub fn with_probability_source(mut self, source: Arc<dyn IProbabilitySource>) -> Self {
        let scorer = SemanticScorer::new(Arc::clone(&self.lexicon), self.config.semantic.clone())
            .with_probability_source(source);
        self.semantic = Arc::new(scorer);
        self.cache.invalidate_all();
        self
    }

    /// Replace both scorers.
    pub fn with_scorers(
        mut self,
        semantic: Arc<dyn ISemanticScorer>,
        route: Arc<dyn IRouteScorer>,
    ) -> Self {
        self.semantic = semantic;
        self.route = route;
        self.cache.invalidate_all();
        self
    }

    pub fn config(&self) -> &SentinelaConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &LexiconSet {
        &self.lexicon
    }

    pub async fn decide(&self, request: DecisionRequest) -> SentinelaResult<Verdict> {
        self.decide_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Decide, abandoning in-flight scorer work once `cancel` fires.
    ///
    /// Abandoned scorers degrade to zero; only invalid input fails the call.
    pub async fn decide_with_cancel(
        &self,
        request: DecisionRequest,
        cancel: &CancellationToken,
    ) -> SentinelaResult<Verdict> {
        let span = decision_span!(request.narrative.chars().count(), request.trip.is_some());
        self.decide_inner(request, cancel).instrument(span).await
    }

    async fn decide_inner(
        &self,
        request: DecisionRequest,
        cancel: &CancellationToken,
    ) -> SentinelaResult<Verdict> {
        let DecisionRequest {
            narrative,
            trip,
            history,
            weights,
        } = request;

        let has_narrative = !narrative.trim().is_empty();
        if has_narrative {
            self.semantic.check(&narrative)?;
        }
        let trip = trip.map(|mut t| {
            if t.narrative.trim().is_empty() {
                t.narrative = narrative.clone();
            }
            t
        });
        if let Some(trip) = &trip {
            self.route.check(trip, &history)?;
        }

        let semantic_run = async {
            if has_narrative {
                self.run_semantic(narrative, cancel).await
            } else {
                Ok(ScoreResult::degraded(
                    ScoreSource::Semantic,
                    DegradationReason::MissingInput,
                ))
            }
        };
        let route_run = async {
            match trip {
                Some(trip) => self.run_route(trip, history, cancel).await,
                None => Ok(ScoreResult::degraded(
                    ScoreSource::Route,
                    DegradationReason::MissingInput,
                )),
            }
        };
        let (semantic, route) = tokio::join!(semantic_run, route_run);
        let semantic = self.settle(ScoreSource::Semantic, semantic)?;
        let route = self.settle(ScoreSource::Route, route)?;

        let weights = weights.unwrap_or(self.config.decision);
        Ok(self.aggregator.decide(&semantic, &route, weights))
    }

    /// Decide many requests concurrently under the same per-scorer ceilings.
    ///
    /// Results keep the order of `requests`.
    pub async fn decide_batch(
        self: &Arc<Self>,
        requests: Vec<DecisionRequest>,
    ) -> Vec<SentinelaResult<Verdict>> {
        let span = sentinela_observability::batch_span!(requests.len());
        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let engine = Arc::clone(self);
                tokio::spawn(
                    async move { engine.decide(request).await }.instrument(span.clone()),
                )
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => std::panic::resume_unwind(e.into_panic()),
            }
        }
        results
    }

    async fn run_semantic(
        &self,
        narrative: String,
        cancel: &CancellationToken,
    ) -> Result<ScoreResult, ScorerError> {
        let fingerprint = self.semantic.fingerprint(&narrative);
        let span = semantic_span!(fingerprint);
        let scorer = Arc::clone(&self.semantic);
        self.run_bounded(
            ScoreSource::Semantic,
            &self.semantic_limiter,
            fingerprint,
            cancel,
            move || scorer.score(&narrative),
        )
        .instrument(span)
        .await
    }

    async fn run_route(
        &self,
        trip: TripRecord,
        history: VehicleHistory,
        cancel: &CancellationToken,
    ) -> Result<ScoreResult, ScorerError> {
        let fingerprint = self.route.fingerprint(&trip, &history);
        let span = route_span!(trip.vehicle_id, history.len());
        let scorer = Arc::clone(&self.route);
        self.run_bounded(
            ScoreSource::Route,
            &self.route_limiter,
            fingerprint,
            cancel,
            move || scorer.score(&trip, &history),
        )
        .instrument(span)
        .await
    }

    /// Cache lookup, then permit + blocking compute under one timeout.
    async fn run_bounded<F>(
        &self,
        source: ScoreSource,
        limiter: &ScorerLimiter,
        fingerprint: String,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<ScoreResult, ScorerError>
    where
        F: FnOnce() -> Result<ScoreResult, InputError> + Send + 'static,
    {
        if let Some(hit) = self.cache.get(source, &fingerprint) {
            return Ok(hit);
        }

        let scorer = limiter.name();
        let timeout = limiter.limits().timeout();
        let bounded = async {
            let slot = limiter.acquire().await?;
            let handle = tokio::task::spawn_blocking(move || {
                let _slot = slot;
                work()
            });
            match handle.await {
                Ok(result) => result.map_err(ScorerError::Invalid),
                Err(e) => Err(ScorerError::Failed {
                    scorer: scorer.to_string(),
                    reason: e.to_string(),
                }),
            }
        };

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ScorerError::Cancelled {
                scorer: scorer.to_string(),
            }),
            timed = tokio::time::timeout(timeout, bounded) => match timed {
                Ok(result) => result,
                Err(_) => Err(ScorerError::TimedOut {
                    scorer: scorer.to_string(),
                    timeout_ms: limiter.limits().timeout_ms,
                }),
            },
        };

        limiter.record(&outcome);
        if let Ok(result) = &outcome {
            self.cache.insert(source, &fingerprint, result.clone());
        }
        outcome
    }

    /// Turn a scorer outcome into a score, degrading everything but bad input.
    fn settle(
        &self,
        source: ScoreSource,
        outcome: Result<ScoreResult, ScorerError>,
    ) -> Result<ScoreResult, InputError> {
        let reason = match outcome {
            Ok(result) => {
                match result.degradation() {
                    Some(reason) => self.record_degradation(source, reason, "no input"),
                    None => {
                        self.tracker().mark_recovered(source.component());
                    }
                }
                return Ok(result);
            }
            Err(ScorerError::Invalid(e)) => return Err(e),
            Err(e) => {
                let reason = match &e {
                    ScorerError::TimedOut { .. } => DegradationReason::TimedOut,
                    ScorerError::Cancelled { .. } => DegradationReason::Cancelled,
                    _ => DegradationReason::Failed,
                };
                self.record_degradation(source, reason, &e.to_string());
                reason
            }
        };
        Ok(ScoreResult::degraded(source, reason))
    }

    fn record_degradation(&self, source: ScoreSource, reason: DegradationReason, detail: &str) {
        tracing::debug!(scorer = source.component(), detail, "scorer degraded");
        self.tracker().record(DegradationEvent::now(
            source.component(),
            reason.as_str(),
            FALLBACK,
        ));
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Drop every cached score.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            semantic: self.semantic_limiter.stats(),
            route: self.route_limiter.stats(),
            cache: self.cache.stats(),
            active_degradations: self.tracker().active_degradations().len(),
        }
    }

    /// Snapshot of recorded degradation events.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().iter().cloned().collect()
    }
}
