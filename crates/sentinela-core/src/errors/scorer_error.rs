use super::InputError;

/// Internal scorer failures.
///
/// The runtime converts every variant except `Invalid` into a degraded
/// score of zero; `Invalid` is re-raised as an [`InputError`].
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    #[error("{scorer} timed out after {timeout_ms}ms")]
    TimedOut { scorer: String, timeout_ms: u64 },

    #[error("{scorer} cancelled")]
    Cancelled { scorer: String },

    #[error("{scorer} failed: {reason}")]
    Failed { scorer: String, reason: String },

    #[error(transparent)]
    Invalid(#[from] InputError),
}
