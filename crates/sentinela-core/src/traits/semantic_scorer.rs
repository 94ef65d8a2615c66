use crate::errors::InputError;
use crate::models::ScoreResult;

/// Narrative text to suspicion score.
pub trait ISemanticScorer: Send + Sync {
    /// Score a narrative. Too-short text is an error; too-long text is truncated.
    fn score(&self, narrative: &str) -> Result<ScoreResult, InputError>;

    /// Cheap pre-flight check run before any scheduling or cache lookup.
    fn check(&self, _narrative: &str) -> Result<(), InputError> {
        Ok(())
    }

    /// Cache key material for a narrative. Two inputs with the same key must score identically.
    fn fingerprint(&self, narrative: &str) -> String;
}
