/// External statistical classifier consumed as an opaque probability.
///
/// The engine works identically with no source installed.
pub trait IProbabilitySource: Send + Sync {
    /// Probability in [0, 1] that the narrative is suspect, or `None` if unavailable.
    fn probability(&self, narrative: &str) -> Option<f64>;

    /// Identifier of the underlying model; part of the semantic cache key.
    fn model_id(&self) -> &str;
}
