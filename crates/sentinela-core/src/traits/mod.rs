mod probability_source;
mod route_scorer;
mod semantic_scorer;

pub use probability_source::IProbabilitySource;
pub use route_scorer::IRouteScorer;
pub use semantic_scorer::ISemanticScorer;
