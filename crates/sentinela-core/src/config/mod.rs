pub mod defaults;
mod lexicon_config;
mod logging_config;
mod profile;
mod route_config;
mod runtime_config;
mod semantic_config;
mod sentinela_config;
mod threshold_config;

pub use lexicon_config::{CategoryOverride, LexiconConfig};
pub use logging_config::LoggingConfig;
pub use profile::ConfigProfile;
pub use route_config::RouteConfig;
pub use runtime_config::{RuntimeConfig, ScorerLimits};
pub use semantic_config::{CategoryWeights, SemanticConfig};
pub use sentinela_config::SentinelaConfig;
pub use threshold_config::ThresholdConfig;
