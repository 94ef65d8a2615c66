//! Error handling for Sentinela.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod input_error;
pub mod lexicon_error;
pub mod scorer_error;

pub use config_error::ConfigError;
pub use input_error::InputError;
pub use lexicon_error::LexiconError;
pub use scorer_error::ScorerError;

/// Errors surfaced to callers of the decision engine.
///
/// Only input and configuration failures escape a decision; scorer failures
/// are absorbed into a degraded verdict before they reach this type.
#[derive(Debug, thiserror::Error)]
pub enum SentinelaError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

pub type SentinelaResult<T> = Result<T, SentinelaError>;
