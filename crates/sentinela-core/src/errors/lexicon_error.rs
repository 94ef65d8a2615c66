/// Lexicon compilation errors.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid pattern in category '{category}': {reason}")]
    InvalidPattern { category: String, reason: String },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },
}
