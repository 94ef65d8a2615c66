/// Invalid caller input. Surfaced to the caller; no partial verdict is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("narrative too short: {length} characters, minimum {minimum}")]
    NarrativeTooShort { length: usize, minimum: usize },

    #[error("malformed trip record: {reason}")]
    MalformedTrip { reason: String },

    #[error("history belongs to vehicle '{found}', expected '{expected}'")]
    HistoryMismatch { expected: String, found: String },
}
