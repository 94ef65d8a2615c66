use sentinela_core::config::SemanticConfig;
use sentinela_core::errors::InputError;
use sentinela_lexicon::{normalize, truncate_chars};

/// Validate length, truncate to the configured maximum, and normalize.
///
/// Text shorter than `min_text_length` (after trimming) is rejected. Text
/// longer than `max_text_length` is cut at that many characters.
pub fn prepare_narrative(narrative: &str, config: &SemanticConfig) -> Result<String, InputError> {
    let trimmed = narrative.trim();
    let length = trimmed.chars().count();
    if length < config.min_text_length {
        return Err(InputError::NarrativeTooShort {
            length,
            minimum: config.min_text_length,
        });
    }
    Ok(normalize(truncate_chars(trimmed, config.max_text_length)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_rejected() {
        let err = prepare_narrative("  curto  ", &SemanticConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::NarrativeTooShort {
                length: 5,
                minimum: 20
            }
        );
    }

    #[test]
    fn long_text_is_truncated_not_rejected() {
        let config = SemanticConfig {
            max_text_length: 30,
            ..Default::default()
        };
        let text = "Fiscalização de rotina sem qualquer ocorrência relevante";
        let prepared = prepare_narrative(text, &config).unwrap();
        assert_eq!(prepared.chars().count(), 30);
        assert!(prepared.starts_with("fiscalização de rotina"));
    }

    #[test]
    fn truncation_is_deterministic() {
        let config = SemanticConfig {
            max_text_length: 25,
            ..Default::default()
        };
        let text = "Denúncia anônima informou sobre tráfico de drogas";
        assert_eq!(
            prepare_narrative(text, &config).unwrap(),
            prepare_narrative(text, &config).unwrap()
        );
    }
}
