use sentinela_core::models::{ContextFactor, MatchedTerm};
use sentinela_lexicon::builtin;

/// Terms that reveal a threshold-lowering situation.
const TERM_FACTORS: [(&str, ContextFactor); 15] = [
    ("sem documento", ContextFactor::MissingDocuments),
    ("sem documentos", ContextFactor::MissingDocuments),
    ("sem identificação", ContextFactor::MissingDocuments),
    ("sem identidade", ContextFactor::MissingDocuments),
    ("tentou fugir", ContextFactor::FlightAttempt),
    ("fugiu", ContextFactor::FlightAttempt),
    ("fuga", ContextFactor::FlightAttempt),
    ("evadiu", ContextFactor::FlightAttempt),
    ("local ermo", ContextFactor::RemoteLocation),
    ("local conhecido pelo tráfico", ContextFactor::KnownCrimeLocation),
    ("ponto conhecido", ContextFactor::KnownCrimeLocation),
    ("zona de tráfico", ContextFactor::KnownCrimeLocation),
    ("boca de fumo ativa", ContextFactor::KnownCrimeLocation),
    ("madrugada", ContextFactor::SuspiciousHour),
    ("horário suspeito", ContextFactor::SuspiciousHour),
];

/// Context factors implied by matched terms, in encounter order.
pub(crate) fn derive(matched: &[MatchedTerm]) -> Vec<ContextFactor> {
    let mut factors = Vec::new();
    for m in matched {
        let factor = if m.category == builtin::EVASION_INDICATORS {
            Some(ContextFactor::EvasiveBehavior)
        } else {
            TERM_FACTORS
                .iter()
                .find(|(term, _)| *term == m.term)
                .map(|(_, f)| *f)
        };
        if let Some(f) = factor {
            if !factors.contains(&f) {
                factors.push(f);
            }
        }
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(term: &str, category: &str) -> MatchedTerm {
        MatchedTerm {
            term: term.to_string(),
            category: category.to_string(),
            contribution: 0.1,
        }
    }

    #[test]
    fn evasion_category_implies_evasive_behavior() {
        let factors = derive(&[hit("sei lá", builtin::EVASION_INDICATORS)]);
        assert_eq!(factors, vec![ContextFactor::EvasiveBehavior]);
    }

    #[test]
    fn factors_follow_encounter_order_without_duplicates() {
        let factors = derive(&[
            hit("tentou fugir", builtin::CRIMINAL_CONTEXTS),
            hit("sem documento", builtin::CRIMINAL_CONTEXTS),
            hit("fuga", builtin::BEHAVIORAL_INDICATORS),
        ]);
        assert_eq!(
            factors,
            vec![ContextFactor::FlightAttempt, ContextFactor::MissingDocuments]
        );
    }

    #[test]
    fn plural_and_identity_variants_imply_missing_documents() {
        for term in ["sem documentos", "sem identidade"] {
            let factors = derive(&[hit(term, builtin::CRIMINAL_CONTEXTS)]);
            assert_eq!(factors, vec![ContextFactor::MissingDocuments], "{term}");
        }
    }

    #[test]
    fn plain_critical_terms_imply_nothing() {
        assert!(derive(&[hit("cocaína", builtin::CRITICAL_KEYWORDS)]).is_empty());
    }
}
