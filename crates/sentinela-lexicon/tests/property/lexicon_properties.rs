use proptest::prelude::*;
use sentinela_lexicon::builtin;
use sentinela_lexicon::{normalize, truncate_chars, LexiconSet};

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,200}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn truncate_is_a_bounded_prefix(text in "\\PC{0,200}", max in 0usize..250) {
        let cut = truncate_chars(&text, max);
        prop_assert!(text.starts_with(cut));
        prop_assert!(cut.chars().count() <= max);
        prop_assert_eq!(cut.chars().count(), text.chars().count().min(max));
    }

    #[test]
    fn every_match_is_a_known_term(words in prop::collection::vec("[a-zçãéíóú ]{0,12}", 0..20)) {
        let lexicon = LexiconSet::builtin().unwrap();
        let critical = lexicon.category(builtin::CRITICAL_KEYWORDS).unwrap();
        let text = normalize(&words.join(" droga "));
        for hit in critical.find_all(&text) {
            prop_assert!(critical.set().terms.contains(&hit.term));
        }
    }
}
