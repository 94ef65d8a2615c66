//! Text normalization shared by every matcher.

/// Lowercase, collapse whitespace runs to one space, trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  Ida   E\tVOLTA\n"), "ida e volta");
        assert_eq!(normalize("Cocaína"), "cocaína");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("apreensão", 8), "apreensã");
        assert_eq!(truncate_chars("pó", 10), "pó");
        assert_eq!(truncate_chars("", 3), "");
    }
}
