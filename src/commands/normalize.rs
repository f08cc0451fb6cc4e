//! Plural normalization command

use crate::core::{effective_length, is_plural, matched_rule, singular_form};

/// How one word normalizes
pub struct NormalizeResult {
    pub word: String,
    pub singular: String,
    pub effective_length: usize,
    pub plural: bool,
    /// Name of the rule that decided the word, if any
    pub rule: Option<&'static str>,
}

#[must_use]
pub fn normalize_word(word: &str) -> NormalizeResult {
    NormalizeResult {
        word: word.to_string(),
        singular: singular_form(word),
        effective_length: effective_length(word),
        plural: is_plural(word),
        rule: matched_rule(word).map(|(name, _)| name),
    }
}

#[must_use]
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<NormalizeResult> {
    words.iter().map(|w| normalize_word(w.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_plural() {
        let result = normalize_word("Cities");
        assert_eq!(result.word, "Cities");
        assert_eq!(result.singular, "city");
        assert_eq!(result.effective_length, 4);
        assert!(result.plural);
        assert_eq!(result.rule, Some("irregular"));
    }

    #[test]
    fn normalize_singular() {
        let result = normalize_word("crane");
        assert_eq!(result.singular, "crane");
        assert!(!result.plural);
        assert_eq!(result.rule, None);
    }

    #[test]
    fn normalize_many_keeps_order() {
        let results = normalize_words(&["boxes", "glass"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].singular, "box");
        assert_eq!(results[1].singular, "glass");
    }
}
