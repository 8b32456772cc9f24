//! Basic lexicon spell check
//!
//! Flags words longer than two characters that are absent from the
//! lexicon. A heuristic marker, not a real spell corrector.

use std::collections::HashSet;

/// A flagged word span (byte offsets into the checked text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellIssue {
    pub start: usize,
    pub end: usize,
    pub word: String,
}

/// Scan `text` for words not present in `lexicon`.
pub fn spell_check(text: &str, lexicon: &[&str]) -> Vec<SpellIssue> {
    let known: HashSet<&str> = lexicon.iter().copied().collect();
    let mut issues = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices().chain([(text.len(), ' ')]) {
        if ch.is_alphanumeric() {
            start.get_or_insert(idx);
            continue;
        }
        if let Some(begin) = start.take() {
            let word = &text[begin..idx];
            if word.chars().count() > 2 && !known.contains(word.to_lowercase().as_str()) {
                issues.push(SpellIssue {
                    start: begin,
                    end: idx,
                    word: word.to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::tables::LEXICON;

    #[test]
    fn test_known_words_pass() {
        assert!(spell_check("el editor de markdown", LEXICON).is_empty());
    }

    #[test]
    fn test_unknown_word_flagged() {
        let issues = spell_check("el editr de markdown", LEXICON);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].word, "editr");
        assert_eq!(issues[0].start, 3);
        assert_eq!(issues[0].end, 8);
    }

    #[test]
    fn test_short_words_ignored() {
        // "xy" is unknown but too short to flag
        assert!(spell_check("el xy", LEXICON).is_empty());
    }

    #[test]
    fn test_check_is_case_insensitive() {
        assert!(spell_check("El Editor", LEXICON).is_empty());
    }

    #[test]
    fn test_word_at_end_of_text() {
        let issues = spell_check("el qwerty", LEXICON);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].end, 9);
    }
}
