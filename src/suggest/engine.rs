//! Layered autocomplete candidate generation
//!
//! Pure functions: given the full text, the cursor offset, and a lexicon,
//! produce ranked word-completion candidates and the inline ghost text.
//! Candidate sources are concatenated in a fixed priority order, each
//! internally ordered by its own rule, then de-duplicated (first occurrence
//! wins) and truncated, which bounds per-keystroke cost.

use crate::suggest::bigram::BigramModel;
use crate::suggest::tables;
use crate::util::{current_line, current_word, ghost_remainder, previous_word};

/// Maximum number of candidates offered at once.
pub const MAX_CANDIDATES: usize = 5;

const BIGRAM_LIMIT: usize = 3;
const CONTEXT_LIMIT: usize = 3;
const LEXICON_LIMIT: usize = 3;
const DOCUMENT_LIMIT: usize = 2;

/// Direction for cycling through candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Current word-completion state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// Ranked completion candidates, best first.
    pub candidates: Vec<String>,
    /// Index of the highlighted candidate.
    pub selected: usize,
    /// Inline completion for the selected candidate; empty when the
    /// candidate is not a case-insensitive extension of the current word.
    pub ghost: String,
    /// Byte offset where the in-progress word begins.
    pub word_start: usize,
}

impl SuggestionState {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn selected_candidate(&self) -> Option<&str> {
        self.candidates.get(self.selected).map(String::as_str)
    }

    /// Move the selection, wrapping in both directions, and recompute the
    /// ghost text against the word currently being typed.
    pub fn cycle(&mut self, direction: CycleDirection, word: &str) {
        if self.candidates.is_empty() {
            return;
        }
        let len = self.candidates.len();
        self.selected = match direction {
            CycleDirection::Next => (self.selected + 1) % len,
            CycleDirection::Previous => (self.selected + len - 1) % len,
        };
        self.ghost = ghost_remainder(&self.candidates[self.selected], word).to_string();
    }
}

/// Generate word-completion candidates for the cursor position.
pub fn generate_candidates(text: &str, cursor: usize, lexicon: &[&str]) -> SuggestionState {
    let before = &text[..cursor];
    let line = current_line(before);
    let word = current_word(line);

    if word.is_empty() {
        return SuggestionState::default();
    }

    let previous = previous_word(line).unwrap_or("");
    let mut candidates: Vec<String> = Vec::new();

    // 1. Bigram prediction from the text written so far
    if !previous.is_empty() {
        let model = BigramModel::build(before);
        candidates.extend(model.followers(previous, word, BIGRAM_LIMIT));
    }

    // 2. Static contextual patterns keyed by the previous word
    candidates.extend(
        tables::context_candidates(previous, word, CONTEXT_LIMIT)
            .into_iter()
            .map(String::from),
    );

    // 3. Phrase completions plus line-context rules
    candidates.extend(
        tables::phrase_candidates(line, word)
            .into_iter()
            .map(String::from),
    );

    // 4. Heading templates when the line so far is just the `#` run
    if line.trim() == word && word.starts_with('#') {
        candidates.extend(tables::HEADING_TEMPLATES.iter().map(|t| t.to_string()));
    }

    // 5. Lexicon prefix matches
    candidates.extend(tables::lexicon_candidates(lexicon, word, LEXICON_LIMIT));

    // 6. Words already used elsewhere in the document
    candidates.extend(document_candidates(text, word));

    let candidates = dedup_truncate(candidates, MAX_CANDIDATES);
    if candidates.is_empty() {
        return SuggestionState::default();
    }

    let ghost = ghost_remainder(&candidates[0], word).to_string();
    SuggestionState {
        candidates,
        selected: 0,
        ghost,
        word_start: cursor - word.len(),
    }
}

/// Distinct document words that strictly extend the in-progress word.
///
/// Matching and de-duplication are case-folded, but the token is offered
/// with the casing it has in the document.
fn document_candidates(text: &str, word: &str) -> Vec<String> {
    let curr = word.to_lowercase();
    let word_chars = word.chars().count();
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        if token.chars().count() < 3 {
            continue;
        }
        let folded = token.to_lowercase();
        if !folded.starts_with(&curr) || folded == curr {
            continue;
        }
        if token.chars().count() <= word_chars {
            continue;
        }
        if !seen.contains(&folded) {
            seen.push(folded);
            out.push(token.to_string());
            if out.len() == DOCUMENT_LIMIT {
                break;
            }
        }
    }

    out
}

fn dedup_truncate(candidates: Vec<String>, limit: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(limit);
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
            if unique.len() == limit {
                break;
            }
        }
    }
    unique
}
