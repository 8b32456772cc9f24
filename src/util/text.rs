//! Text extraction helpers for the suggestion engine and edit session
//!
//! All functions operate on the prefix of the buffer before the cursor;
//! offsets are byte offsets on char boundaries.

/// The portion of the cursor's line that lies before the cursor.
pub fn current_line(before_cursor: &str) -> &str {
    match before_cursor.rfind('\n') {
        Some(idx) => &before_cursor[idx + 1..],
        None => before_cursor,
    }
}

/// The in-progress word: the trailing run of non-whitespace characters
/// on the current line. Empty when the cursor follows whitespace.
pub fn current_word(line: &str) -> &str {
    line.rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
}

/// The token immediately before the in-progress word on the same line.
pub fn previous_word(line: &str) -> Option<&str> {
    line.split_whitespace().rev().nth(1)
}

/// Iterate the lowercased word tokens of `text` (maximal alphanumeric runs).
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
}

/// Case-insensitive prefix test.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut sc = s.chars().flat_map(char::to_lowercase);
    let mut pc = prefix.chars().flat_map(char::to_lowercase);
    loop {
        match (pc.next(), sc.next()) {
            (None, _) => return true,
            (Some(p), Some(c)) if p == c => {}
            _ => return false,
        }
    }
}

/// The part of `candidate` that extends `word`, sliced per character so
/// multibyte letters never split. Empty when `candidate` is not a
/// case-insensitive extension of `word`.
pub fn ghost_remainder<'a>(candidate: &'a str, word: &str) -> &'a str {
    if !starts_with_ignore_case(candidate, word) {
        return "";
    }
    let skip = word.chars().count();
    match candidate.char_indices().nth(skip) {
        Some((idx, _)) => &candidate[idx..],
        None => "",
    }
}
