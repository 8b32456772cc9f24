//! "@"-reference trigger detection
//!
//! Typing `@` switches the editor into catalog-lookup mode. The trigger is
//! active while an unescaped `@` sits within a bounded lookback window of
//! the cursor with no whitespace in between.

/// How far back (in characters) to scan for the triggering `@`.
///
/// Bounding the scan keeps trigger detection O(1) per keystroke on large
/// documents.
pub const TRIGGER_LOOKBACK: usize = 50;

/// Active reference-lookup state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrigger {
    /// Text typed between the `@` and the cursor; empty means "show all".
    pub query: String,
    /// Byte offset of the triggering `@`.
    pub anchor: usize,
}

/// Find the reference trigger for the cursor position, if any.
///
/// Scans backward from `cursor` for the nearest unescaped `@`, no further
/// than [`TRIGGER_LOOKBACK`] characters. Whitespace between the `@` and the
/// cursor deactivates the trigger; a `\`-escaped `@` is skipped and the
/// scan continues leftward.
pub fn detect_reference_trigger(text: &str, cursor: usize) -> Option<ReferenceTrigger> {
    let before = &text[..cursor];
    let mut distance = 0;

    for (idx, ch) in before.char_indices().rev() {
        distance += 1;
        if distance > TRIGGER_LOOKBACK {
            return None;
        }
        if ch != '@' {
            continue;
        }
        if before[..idx].ends_with('\\') {
            continue;
        }
        let query = &before[idx + 1..];
        if query.chars().any(char::is_whitespace) {
            return None;
        }
        return Some(ReferenceTrigger {
            query: query.to_string(),
            anchor: idx,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_with_query() {
        let text = "see @art";
        let trigger = detect_reference_trigger(text, text.len()).unwrap();
        assert_eq!(trigger.query, "art");
        assert_eq!(trigger.anchor, 4);
    }

    #[test]
    fn test_bare_at_shows_all() {
        let text = "see @";
        let trigger = detect_reference_trigger(text, text.len()).unwrap();
        assert_eq!(trigger.query, "");
    }

    #[test]
    fn test_space_breaks_trigger() {
        let text = "see @art icle";
        assert!(detect_reference_trigger(text, text.len()).is_none());
    }

    #[test]
    fn test_newline_breaks_trigger() {
        let text = "see @art\nicle";
        assert!(detect_reference_trigger(text, text.len()).is_none());
    }

    #[test]
    fn test_no_at_symbol() {
        assert!(detect_reference_trigger("plain text", 10).is_none());
    }

    #[test]
    fn test_at_beyond_lookback_window() {
        let mut text = String::from("@");
        text.push_str(&"x".repeat(TRIGGER_LOOKBACK));
        assert!(detect_reference_trigger(&text, text.len()).is_none());
    }

    #[test]
    fn test_at_exactly_at_lookback_edge() {
        let mut text = String::from("@");
        text.push_str(&"x".repeat(TRIGGER_LOOKBACK - 1));
        let trigger = detect_reference_trigger(&text, text.len()).unwrap();
        assert_eq!(trigger.anchor, 0);
    }

    #[test]
    fn test_escaped_at_is_skipped() {
        let text = r"mail\@host";
        assert!(detect_reference_trigger(text, text.len()).is_none());
    }

    #[test]
    fn test_escaped_at_does_not_mask_earlier_trigger() {
        let text = r"@a\@b";
        let trigger = detect_reference_trigger(text, text.len()).unwrap();
        assert_eq!(trigger.anchor, 0);
        assert_eq!(trigger.query, r"a\@b");
    }

    #[test]
    fn test_nearest_at_wins() {
        let text = "@first@second";
        let trigger = detect_reference_trigger(text, text.len()).unwrap();
        assert_eq!(trigger.query, "second");
        assert_eq!(trigger.anchor, 6);
    }

    #[test]
    fn test_whitespace_before_nearest_at_is_irrelevant() {
        // Only whitespace between the @ and the cursor deactivates; an
        // earlier @ past a space plays no part.
        let text = "@first @second";
        let trigger = detect_reference_trigger(text, text.len()).unwrap();
        assert_eq!(trigger.query, "second");
        assert_eq!(trigger.anchor, 7);
    }

    #[test]
    fn test_cursor_mid_text() {
        let text = "see @article more";
        // Cursor right after "@art"
        let trigger = detect_reference_trigger(text, 8).unwrap();
        assert_eq!(trigger.query, "art");
    }
}
