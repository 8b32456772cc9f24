//! Toolbar formatting surgery
//!
//! Pure text transformations for the formatting toolbar. Each kind has a
//! deterministic contract:
//!
//! - wrap kinds (bold/italic/strikethrough/code) wrap a non-empty
//!   selection and leave the cursor after the closing delimiter; with an
//!   empty selection they insert the collapsed pair and leave the cursor
//!   between the halves. Re-applying over an already wrapped span nests
//!   the delimiters (`****text****`); there is no unwrap rule.
//! - heading kinds replace any existing `#` run on the current line.
//! - block kinds (list/ordered list/task list/quote) prefix every line of
//!   a multi-line selection; the ordered list numbers lines from 1.
//! - link/image wrap the selection as the link text with a `url`
//!   placeholder target.

/// A formatting action from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Bold,
    Italic,
    Strikethrough,
    Code,
    /// Heading level 1-6.
    Heading(u8),
    List,
    OrderedList,
    TaskList,
    Quote,
    Link,
    Image,
}

/// Byte-offset selection; `start == end` means a collapsed cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn cursor(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Apply a formatting action, returning the new text and cursor offset.
pub fn apply_format(text: &str, kind: FormatKind, selection: Span) -> (String, usize) {
    match kind {
        FormatKind::Bold => wrap(text, selection, "**"),
        FormatKind::Italic => wrap(text, selection, "*"),
        FormatKind::Strikethrough => wrap(text, selection, "~~"),
        FormatKind::Code => wrap(text, selection, "`"),
        FormatKind::Heading(level) => heading(text, selection, level),
        FormatKind::List => block_prefix(text, selection, |_| "- ".to_string()),
        FormatKind::OrderedList => block_prefix(text, selection, |n| format!("{}. ", n + 1)),
        FormatKind::TaskList => block_prefix(text, selection, |_| "- [ ] ".to_string()),
        FormatKind::Quote => block_prefix(text, selection, |_| "> ".to_string()),
        FormatKind::Link => wrap_asymmetric(text, selection, "[", "](url)"),
        FormatKind::Image => wrap_asymmetric(text, selection, "![", "](url)"),
    }
}

fn wrap(text: &str, selection: Span, delimiter: &str) -> (String, usize) {
    wrap_asymmetric(text, selection, delimiter, delimiter)
}

fn wrap_asymmetric(text: &str, selection: Span, open: &str, close: &str) -> (String, usize) {
    let selected = &text[selection.start..selection.end];
    let inserted = format!("{open}{selected}{close}");
    let new_text = splice(text, selection, &inserted);

    let cursor = if selection.is_empty() {
        // Cursor between the halves so typing proceeds inside the markers
        selection.start + open.len()
    } else {
        selection.start + inserted.len()
    };
    (new_text, cursor)
}

fn heading(text: &str, selection: Span, level: u8) -> (String, usize) {
    let level = level.clamp(1, 6) as usize;
    let line_start = text[..selection.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |i| line_start + i);

    // Replace any existing `#` run instead of nesting
    let line = &text[line_start..line_end];
    let stripped = line.trim_start_matches('#').trim_start();
    let new_line = format!("{} {}", "#".repeat(level), stripped);
    let cursor = line_start + new_line.len();

    let mut new_text = String::with_capacity(text.len() + level + 1);
    new_text.push_str(&text[..line_start]);
    new_text.push_str(&new_line);
    new_text.push_str(&text[line_end..]);
    (new_text, cursor)
}

fn block_prefix(
    text: &str,
    selection: Span,
    marker: impl Fn(usize) -> String,
) -> (String, usize) {
    if selection.is_empty() {
        let prefix = marker(0);
        let new_text = splice(text, selection, &prefix);
        return (new_text, selection.start + prefix.len());
    }

    let selected = &text[selection.start..selection.end];
    let prefixed: String = selected
        .split('\n')
        .enumerate()
        .map(|(n, line)| format!("{}{}", marker(n), line))
        .collect::<Vec<_>>()
        .join("\n");
    let cursor = selection.start + prefixed.len();
    (splice(text, selection, &prefixed), cursor)
}

fn splice(text: &str, selection: Span, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..selection.start]);
    out.push_str(replacement);
    out.push_str(&text[selection.end..]);
    out
}
