//! EditSession - the controller owning text, cursor, history, and the
//! suggestion state machines.
//!
//! Single logical writer: every mutation funnels through this type, which
//! recomputes the derived suggestion/trigger state synchronously and
//! schedules the debounced history commit. Undo/redo replay runs under the
//! `Replaying` mode so the text updates it causes never enqueue snapshots.

use std::time::{Duration, Instant};

use crate::config::EditorConfig;
use crate::session::format::{apply_format, FormatKind, Span};
use crate::session::history::SnapshotHistory;
use crate::session::keys::{Key, KeyDisposition, KeyEvent};
use crate::suggest::{
    detect_reference_trigger, generate_candidates, spell_check, CycleDirection, ReferenceItem,
    ReferenceTrigger, SpellIssue, SuggestionState, LEXICON,
};
use crate::util::{current_line, current_word};

/// Delay before a text state is considered settled and committed to
/// history. Resets on every edit, so rapid keystrokes coalesce into one
/// snapshot.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Lifecycle of the session between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// At rest; current text matches the latest history snapshot intent.
    Idle,
    /// Edits in flight, history commit pending.
    Typing,
    /// Undo/redo replay in progress; history recording suppressed.
    Replaying,
}

/// An in-memory editing session over one document.
#[derive(Debug)]
pub struct EditSession {
    text: String,
    cursor: usize,
    mode: SessionMode,
    history: SnapshotHistory,
    debounce: Duration,
    commit_deadline: Option<Instant>,
    suggestions: SuggestionState,
    trigger: Option<ReferenceTrigger>,
    lexicon: &'static [&'static str],
}

impl EditSession {
    /// Create a session seeded with `text`; the seed becomes the first
    /// history snapshot.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
            mode: SessionMode::Idle,
            history: SnapshotHistory::new(text),
            debounce: DEFAULT_DEBOUNCE,
            commit_deadline: None,
            suggestions: SuggestionState::default(),
            trigger: None,
            lexicon: LEXICON,
        }
    }

    pub fn with_config(text: &str, config: &EditorConfig) -> Self {
        let mut session = Self::new(text);
        session.debounce = Duration::from_millis(config.debounce_ms);
        session.history = SnapshotHistory::with_cap(text, config.history_cap);
        session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn ghost_text(&self) -> &str {
        &self.suggestions.ghost
    }

    pub fn reference_trigger(&self) -> Option<&ReferenceTrigger> {
        self.trigger.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.commit_deadline.is_some()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn spell_issues(&self) -> Vec<SpellIssue> {
        spell_check(&self.text, self.lexicon)
    }

    /// Replace text and cursor after a keystroke (or any shell-side edit).
    ///
    /// Suggestion and trigger state update synchronously; the history
    /// commit is debounced and must be driven via [`EditSession::poll`].
    pub fn apply_edit(&mut self, text: String, cursor: usize, now: Instant) {
        self.set_content(text, cursor);
        if self.mode != SessionMode::Replaying {
            self.mode = SessionMode::Typing;
            self.commit_deadline = Some(now + self.debounce);
        }
    }

    /// Move the cursor without changing text (mouse click, arrow keys).
    /// Recomputes suggestions and the reference trigger for the new spot.
    pub fn move_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_to_boundary(&self.text, cursor);
        self.refresh_derived();
    }

    /// Fire the pending history commit if its deadline has passed.
    /// Returns true when a snapshot was recorded.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.commit_deadline {
            Some(deadline) if now >= deadline => {
                self.commit_deadline = None;
                self.mode = SessionMode::Idle;
                self.history.record(&self.text);
                tracing::debug!(chars = self.text.len(), "history snapshot committed");
                true
            }
            _ => false,
        }
    }

    /// Commit the current text immediately (e.g. before saving).
    pub fn flush(&mut self) {
        self.commit_deadline = None;
        self.mode = SessionMode::Idle;
        self.history.record(&self.text);
    }

    /// Drop any pending commit without recording it (document switch,
    /// editor teardown).
    pub fn cancel_pending(&mut self) {
        self.commit_deadline = None;
        self.mode = SessionMode::Idle;
    }

    /// Replace the session content wholesale (loading a document or
    /// importing a file). History restarts from the loaded text.
    pub fn load(&mut self, text: &str) {
        self.cancel_pending();
        self.text = text.to_string();
        self.cursor = text.len();
        self.history.reset(text);
        self.refresh_derived();
    }

    /// Step back one settled snapshot. Silent no-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(restored) = self.history.undo().map(str::to_string) else {
            return false;
        };
        self.mode = SessionMode::Replaying;
        self.commit_deadline = None;
        let cursor = restored.len();
        self.set_content(restored, cursor);
        self.mode = SessionMode::Idle;
        tracing::debug!("undo");
        true
    }

    /// Step forward one settled snapshot. Silent no-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(restored) = self.history.redo().map(str::to_string) else {
            return false;
        };
        self.mode = SessionMode::Replaying;
        self.commit_deadline = None;
        let cursor = restored.len();
        self.set_content(restored, cursor);
        self.mode = SessionMode::Idle;
        tracing::debug!("redo");
        true
    }

    /// Apply a toolbar formatting action over `selection`.
    pub fn insert_formatting(&mut self, kind: FormatKind, selection: Span, now: Instant) {
        let (text, cursor) = apply_format(&self.text, kind, selection);
        self.apply_edit(text, cursor, now);
    }

    /// Replace the active trigger span (`@` through cursor) with a
    /// markdown link that opens in a new browsing context. Silent no-op
    /// when no trigger is active.
    pub fn insert_reference_link(&mut self, item: &ReferenceItem, now: Instant) -> bool {
        let Some(trigger) = self.trigger.take() else {
            tracing::debug!("reference insert ignored: no active trigger");
            return false;
        };

        let link = format!("[{}]({}){{:target=\"_blank\"}}", item.title, item.url);
        let mut text = String::with_capacity(self.text.len() + link.len());
        text.push_str(&self.text[..trigger.anchor]);
        text.push_str(&link);
        text.push_str(&self.text[self.cursor..]);
        let cursor = trigger.anchor + link.len();

        self.apply_edit(text, cursor, now);
        // The inserted link must not re-trigger or ghost-complete
        self.trigger = None;
        self.suggestions.clear();
        true
    }

    /// Splice the ghost text in at the cursor. Valid only while a ghost
    /// suggestion is visible.
    pub fn accept_ghost(&mut self, now: Instant) -> bool {
        if self.suggestions.ghost.is_empty() {
            return false;
        }
        let ghost = self.suggestions.ghost.clone();
        let mut text = String::with_capacity(self.text.len() + ghost.len());
        text.push_str(&self.text[..self.cursor]);
        text.push_str(&ghost);
        text.push_str(&self.text[self.cursor..]);
        let cursor = self.cursor + ghost.len();

        self.apply_edit(text, cursor, now);
        self.suggestions.clear();
        true
    }

    /// Replace the in-progress word with the selected candidate.
    pub fn commit_selected(&mut self, now: Instant) -> bool {
        let Some(candidate) = self.suggestions.selected_candidate().map(str::to_string) else {
            return false;
        };
        let start = self.suggestions.word_start;
        let mut text = String::with_capacity(self.text.len() + candidate.len());
        text.push_str(&self.text[..start]);
        text.push_str(&candidate);
        text.push_str(&self.text[self.cursor..]);
        let cursor = start + candidate.len();

        self.apply_edit(text, cursor, now);
        self.suggestions.clear();
        true
    }

    /// Rotate the candidate selection (wraps both directions) and refresh
    /// the ghost text. Text is not mutated.
    pub fn cycle_suggestion(&mut self, direction: CycleDirection) {
        let word = current_word(current_line(&self.text[..self.cursor])).to_string();
        self.suggestions.cycle(direction, &word);
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
    }

    /// Mediate a key press between the reference-suggestion UI, word
    /// completion, and undo/redo chords. First matching rule wins.
    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) -> KeyDisposition {
        // Reference trigger owns the keyboard while active
        if self.trigger.is_some() {
            if event.key == Key::Escape {
                self.trigger = None;
                return KeyDisposition::Consumed;
            }
            return KeyDisposition::DeferToReference;
        }

        // Ghost acceptance
        if !self.suggestions.ghost.is_empty()
            && matches!(event.key, Key::Tab | Key::ArrowRight)
        {
            self.accept_ghost(now);
            return KeyDisposition::Consumed;
        }

        // Candidate list navigation
        if !self.suggestions.is_empty() && matches!(event.key, Key::ArrowDown | Key::ArrowUp) {
            let direction = if event.key == Key::ArrowDown {
                CycleDirection::Next
            } else {
                CycleDirection::Previous
            };
            self.cycle_suggestion(direction);
            return KeyDisposition::Consumed;
        }

        // Commit the highlighted candidate
        if !self.suggestions.is_empty() && event.key == Key::Tab {
            self.commit_selected(now);
            return KeyDisposition::Consumed;
        }

        // Escape clears whatever suggestion state remains
        if event.key == Key::Escape && !self.suggestions.is_empty() {
            self.suggestions.clear();
            return KeyDisposition::Consumed;
        }

        // Undo/redo chords
        if event.mods.command() {
            match event.key {
                Key::Char('z') | Key::Char('Z') if !event.mods.shift => {
                    self.undo();
                    return KeyDisposition::Consumed;
                }
                Key::Char('z') | Key::Char('Z') => {
                    self.redo();
                    return KeyDisposition::Consumed;
                }
                Key::Char('y') | Key::Char('Y') => {
                    self.redo();
                    return KeyDisposition::Consumed;
                }
                _ => {}
            }
        }

        KeyDisposition::PassThrough
    }

    fn set_content(&mut self, text: String, cursor: usize) {
        self.cursor = clamp_to_boundary(&text, cursor);
        self.text = text;
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.trigger = detect_reference_trigger(&self.text, self.cursor);
        if self.trigger.is_some() {
            // Reference lookup takes over; word completion stands down
            self.suggestions.clear();
        } else {
            self.suggestions = generate_candidates(&self.text, self.cursor, self.lexicon);
        }
    }
}

fn clamp_to_boundary(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
