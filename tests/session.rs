//! Edit session tests - debounced history, undo/redo, keyboard mediation

use std::time::{Duration, Instant};

use markpad::config::EditorConfig;
use markpad::session::{
    EditSession, FormatKind, Key, KeyDisposition, KeyEvent, SessionMode, Span,
};
use markpad::suggest::ReferenceItem;

const DEBOUNCE: Duration = Duration::from_millis(1000);

/// Poll past the debounce deadline of an edit made at `at`.
fn settle(session: &mut EditSession, at: Instant) -> bool {
    session.poll(at + DEBOUNCE + Duration::from_millis(1))
}

// ========================================================================
// Debounced history commits
// ========================================================================

#[test]
fn test_typing_then_undo_redo_roundtrip() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");

    session.apply_edit("Hola".into(), 4, t0);
    assert!(settle(&mut session, t0));

    let t1 = t0 + Duration::from_secs(5);
    session.apply_edit("Hola mundo".into(), 10, t1);
    assert!(settle(&mut session, t1));

    assert!(session.undo());
    assert_eq!(session.text(), "Hola");
    assert!(session.redo());
    assert_eq!(session.text(), "Hola mundo");
}

#[test]
fn test_rapid_edits_coalesce_into_one_snapshot() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");

    // Four keystrokes 100ms apart: each resets the deadline
    for (i, text) in ["h", "ho", "hol", "hola"].iter().enumerate() {
        let at = t0 + Duration::from_millis(100 * i as u64);
        session.apply_edit(text.to_string(), text.len(), at);
        assert!(!session.poll(at + Duration::from_millis(50)));
    }

    let last = t0 + Duration::from_millis(300);
    assert!(settle(&mut session, last));

    // The whole burst is one undo step back to the seed
    assert!(session.undo());
    assert_eq!(session.text(), "");
    assert!(!session.can_undo());
}

#[test]
fn test_poll_before_deadline_is_noop() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("x".into(), 1, t0);

    assert!(!session.poll(t0 + Duration::from_millis(999)));
    assert_eq!(session.mode(), SessionMode::Typing);
    assert!(session.poll(t0 + Duration::from_millis(1000)));
    assert_eq!(session.mode(), SessionMode::Idle);
}

#[test]
fn test_new_edit_after_undo_truncates_redo() {
    let t0 = Instant::now();
    let mut session = EditSession::new("a");

    session.apply_edit("ab".into(), 2, t0);
    settle(&mut session, t0);
    session.apply_edit("abc".into(), 3, t0);
    settle(&mut session, t0);

    session.undo();
    assert_eq!(session.text(), "ab");
    assert!(session.can_redo());

    session.apply_edit("abX".into(), 3, t0);
    settle(&mut session, t0);
    assert!(!session.can_redo());
    session.undo();
    assert_eq!(session.text(), "ab");
}

#[test]
fn test_history_cap_from_config() {
    let config = EditorConfig {
        history_cap: 5,
        ..EditorConfig::default()
    };
    let t0 = Instant::now();
    let mut session = EditSession::with_config("t0", &config);

    for i in 1..=10 {
        session.apply_edit(format!("t{i}"), 2, t0);
        settle(&mut session, t0);
    }

    // Cap of 5 snapshots leaves 4 undo steps from t10 back to t6
    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 4);
    assert_eq!(session.text(), "t6");
}

#[test]
fn test_undo_cancels_pending_and_schedules_nothing() {
    let t0 = Instant::now();
    let mut session = EditSession::new("a");
    session.apply_edit("ab".into(), 2, t0);
    settle(&mut session, t0);
    session.apply_edit("abc".into(), 3, t0);
    assert!(session.has_pending_commit());

    session.undo();
    // Replayed text never re-arms the debounce
    assert!(!session.has_pending_commit());
    assert!(!settle(&mut session, t0));
}

#[test]
fn test_flush_commits_immediately() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("borrador".into(), 8, t0);
    session.flush();

    assert!(!session.has_pending_commit());
    assert!(session.undo());
    assert_eq!(session.text(), "");
}

// ========================================================================
// Suggestion acceptance
// ========================================================================

#[test]
fn test_accept_ghost_advances_cursor_by_ghost_len() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    let text = "mi borrador uno mi borrador dos mi bo";
    session.apply_edit(text.into(), text.len(), t0);
    assert_eq!(session.ghost_text(), "rrador");

    let cursor_before = session.cursor();
    assert!(session.accept_ghost(t0));
    assert!(session.text().ends_with("mi borrador"));
    assert_eq!(session.cursor(), cursor_before + "rrador".len());
    assert!(session.ghost_text().is_empty());
}

#[test]
fn test_commit_selected_replaces_whole_word() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    let text = "mi borrador uno mi borrador dos mi bo";
    session.apply_edit(text.into(), text.len(), t0);

    assert!(session.commit_selected(t0));
    assert!(session.text().ends_with("mi borrador"));
    assert_eq!(session.cursor(), session.text().len());
}

#[test]
fn test_tab_accepts_ghost() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    let text = "mi borrador uno mi borrador dos mi bo";
    session.apply_edit(text.into(), text.len(), t0);

    let disposition = session.handle_key(KeyEvent::plain(Key::Tab), t0);
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert!(session.text().ends_with("mi borrador"));
}

#[test]
fn test_arrows_cycle_candidates() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("el edi".into(), 6, t0);
    let first = session.suggestions().selected;

    let down = session.handle_key(KeyEvent::plain(Key::ArrowDown), t0);
    assert_eq!(down, KeyDisposition::Consumed);
    assert_ne!(session.suggestions().selected, first);

    let up = session.handle_key(KeyEvent::plain(Key::ArrowUp), t0);
    assert_eq!(up, KeyDisposition::Consumed);
    assert_eq!(session.suggestions().selected, first);
}

#[test]
fn test_escape_dismisses_suggestions() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("el edi".into(), 6, t0);
    assert!(!session.suggestions().is_empty());

    let disposition = session.handle_key(KeyEvent::plain(Key::Escape), t0);
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert!(session.suggestions().is_empty());
    // Text untouched
    assert_eq!(session.text(), "el edi");
}

// ========================================================================
// Reference trigger mediation
// ========================================================================

#[test]
fn test_trigger_defers_keys_to_reference_ui() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("Hola @gu".into(), 8, t0);
    assert!(session.reference_trigger().is_some());

    let down = session.handle_key(KeyEvent::plain(Key::ArrowDown), t0);
    assert_eq!(down, KeyDisposition::DeferToReference);
    let enter = session.handle_key(KeyEvent::plain(Key::Enter), t0);
    assert_eq!(enter, KeyDisposition::DeferToReference);
}

#[test]
fn test_escape_dismisses_trigger() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("Hola @gu".into(), 8, t0);

    let disposition = session.handle_key(KeyEvent::plain(Key::Escape), t0);
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert!(session.reference_trigger().is_none());

    // With the trigger gone, keys flow normally again
    let pass = session.handle_key(KeyEvent::plain(Key::Char('x')), t0);
    assert_eq!(pass, KeyDisposition::PassThrough);
}

#[test]
fn test_insert_reference_link_replaces_trigger_span() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("Hi @jo".into(), 6, t0);
    let item = ReferenceItem::new("Guía de estilo", "guia-estilo", "https://ejemplo.dev/guia");

    assert!(session.insert_reference_link(&item, t0));
    assert_eq!(
        session.text(),
        "Hi [Guía de estilo](https://ejemplo.dev/guia){:target=\"_blank\"}"
    );
    assert_eq!(session.cursor(), session.text().len());
    assert!(session.reference_trigger().is_none());
}

#[test]
fn test_insert_reference_without_trigger_is_noop() {
    let t0 = Instant::now();
    let mut session = EditSession::new("texto normal ");
    let item = ReferenceItem::new("Guía", "guia", "https://ejemplo.dev/guia");

    assert!(!session.insert_reference_link(&item, t0));
    assert_eq!(session.text(), "texto normal ");
}

// ========================================================================
// Undo/redo chords
// ========================================================================

#[test]
fn test_ctrl_z_undoes() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("Hola ".into(), 5, t0);
    settle(&mut session, t0);

    let disposition = session.handle_key(KeyEvent::ctrl(Key::Char('z')), t0);
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert_eq!(session.text(), "");
}

#[test]
fn test_ctrl_shift_z_and_ctrl_y_redo() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    session.apply_edit("Hola ".into(), 5, t0);
    settle(&mut session, t0);
    session.undo();

    session.handle_key(KeyEvent::ctrl_shift(Key::Char('z')), t0);
    assert_eq!(session.text(), "Hola ");

    session.undo();
    session.handle_key(KeyEvent::ctrl(Key::Char('y')), t0);
    assert_eq!(session.text(), "Hola ");
}

#[test]
fn test_plain_typing_passes_through() {
    let t0 = Instant::now();
    let mut session = EditSession::new("");
    let disposition = session.handle_key(KeyEvent::plain(Key::Char('a')), t0);
    assert_eq!(disposition, KeyDisposition::PassThrough);
}

// ========================================================================
// Formatting through the session
// ========================================================================

#[test]
fn test_insert_formatting_schedules_commit() {
    let t0 = Instant::now();
    let mut session = EditSession::new("hola mundo");
    session.insert_formatting(FormatKind::Bold, Span::new(0, 4), t0);

    assert_eq!(session.text(), "**hola** mundo");
    assert!(session.has_pending_commit());
    settle(&mut session, t0);
    session.undo();
    assert_eq!(session.text(), "hola mundo");
}

#[test]
fn test_load_replaces_document_and_history() {
    let t0 = Instant::now();
    let mut session = EditSession::new("viejo");
    session.apply_edit("viejo más".into(), 9, t0);
    settle(&mut session, t0);

    session.load("# Documento nuevo");
    assert_eq!(session.text(), "# Documento nuevo");
    assert!(!session.can_undo());
    assert!(!session.can_redo());
    assert_eq!(session.word_count(), 3);
}
