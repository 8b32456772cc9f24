//! Undo/redo history for the edit session
//!
//! An ordered sequence of full text snapshots with a history cursor. A new
//! snapshot truncates any redo tail beyond the cursor; the oldest entry is
//! evicted once the cap is exceeded, clamping the cursor so it stays valid.

/// Default maximum number of snapshots kept.
pub const DEFAULT_HISTORY_CAP: usize = 50;

/// Snapshot history with a movable cursor.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: Vec<String>,
    cursor: usize,
    cap: usize,
}

impl SnapshotHistory {
    /// Create a history seeded with the initial text as its first snapshot.
    pub fn new(initial: &str) -> Self {
        Self::with_cap(initial, DEFAULT_HISTORY_CAP)
    }

    pub fn with_cap(initial: &str, cap: usize) -> Self {
        assert!(cap >= 1, "history cap must be at least 1");
        Self {
            snapshots: vec![initial.to_string()],
            cursor: 0,
            cap,
        }
    }

    /// Append a settled snapshot, truncating the redo tail.
    ///
    /// Recording the text already at the cursor is a no-op, so a debounce
    /// firing after an undo-neutral sequence adds nothing.
    pub fn record(&mut self, text: &str) {
        if self.snapshots[self.cursor] == text {
            return;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(text.to_string());
        if self.snapshots.len() > self.cap {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. Returns the restored text, or `None` at the
    /// oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot. Returns the restored text, or `None` at
    /// the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drop everything and reseed with `text` (e.g. after loading a
    /// different document).
    pub fn reset(&mut self, text: &str) {
        self.snapshots.clear();
        self.snapshots.push(text.to_string());
        self.cursor = 0;
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &str {
        &self.snapshots[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
