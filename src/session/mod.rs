//! Edit session: text, cursor, undo history, formatting, and keyboard
//! mediation. [`EditSession`] is the single logical writer over a
//! document's text; everything else here is the pure machinery it drives.

mod format;
mod history;
mod keys;
mod state;

pub use format::{apply_format, FormatKind, Span};
pub use history::{SnapshotHistory, DEFAULT_HISTORY_CAP};
pub use keys::{Key, KeyDisposition, KeyEvent, Modifiers};
pub use state::{EditSession, SessionMode, DEFAULT_DEBOUNCE};
