//! Keyboard event model for the edit session
//!
//! A platform-neutral key representation; presentation shells adapt their
//! native events into [`KeyEvent`] before handing them to the session.

/// A logical key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Tab,
    Enter,
    Escape,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Modifier state accompanying a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Platform command chord: Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key press with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            mods: Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        }
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self {
            key,
            mods: Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            },
        }
    }
}

/// What the session decided about a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The session handled the key; the shell must not process it further.
    Consumed,
    /// The reference-suggestion UI owns this key while the trigger is
    /// active (navigation/selection happens in the shell's list widget).
    DeferToReference,
    /// Not a session concern; normal text input handling applies.
    PassThrough,
}
