//! Shared utilities

mod text;

pub use text::{
    current_line, current_word, ghost_remainder, previous_word, starts_with_ignore_case, words,
};
