//! markpad - a markdown authoring engine
//!
//! The core is [`session::EditSession`]: an incremental editing state
//! machine with debounced undo history, inline word completion, and
//! "@"-reference lookup, over plain markdown text. Around it:
//!
//! - [`suggest`]: candidate generation, ghost text, spell check
//! - [`render`]: markdown to HTML preview with staleness tracking
//! - [`store`]: persistent JSON document collection
//! - [`cli`]: command-line access to the store

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod logging;
pub mod render;
pub mod session;
pub mod store;
pub mod suggest;
pub mod util;

pub use config::EditorConfig;
pub use session::{EditSession, FormatKind, Span};
pub use store::{derive_title, Document, DocumentStore};
pub use suggest::{ReferenceCatalog, ReferenceItem, SuggestionState};
