//! Suggestion engine
//!
//! Pure functions over `(text, cursor)` producing three derived states:
//!
//! - [`ReferenceTrigger`]: "@"-reference lookup detection
//! - [`SuggestionState`]: ranked word-completion candidates + ghost text
//! - [`SpellIssue`] spans from the lexicon spell check
//!
//! Candidate generation layers a per-document bigram model, static
//! contextual/phrase tables, the word lexicon, and document
//! self-completion; see [`engine::generate_candidates`].

mod bigram;
mod catalog;
mod engine;
mod spell;
mod tables;
mod trigger;

pub use bigram::BigramModel;
pub use catalog::{ReferenceCatalog, ReferenceItem, MAX_REFERENCE_RESULTS};
pub use engine::{generate_candidates, CycleDirection, SuggestionState, MAX_CANDIDATES};
pub use spell::{spell_check, SpellIssue};
pub use tables::LEXICON;
pub use trigger::{detect_reference_trigger, ReferenceTrigger, TRIGGER_LOOKBACK};
