//! Referenceable document catalog
//!
//! The catalog is supplied by an external content listing; here it is a
//! static list with a client-side substring filter. No fuzzy matching, no
//! ranking beyond order of appearance.

use serde::{Deserialize, Serialize};

/// Maximum number of reference suggestions shown at once.
pub const MAX_REFERENCE_RESULTS: usize = 5;

/// A referenceable item from the content listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub title: String,
    pub slug: String,
    pub url: String,
}

impl ReferenceItem {
    pub fn new(title: impl Into<String>, slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            url: url.into(),
        }
    }
}

/// An ordered list of referenceable items.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    items: Vec<ReferenceItem>,
}

impl ReferenceCatalog {
    pub fn new(items: Vec<ReferenceItem>) -> Self {
        Self { items }
    }

    /// Built-in sample entries, useful for demos and tests.
    pub fn with_samples() -> Self {
        Self::new(vec![
            ReferenceItem::new(
                "Getting started with Markdown",
                "getting-started-markdown",
                "https://example.com/articles/getting-started-markdown",
            ),
            ReferenceItem::new(
                "Keyboard shortcuts reference",
                "keyboard-shortcuts",
                "https://example.com/articles/keyboard-shortcuts",
            ),
            ReferenceItem::new(
                "Publishing your first article",
                "publishing-first-article",
                "https://example.com/articles/publishing-first-article",
            ),
        ])
    }

    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filter items by query: empty query returns the first entries in
    /// catalog order; otherwise a case-insensitive substring match against
    /// title or slug. At most [`MAX_REFERENCE_RESULTS`] results.
    pub fn filter(&self, query: &str) -> Vec<&ReferenceItem> {
        if query.trim().is_empty() {
            return self.items.iter().take(MAX_REFERENCE_RESULTS).collect();
        }

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.slug.to_lowercase().contains(&needle)
            })
            .take(MAX_REFERENCE_RESULTS)
            .collect()
    }
}
