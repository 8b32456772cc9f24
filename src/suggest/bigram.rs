//! Per-document bigram frequency model
//!
//! Built on the fly from the text before the cursor, so the cost of a
//! rebuild is bounded by how much the user has actually written. Follower
//! lookups are sorted by descending frequency with a stable tie-break on
//! first occurrence, so equally frequent followers keep document order.

use std::collections::HashMap;

use crate::util::words;

#[derive(Debug, Clone, Copy)]
struct Follower {
    count: u32,
    first_seen: u32,
}

/// Word-pair frequency map over a text prefix.
#[derive(Debug, Default)]
pub struct BigramModel {
    pairs: HashMap<String, HashMap<String, Follower>>,
}

impl BigramModel {
    /// Build the model from every adjacent word pair in `text`.
    pub fn build(text: &str) -> Self {
        let tokens: Vec<String> = words(text).collect();
        let mut pairs: HashMap<String, HashMap<String, Follower>> = HashMap::new();
        let mut order = 0u32;

        for window in tokens.windows(2) {
            let followers = pairs.entry(window[0].clone()).or_default();
            let follower = followers.entry(window[1].clone()).or_insert_with(|| {
                order += 1;
                Follower {
                    count: 0,
                    first_seen: order,
                }
            });
            follower.count += 1;
        }

        Self { pairs }
    }

    /// Words observed after `previous`, most frequent first, filtered to
    /// those starting with `prefix` (both sides lowercased).
    pub fn followers(&self, previous: &str, prefix: &str, limit: usize) -> Vec<String> {
        let Some(followers) = self.pairs.get(&previous.to_lowercase()) else {
            return Vec::new();
        };

        let prefix = prefix.to_lowercase();
        let mut ranked: Vec<(&String, &Follower)> = followers.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });

        ranked
            .into_iter()
            .map(|(word, _)| word)
            .filter(|word| word.starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
