//! Map-Reduce Data Types
//!
//! The values that flow through a run: the immutable input `Document`, the
//! `Chunk`s handed to workers, the `FrequencyTable`s they produce and the
//! `RankedEntry` sequence that comes out the other end.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The full input text. Cheap to clone, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: Arc<str>,
}

impl Document {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A contiguous slice of the document, owned by the one worker that counts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk in document order.
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Token -> occurrence count.
///
/// Used both for the partial result of a single chunk and for the merged total.
/// Counts are unsigned, so they can never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(HashMap<String, u64>);

impl FrequencyTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Adds one occurrence of `token`.
    pub fn record(&mut self, token: impl Into<String>) {
        self.add(token, 1);
    }

    /// Adds `count` occurrences of `token`.
    pub fn add(&mut self, token: impl Into<String>, count: u64) {
        *self.0.entry(token.into()).or_insert(0) += count;
    }

    pub fn get(&self, token: &str) -> u64 {
        self.0.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Key-wise sum of two tables. Associative and commutative; the empty
    /// table is the identity.
    pub fn merge(self, other: FrequencyTable) -> FrequencyTable {
        // Fold the smaller table into the larger one.
        let (mut into, from) = if self.0.len() >= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (token, count) in from.0 {
            into.add(token, count);
        }
        into
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(tokens: I) -> Self {
        let mut table = FrequencyTable::new();
        for token in tokens {
            table.record(token);
        }
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = std::collections::hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Summary of a complete run, handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub parallelism: usize,
    pub top_n: usize,
    /// Sum of all counts in the merged table.
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    pub ranking: Vec<RankedEntry>,
}
