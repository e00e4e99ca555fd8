// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::canonical::canonicalize;

/// The canonical form shared by every anagram of a word: its characters
/// lowercased and sorted by code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn of(word: &str) -> Self {
        Self(canonicalize(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The outcome of solving one word against a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub word: String,
    pub key: CanonicalKey,
    /// Matching dictionary words, sorted by code point.
    pub anagrams: Vec<String>,
    /// Distinct words in the dictionary at solve time.
    pub dictionary_size: usize,
}

impl Solution {
    pub fn count(&self) -> usize {
        self.anagrams.len()
    }
}

/// Tally of a dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub lines: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub duplicates: usize,
}
