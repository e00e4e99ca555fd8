// --- File: src/core/index.rs
use crate::core::canonical::{canonicalize, is_valid};
use crate::core::types::CanonicalKey;
use crate::error::{AnagramError, Result};
use std::collections::{BTreeSet, HashMap};

/// Maps each canonical key to the dictionary words that share it.
///
/// Buckets are ordered sets, so exact duplicates collapse and lookups come
/// back sorted by code point.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    buckets: HashMap<String, BTreeSet<String>>,
    len: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word to its bucket. Invalid words are skipped without error.
    /// Returns `true` only if the word was not stored before.
    pub fn insert(&mut self, word: &str) -> bool {
        if !is_valid(word) {
            log::trace!("index: skipping invalid word {:?}", word);
            return false;
        }
        let inserted = self
            .buckets
            .entry(canonicalize(word))
            .or_default()
            .insert(word.to_string());
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Inserts every word in order. Returns how many were newly stored.
    pub fn load_many<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref()) {
                added += 1;
            }
        }
        added
    }

    /// Stored words sharing `word`'s canonical key.
    ///
    /// With `exclude_self`, a stored word equal to `word` (exact,
    /// case-sensitive text) is left out. An unknown key gives an empty list,
    /// and so does a query that fails `is_valid`. Lowercasing can turn a
    /// letter into a combining mark ('İ' becomes "i\u{307}"), so an invalid
    /// query may still share a key with a stored word.
    pub fn find_anagrams(&self, word: &str, exclude_self: bool) -> Vec<String> {
        if !is_valid(word) {
            return Vec::new();
        }
        match self.buckets.get(&canonicalize(word)) {
            Some(bucket) => bucket
                .iter()
                .filter(|stored| !(exclude_self && stored.as_str() == word))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Like [`find_anagrams`](Self::find_anagrams) but rejects a query that
    /// fails `is_valid`.
    pub fn find_anagrams_strict(&self, word: &str, exclude_self: bool) -> Result<Vec<String>> {
        if !is_valid(word) {
            return Err(AnagramError::invalid(word));
        }
        Ok(self.find_anagrams(word, exclude_self))
    }

    pub fn find_by_key(&self, key: &CanonicalKey) -> Vec<String> {
        self.buckets
            .get(key.as_str())
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&canonicalize(word))
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// Number of distinct stored words.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct canonical keys.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<S: AsRef<str>> Extend<S> for AnagramIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.load_many(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnagramIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.load_many(iter);
        index
    }
}
