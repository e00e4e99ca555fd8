// File: src/core/shared.rs
use crate::core::index::AnagramIndex;
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe handle to one [`AnagramIndex`].
///
/// Clones share the same index. Inserts take the write lock, lookups the
/// read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<AnagramIndex>>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    pub fn load_many<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().load_many(words)
    }

    pub fn find_anagrams(&self, word: &str, exclude_self: bool) -> Vec<String> {
        self.inner.read().find_anagrams(word, exclude_self)
    }

    pub fn find_anagrams_strict(&self, word: &str, exclude_self: bool) -> Result<Vec<String>> {
        self.inner.read().find_anagrams_strict(word, exclude_self)
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Runs `f` against the index under the read lock.
    pub fn with_index<R>(&self, f: impl FnOnce(&AnagramIndex) -> R) -> R {
        f(&*self.inner.read())
    }
}

impl From<AnagramIndex> for SharedIndex {
    fn from(index: AnagramIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }
}
