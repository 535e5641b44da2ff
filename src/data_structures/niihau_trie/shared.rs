// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`NiihauTrie`].
//!
//! The trie itself assumes one owner. `SharedTrie` puts the whole structure
//! behind a single reader-writer lock: writers are serialized, readers run in
//! parallel, and every operation sees a consistent tree.

use std::sync::Arc;

use parking_lot::RwLock;

use super::NiihauTrie;

/// Cloneable, lock-protected handle to one shared trie.
///
/// Cloning the handle shares the underlying trie; use
/// [`snapshot`](Self::snapshot) for an independent copy.
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<NiihauTrie>>,
}

impl SharedTrie {
    /// Creates a handle to a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: NiihauTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a word, returning `true` if it was not stored before.
    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    /// Checks if `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    /// Returns every stored word that starts with `prefix`, in ascending order.
    pub fn starts_with(&self, prefix: &str) -> Vec<String> {
        self.inner.read().starts_with(prefix)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every word.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns an independent deep copy of the current contents.
    pub fn snapshot(&self) -> NiihauTrie {
        self.inner.read().clone()
    }

    /// Unwraps the trie.
    ///
    /// Moves the trie out when this is the last handle; otherwise the other
    /// handles keep the original and a snapshot is returned.
    pub fn into_inner(self) -> NiihauTrie {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner(),
            Err(shared) => {
                tracing::debug!(
                    handles = Arc::strong_count(&shared),
                    "Trie still shared, returning snapshot"
                );
                // Bound so the read guard is dropped before `shared`.
                let snapshot = shared.read().clone();
                snapshot
            }
        }
    }
}

impl From<NiihauTrie> for SharedTrie {
    fn from(trie: NiihauTrie) -> Self {
        Self::from_trie(trie)
    }
}
