// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! This module provides an in-memory prefix tree for storing words, answering
//! exact-membership queries and enumerating every stored word that shares a
//! given prefix.
//!
//! # Key Features
//!
//! * Strict ownership tree: every node owns its children, nothing is shared
//! * Value semantics: `Clone` deep-copies, [`NiihauTrie::take`] moves in O(1)
//! * O(1) `len`, maintained incrementally on insert
//! * Deterministic enumeration in ascending lexicographic order
//! * No recursion over the node graph, so arbitrarily long words are safe
//!
//! # Character Units
//!
//! A character unit is one `char`. Words are `&str`, and insertion, lookup and
//! prefix enumeration all split them with [`str::chars`]. No grapheme
//! segmentation is performed.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::niihau_trie::NiihauTrie;
//!
//! let mut trie = NiihauTrie::new();
//! trie.insert("cat");
//! trie.insert("catalogue");
//! trie.insert("car");
//!
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("ca"));
//! assert_eq!(trie.starts_with("cat"), vec!["cat", "catalogue"]);
//! ```
//!
//! # Concurrency
//!
//! The trie assumes a single owner. [`SharedTrie`] adds a reader-writer lock
//! around it for callers that need to share one dictionary between threads.

mod error;
mod iter;
mod loader;
mod node;
mod shared;

#[cfg(test)]
mod tests;

use std::fmt;

pub use error::NiihauTrieError;
pub use iter::Words;
pub use loader::{LoadStats, LoaderOptions, WordListLoader};
pub use shared::SharedTrie;
use node::TrieNode;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is a prefix tree over `char` sequences.
///
/// A trie whose contents were moved out with [`take`](Self::take) or released
/// with [`clear`](Self::clear) is *vacant*: it owns no root node, but behaves
/// exactly like a freshly constructed empty trie and accepts new words.
pub struct NiihauTrie {
    /// The root node, `None` while the trie is vacant
    root: Option<TrieNode>,

    /// Number of stored words
    count: usize,

    /// Number of allocated nodes, root included
    nodes: usize,
}

impl NiihauTrie {
    /// Creates a new trie holding a single empty root node.
    pub fn new() -> Self {
        Self {
            root: Some(TrieNode::new()),
            count: 0,
            nodes: 1,
        }
    }

    const fn vacant() -> Self {
        Self {
            root: None,
            count: 0,
            nodes: 0,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Missing edges along the path are created. Inserting a word that is
    /// already stored leaves the trie unchanged. The empty word marks the
    /// root itself.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` otherwise.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut created = 0;
        let mut node = self.root.get_or_insert_with(|| {
            created += 1;
            TrieNode::new()
        });

        for label in word.chars() {
            node = node.children.entry(label).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }

        let is_new = !node.terminating;
        node.terminating = true;

        self.nodes += created;
        if is_new {
            self.count += 1;
        }
        is_new
    }

    /// Checks if `word` is stored in the trie.
    ///
    /// A word that only exists as a prefix of longer stored words is a miss.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminating)
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. The result is
    /// sorted in ascending order and is empty when nothing matches.
    pub fn starts_with(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Returns a lazy iterator over the stored words that start with `prefix`.
    ///
    /// Yields the same words, in the same order, as [`starts_with`](Self::starts_with).
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        Words::new(prefix, self.find(prefix))
    }

    /// Returns an iterator over every stored word in ascending order.
    pub fn iter(&self) -> Words<'_> {
        self.words_with_prefix("")
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of allocated nodes, including the root.
    ///
    /// A vacant trie owns no nodes and reports zero.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Releases every node and leaves the trie vacant.
    pub fn clear(&mut self) {
        tracing::trace!(words = self.count, nodes = self.nodes, "Clearing trie");
        *self = Self::vacant();
    }

    /// Moves the contents out of this trie in constant time.
    ///
    /// The returned trie owns the root and the word count; `self` is left
    /// vacant and can be reused or dropped.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::vacant())
    }

    fn find(&self, path: &str) -> Option<&TrieNode> {
        self.root.as_ref()?.descend(path)
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NiihauTrie {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
            nodes: self.nodes,
        }
    }

    /// Copy assignment: the new graph is built before the old one is released.
    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        let previous = std::mem::replace(self, copy);
        drop(previous);
    }
}

impl PartialEq for NiihauTrie {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for NiihauTrie {}

impl fmt::Debug for NiihauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a NiihauTrie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for NiihauTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for NiihauTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
