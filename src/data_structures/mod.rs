//! Data structures for the Niihau dictionary.
//!
//! This module contains the in-memory structures backing the dictionary.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict single-owner node graphs, with locking only in explicit wrappers
//! - No recursion over unbounded input depth

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, NiihauTrieError, NiihauTrieResult, SharedTrie};
