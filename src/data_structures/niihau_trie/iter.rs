// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix enumeration for the Niihau Trie.

use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;

use super::node::TrieNode;

/// Lazy, depth-first iterator over the stored words below a prefix node.
///
/// Words are yielded in ascending lexicographic order: children are visited
/// in label order and every node is reported before its descendants.
#[derive(Clone)]
pub struct Words<'a> {
    /// The word spelled by the path to the innermost frame
    buffer: String,

    /// Children still to visit, one frame per level below the start node
    stack: Vec<btree_map::Iter<'a, char, TrieNode>>,

    /// Start node that has not been reported yet
    start: Option<&'a TrieNode>,
}

impl<'a> Words<'a> {
    /// Creates an iterator over the words stored at and below `start`.
    ///
    /// `prefix` is the path from the root to `start`; passing `None` as the
    /// start node yields an empty iterator.
    pub(crate) fn new(prefix: &str, start: Option<&'a TrieNode>) -> Self {
        Self {
            buffer: prefix.to_owned(),
            stack: Vec::new(),
            start,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.terminating {
                return Some(self.buffer.clone());
            }
        }

        loop {
            let pending = self.stack.last_mut()?;
            match pending.next() {
                Some((&label, child)) => {
                    self.buffer.push(label);
                    self.stack.push(child.children.iter());
                    if child.terminating {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The bottom frame belongs to the start node, whose
                    // prefix is not ours to remove.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Words<'_> {}

// The pending subtrees are left out: they can be arbitrarily deep.
impl fmt::Debug for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("buffer", &self.buffer)
            .field("depth", &self.stack.len())
            .field("pending_start", &self.start.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_shallow() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..100_000 {
            node = node.children.entry('a').or_default();
        }
        node.terminating = true;

        let mut words = Words::new("", Some(&root));
        assert_eq!(
            format!("{words:?}"),
            r#"Words { buffer: "", depth: 0, pending_start: true }"#
        );

        assert_eq!(words.next().map(|w| w.len()), Some(100_000));
        let formatted = format!("{words:?}");
        assert!(formatted.contains("depth: 100001"));
        assert!(!formatted.contains("TrieNode"));
    }
}
