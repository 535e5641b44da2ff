// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Every node exclusively owns its children, so the node graph is a strict
//! tree. Deep copies and teardown walk the tree with an explicit stack: a
//! single very long word produces a very deep chain, and recursing over it
//! would exhaust the call stack.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A node in the Niihau Trie.
///
/// Each edge is labelled with one `char`. The path of labels from the root
/// to a node spells a prefix; `terminating` marks prefixes that are stored
/// words in their own right.
#[derive(Default)]
pub struct TrieNode {
    /// Child nodes keyed by edge label, in ascending label order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node spells a complete stored word
    pub terminating: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminating node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            terminating: false,
        }
    }

    fn leaf(terminating: bool) -> Self {
        Self {
            children: BTreeMap::new(),
            terminating,
        }
    }

    /// Follows the edge labelled `label`, if present.
    pub fn child(&self, label: char) -> Option<&TrieNode> {
        self.children.get(&label)
    }

    /// Follows every unit of `path` in turn, stopping at the first missing edge.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, label| node.child(label))
    }
}

// Only the edge labels are shown; descending here would recurse once per unit.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminating", &self.terminating)
            .field("labels", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One partially copied node: the source children still to visit and the
/// copy being assembled.
struct CopyFrame<'a> {
    label: char,
    pending: btree_map::Iter<'a, char, TrieNode>,
    copy: TrieNode,
}

impl<'a> CopyFrame<'a> {
    fn new(label: char, source: &'a TrieNode) -> Self {
        Self {
            label,
            pending: source.children.iter(),
            copy: TrieNode::leaf(source.terminating),
        }
    }
}

impl Clone for TrieNode {
    /// Deep-copies the subtree rooted at this node.
    ///
    /// A child copy is attached to its parent only once its own subtree is
    /// complete, so the traversal is post-order and visits each node once.
    fn clone(&self) -> Self {
        let mut stack: Vec<CopyFrame<'_>> = Vec::new();
        let mut frame = CopyFrame::new('\0', self);

        loop {
            if let Some((&label, child)) = frame.pending.next() {
                let parent = std::mem::replace(&mut frame, CopyFrame::new(label, child));
                stack.push(parent);
                continue;
            }

            let Some(mut parent) = stack.pop() else {
                return frame.copy;
            };
            parent.copy.children.insert(frame.label, frame.copy);
            frame = parent;
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every descendant before it is released so each drop sees an
        // empty child map and never recurses.
        let mut orphans: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = orphans.pop() {
            orphans.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
