//! Trie node
//!
//! Each node represents a single character on the edge from its parent,
//! so every root-to-node path spells out one distinct substring of the
//! indexed word. Nodes are exclusively owned by their parent; the trie
//! owns the root.

use super::types::{ROOT_SENTINEL, TextPosition};
use rustc_hash::FxHashMap;

/// Single node in the suffix trie
#[derive(Debug)]
pub struct TrieNode {
    /// Character on the edge from the parent (sentinel on the root)
    pub(crate) label: char,
    /// Child nodes keyed by their label
    pub(crate) children: FxHashMap<char, TrieNode>,
    /// Start offsets of every suffix whose path passes through this node,
    /// in ascending order (suffixes are inserted in offset order)
    pub(crate) occurrences: Vec<TextPosition>,
}

impl TrieNode {
    pub(crate) fn new(label: char) -> Self {
        Self {
            label,
            children: FxHashMap::default(),
            occurrences: Vec::new(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT_SENTINEL)
    }

    /// Number of places this node's path string starts in the word
    #[inline]
    pub(crate) fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Children in ascending label order
    ///
    /// `FxHashMap` iteration order is arbitrary, so every traversal whose
    /// result depends on visit order goes through this accessor.
    pub(crate) fn sorted_children(&self) -> Vec<&TrieNode> {
        let mut children: Vec<&TrieNode> = self.children.values().collect();
        children.sort_unstable_by_key(|child| child.label);
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_children_order() {
        let mut node = TrieNode::root();
        for c in ['z', 'a', 'm'] {
            node.children.insert(c, TrieNode::new(c));
        }

        let labels: Vec<char> = node.sorted_children().iter().map(|n| n.label).collect();
        assert_eq!(labels, vec!['a', 'm', 'z']);
    }

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new('x');
        assert_eq!(node.label, 'x');
        assert!(node.children.is_empty());
        assert_eq!(node.occurrence_count(), 0);
    }
}
