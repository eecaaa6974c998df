//! Suffix trie queries
//!
//! The immutable side of the index. A [`SuffixTrie`] is produced once by
//! the builder and then only traversed: every query is a pure read, so
//! concurrent readers need no locking.
//!
//! Query semantics:
//!
//! - `contains` / `find_position` / `occurrence_count` walk the trie by
//!   pattern characters; a failed edge lookup is an ordinary negative
//!   result, never an error.
//! - `longest_repeated` / `most_repeated` do a depth-first traversal over
//!   nodes whose occurrence list has size >= 2. Children are visited in
//!   ascending label order and only a strictly better candidate replaces
//!   the current one, which makes both results deterministic (ties resolve
//!   to the lexicographically smallest substring).

use super::builder::SuffixTrieBuilder;
use super::node::TrieNode;
use super::types::{SuffixTrieStats, TextPosition};

/// Immutable suffix trie over a single word
///
/// Holds a node for every distinct substring of the word. Offsets are
/// character offsets.
pub struct SuffixTrie {
    root: TrieNode,
    word: String,
    word_len: usize,
}

impl SuffixTrie {
    pub(crate) fn from_parts(root: TrieNode, word: String, word_len: usize) -> Self {
        Self {
            root,
            word,
            word_len,
        }
    }

    /// Build a trie over `word` with default settings
    pub fn build(word: &str) -> Self {
        SuffixTrieBuilder::new().index(word)
    }

    /// The indexed word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Walk the trie along `pattern`, returning the final node if the
    /// whole pattern matched
    fn walk(&self, pattern: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in pattern.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Is `pattern` a substring of the word?
    ///
    /// The empty pattern is trivially contained.
    pub fn contains(&self, pattern: &str) -> bool {
        self.walk(pattern).is_some()
    }

    /// Character offset of the first occurrence of `pattern` in the word
    ///
    /// Occurrence lists are built in ascending offset order, so the first
    /// entry of the matched node's list is the minimum.
    pub fn find_position(&self, pattern: &str) -> Option<TextPosition> {
        self.walk(pattern)?.occurrences.first().copied()
    }

    /// Number of start offsets at which `pattern` occurs in the word
    ///
    /// Zero when `pattern` is not a substring. For the empty pattern this
    /// is the number of suffixes, i.e. the word length.
    pub fn occurrence_count(&self, pattern: &str) -> usize {
        self.walk(pattern)
            .map(|node| node.occurrence_count())
            .unwrap_or(0)
    }

    /// Longest substring that occurs at two or more offsets
    ///
    /// Returns the empty string when nothing repeats. Ties on length go to
    /// the lexicographically smallest substring.
    pub fn longest_repeated(&self) -> String {
        let mut path = Vec::new();
        let mut best = Vec::new();
        longest_repeated_dfs(&self.root, &mut path, &mut best);
        best.into_iter().collect()
    }

    /// Repeated substring with the highest occurrence count
    ///
    /// Ties on count prefer the longer substring, then the
    /// lexicographically smallest. Returns the empty string when no
    /// substring occurs twice.
    pub fn most_repeated(&self) -> String {
        let mut path = Vec::new();
        let mut best_count = 0;
        let mut best = Vec::new();
        most_repeated_dfs(&self.root, &mut path, &mut best_count, &mut best);
        best.into_iter().collect()
    }

    /// Statistics about the built trie
    pub fn stats(&self) -> SuffixTrieStats {
        let mut node_count = 0;
        let mut max_depth = 0;
        measure(&self.root, 0, &mut node_count, &mut max_depth);

        SuffixTrieStats {
            word_len: self.word_len,
            node_count,
            max_depth,
        }
    }
}

/// Track the longest path whose node still occurs >= 2 times
///
/// Occurrence counts only shrink on the way down, so a non-repeating node
/// closes off its whole subtree.
fn longest_repeated_dfs(node: &TrieNode, path: &mut Vec<char>, best: &mut Vec<char>) {
    for child in node.sorted_children() {
        if child.occurrence_count() < 2 {
            continue;
        }

        path.push(child.label);
        if path.len() > best.len() {
            *best = path.clone();
        }
        longest_repeated_dfs(child, path, best);
        path.pop();
    }
}

/// Track the path with the best `(occurrence_count, length)` key among
/// nodes that occur >= 2 times
fn most_repeated_dfs(
    node: &TrieNode,
    path: &mut Vec<char>,
    best_count: &mut usize,
    best: &mut Vec<char>,
) {
    for child in node.sorted_children() {
        let count = child.occurrence_count();
        if count < 2 {
            continue;
        }

        path.push(child.label);
        if (count, path.len()) > (*best_count, best.len()) {
            *best_count = count;
            *best = path.clone();
        }
        most_repeated_dfs(child, path, best_count, best);
        path.pop();
    }
}

fn measure(node: &TrieNode, depth: usize, node_count: &mut usize, max_depth: &mut usize) {
    *node_count += 1;
    if depth > *max_depth {
        *max_depth = depth;
    }
    for child in node.children.values() {
        measure(child, depth + 1, node_count, max_depth);
    }
}
