//! Suffix trie builder
//!
//! Builds the trie by inserting every suffix of the word character by
//! character:
//! 1. For each start offset `i`, walk/create the path for `word[i..]`
//! 2. Push `i` onto the occurrence list of every node on that path
//!
//! Construction is the only mutating phase. `index` consumes the builder
//! and hands back an immutable [`SuffixTrie`], so readers never need
//! synchronization.

use super::node::TrieNode;
use super::trie::SuffixTrie;
use super::types::TextPosition;

/// Builder for constructing a suffix trie from a single word
pub struct SuffixTrieBuilder {
    root: TrieNode,
}

impl SuffixTrieBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
        }
    }

    /// Index every suffix of `word` and return the finished trie
    ///
    /// An empty word yields a root-only trie; all queries on it report
    /// negative results.
    pub fn index(mut self, word: &str) -> SuffixTrie {
        let chars: Vec<char> = word.chars().collect();

        for offset in 0..chars.len() {
            self.insert_suffix(&chars[offset..], offset as TextPosition);
        }

        SuffixTrie::from_parts(self.root, word.to_string(), chars.len())
    }

    /// Insert one suffix, recording `offset` on every visited node
    ///
    /// Idempotent on trie shape: re-walking an existing path creates no
    /// new nodes. Offsets arrive in ascending order, so each occurrence
    /// list stays sorted without an explicit sort.
    fn insert_suffix(&mut self, suffix: &[char], offset: TextPosition) {
        let mut node = &mut self.root;
        node.occurrences.push(offset);

        for &c in suffix {
            node = node.children.entry(c).or_insert_with(|| TrieNode::new(c));
            node.occurrences.push(offset);
        }
    }
}

impl Default for SuffixTrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
