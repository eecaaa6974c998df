//! Types for the suffix trie index
//!
//! The index operates on characters, so all offsets are character offsets
//! into the indexed word (not byte offsets).

use serde::Serialize;

/// Offset into the indexed word, in characters
pub type TextPosition = u32;

/// Label carried by the root node; never matched against
pub const ROOT_SENTINEL: char = '\0';

/// Statistics about a built suffix trie
#[derive(Debug, Clone, Serialize)]
pub struct SuffixTrieStats {
    /// Length of the indexed word in characters
    pub word_len: usize,
    /// Total node count, root included
    pub node_count: usize,
    /// Length of the longest root-to-leaf path (equals the longest
    /// suffix, i.e. the word length, for any non-empty word)
    pub max_depth: usize,
}
