//! Suffix trie indexing module
//!
//! Builds an uncompressed trie of every suffix of a single word and
//! answers substring queries against it. This is deliberately a
//! trie-of-suffixes, not an edge-compressed suffix tree: the query
//! algorithms rely on per-character node granularity, and the O(n^2)
//! node count is the accepted cost of the simple model.
//!
//! ## Architecture
//!
//! - `builder`: constructs the trie (the only mutating phase)
//! - `trie`: immutable query surface (contains / position / repetition)
//! - `node`: per-character trie nodes with occurrence lists
//! - `types`: core type definitions
//!
//! ## Occurrence lists
//!
//! While inserting the suffix that starts at offset `i`, `i` is appended
//! to the occurrence list of every node on the path. A node's list is
//! therefore the sorted set of start offsets of its path string, which is
//! what position lookup and the repetition queries read.

pub mod builder;
pub mod node;
pub mod trie;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTrieBuilder;
pub use trie::SuffixTrie;
pub use types::{SuffixTrieStats, TextPosition};
