//! # SXI - Suffix Trie Index
//!
//! SXI builds an in-memory suffix trie over a single input word and
//! answers substring queries against it: containment, first-occurrence
//! position, longest repeated substring, and most repeated substring.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Trie construction and the query surface
//! - [`report`] - Aggregated query results for one word and pattern
//! - [`input`] - Loading the input word from a file
//! - [`output`] - Result formatting (plain, colored, JSON)
//!
//! ## Quick Start
//!
//! ```
//! use sxi::index::SuffixTrie;
//!
//! let trie = SuffixTrie::build("mississippi");
//!
//! assert!(trie.contains("ssi"));
//! assert_eq!(trie.find_position("ssi"), Some(2));
//! assert_eq!(trie.longest_repeated(), "issi");
//! ```
//!
//! ## Model
//!
//! The index is an uncompressed trie of all suffixes: every root-to-node
//! path spells a distinct substring of the word, and each node records
//! the start offsets at which its path string occurs. Construction is
//! O(n^2) in nodes by design; after [`index::SuffixTrie::build`] returns,
//! the structure is immutable and queries are pure reads, so it can be
//! shared freely across reader threads.

pub mod index;
pub mod input;
pub mod output;
pub mod report;
