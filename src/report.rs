//! Query report aggregation
//!
//! Bundles the results of every query against one word into a single
//! serializable struct, for the `report` subcommand and `--json` output.

use crate::index::{SuffixTrie, TextPosition};
use serde::Serialize;

/// Results of all queries for one word and pattern
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// The indexed word
    pub word: String,
    /// The pattern the containment/position queries ran against
    pub pattern: String,
    /// Whether `pattern` is a substring of `word`
    pub contains: bool,
    /// Character offset of the first occurrence, when contained
    pub position: Option<TextPosition>,
    /// Number of occurrences of `pattern` in `word`
    pub occurrences: usize,
    /// Longest substring occurring at two or more offsets
    pub longest_repeated: String,
    /// Repeated substring with the highest occurrence count
    pub most_repeated: String,
}

impl QueryReport {
    /// Run every query against `trie` for the given pattern
    pub fn run(trie: &SuffixTrie, pattern: &str) -> Self {
        Self {
            word: trie.word().to_string(),
            pattern: pattern.to_string(),
            contains: trie.contains(pattern),
            position: trie.find_position(pattern),
            occurrences: trie.occurrence_count(pattern),
            longest_repeated: trie.longest_repeated(),
            most_repeated: trie.most_repeated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_consistency() {
        let trie = SuffixTrie::build("mississippi");
        let report = QueryReport::run(&trie, "ssi");

        assert!(report.contains);
        assert_eq!(report.position, Some(2));
        assert_eq!(report.occurrences, 2);
        assert_eq!(report.longest_repeated, "issi");
        assert_eq!(report.word, "mississippi");
    }

    #[test]
    fn test_report_miss() {
        let trie = SuffixTrie::build("banana");
        let report = QueryReport::run(&trie, "xyz");

        assert!(!report.contains);
        assert_eq!(report.position, None);
        assert_eq!(report.occurrences, 0);
    }

    #[test]
    fn test_report_serializes() {
        let trie = SuffixTrie::build("banana");
        let report = QueryReport::run(&trie, "na");
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"contains\":true"));
        assert!(json.contains("\"position\":2"));
    }
}
